//! Secret word selection

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a word uniformly at random
///
/// Returns `None` only when `words` is empty.
///
/// # Examples
/// ```
/// use hangman::wordlists::{WORDS, choose_word, words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// let secret = choose_word(&words, &mut rand::rng()).unwrap();
/// assert!(words.contains(secret));
/// ```
pub fn choose_word<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(choose_word(&[], &mut rng).is_none());
    }

    #[test]
    fn single_word_always_chosen() {
        let words = words_from_slice(&["only"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(choose_word(&words, &mut rng).unwrap().text(), "only");
        }
    }

    #[test]
    fn same_seed_same_word() {
        let words = words_from_slice(&["cat", "dog", "fox", "owl", "yak"]);
        let first = choose_word(&words, &mut StdRng::seed_from_u64(42)).cloned();
        let second = choose_word(&words, &mut StdRng::seed_from_u64(42)).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn every_word_reachable() {
        let words = words_from_slice(&["cat", "dog", "fox"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let chosen = choose_word(&words, &mut rng).unwrap();
            let idx = words.iter().position(|w| w == chosen).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

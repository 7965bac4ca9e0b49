//! Single-letter alphabet type

use std::fmt;

/// A single lowercase ASCII letter (`a`..=`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a letter from a character
    ///
    /// Returns `None` for anything outside `a`..=`z`, including uppercase.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').map(Letter::as_char), Some('q'));
    /// assert!(Letter::new('Q').is_none());
    /// assert!(Letter::new('*').is_none());
    /// ```
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        ch.is_ascii_lowercase().then_some(Self(ch as u8))
    }

    /// Get the letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_accepts_lowercase_only() {
        assert!(Letter::new('a').is_some());
        assert!(Letter::new('z').is_some());
        assert!(Letter::new('A').is_none());
        assert!(Letter::new('1').is_none());
        assert!(Letter::new('é').is_none());
        assert!(Letter::new(' ').is_none());
    }

    #[test]
    fn all_letters_sorted() {
        let letters: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(Letter::all().count(), Letter::COUNT);
    }

    #[test]
    fn letter_ordering_is_alphabetical() {
        assert!(Letter::new('a') < Letter::new('b'));
        assert!(Letter::new('y') < Letter::new('z'));
    }

    #[test]
    fn letter_display() {
        assert_eq!(Letter::new('k').unwrap().to_string(), "k");
    }
}

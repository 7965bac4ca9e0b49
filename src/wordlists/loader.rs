//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or use the embedded constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// Words are separated by any whitespace, so both a single long line and
/// one word per line work. Entries that are not valid words are skipped.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be opened or read, and
/// `LoadError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);

    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(count = words.len(), path = %path.display(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words = content
        .split_whitespace()
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(err) => {
                skipped += 1;
                warn!(entry, %err, "skipping word list entry");
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "word list contained invalid entries");
    }

    words
}

//! Formatting utilities for terminal output

use crate::core::{Letter, Word};

/// Join letters with single spaces
#[must_use]
pub fn format_letters(letters: &[Letter]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter.as_char());
    }
    result
}

/// Join hint matches with single spaces, or say there are none
#[must_use]
pub fn format_matches(matches: &[&Word]) -> String {
    if matches.is_empty() {
        return "No matches found".to_string();
    }

    matches
        .iter()
        .map(|word| word.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralize a counter label
#[must_use]
pub fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

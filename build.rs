//! Build script for the built-in hangman dictionary
//!
//! `data/words.txt` holds whitespace-separated words; they become the
//! `WORDS` slice that `wordlists::embedded` includes.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    embed_dictionary(DICTIONARY, &Path::new(&out_dir).join("words.rs"));

    println!("cargo:rerun-if-changed={DICTIONARY}");
}

const DICTIONARY: &str = "data/words.txt";

fn embed_dictionary(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // One long line or one word per line, both work
    let words: Vec<&str> = content.split_whitespace().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Built from {input_path} by build.rs").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Words the secret is picked from ({count} words)").unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {count};").unwrap();
}

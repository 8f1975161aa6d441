//! Word list loading utilities
//!
//! Provides functions to parse newline-delimited word lists from files or
//! embedded text.

use crate::core::BaseWord;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Parse newline-delimited text into base words
///
/// Lines are trimmed and lowercased. Blank lines, lines that are not a single
/// alphabetic word, and repeats are skipped; first-seen order is kept.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_text;
///
/// let words = words_from_text("silkworm\r\nAbsolute\n\nsilkworm\nnot a word\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["silkworm", "absolute"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<BaseWord> {
    let mut seen: FxHashSet<String> = FxHashSet::default();

    text.lines()
        .filter_map(|line| BaseWord::new(line).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load base words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<BaseWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

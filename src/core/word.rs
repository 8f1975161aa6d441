//! Base word representation
//!
//! A `BaseWord` stores the lowercase word chosen for a round along with its
//! letter counts.

use super::LetterCounts;
use std::fmt;

/// The word a round is played against
///
/// Immutable once created. Letter counts are computed up front so the word can
/// be checked against many candidates without re-scanning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseWord {
    text: String,
    letters: LetterCounts,
}

/// Error type for invalid base words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl BaseWord {
    /// Create a new `BaseWord` from a string
    ///
    /// Surrounding whitespace is trimmed and the word is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed word is empty
    /// - It contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::BaseWord;
    ///
    /// let word = BaseWord::new("Silkworm").unwrap();
    /// assert_eq!(word.text(), "silkworm");
    ///
    /// assert!(BaseWord::new("").is_err());
    /// assert!(BaseWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterCounts::from_word(&text);
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.letters.total()
    }

    /// Never true: construction rejects empty words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letters.total() == 0
    }

    /// Letter multiset of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }

    /// Whether `candidate` can be spelled from this word's letters
    #[inline]
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        self.letters.can_spell(candidate)
    }

    /// Word with its first letter uppercased, as shown in titles
    #[must_use]
    pub fn capitalized(&self) -> String {
        capitalize(&self.text)
    }
}

/// Uppercase the first letter of a word
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl fmt::Display for BaseWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

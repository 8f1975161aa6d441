//! Word-list backed spell checker

use super::{DEFAULT_LANGUAGE, SpellChecker};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;
use std::ops::Range;

/// Spell checker backed by a set of known words in a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from any list of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{SpellChecker, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words("en", ["silk", "worm"]);
    /// assert!(dictionary.word_is_valid("silk", "en"));
    /// assert!(!dictionary.word_is_valid("slik", "en"));
    /// ```
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DEFAULT_LANGUAGE, DICTIONARY.iter().copied())
    }

    /// Language code this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the exact lowercase word is known
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellChecker for WordListDictionary {
    fn misspelled_range(&self, text: &str, language: &str) -> Option<Range<usize>> {
        if text.is_empty() {
            return None;
        }

        if language != self.language {
            return Some(0..text.len());
        }

        word_spans(text).find(|span| !self.words.contains(&text[span.clone()].to_lowercase()))
    }
}

/// Byte ranges of the alphabetic runs in `text`
fn word_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = text.char_indices().peekable();

    std::iter::from_fn(move || {
        // Skip separators
        while let Some(&(_, c)) = chars.peek() {
            if c.is_alphabetic() {
                break;
            }
            chars.next();
        }

        let (start, first) = chars.next()?;
        let mut end = start + first.len_utf8();
        while let Some(&(i, c)) = chars.peek() {
            if !c.is_alphabetic() {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        Some(start..end)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> WordListDictionary {
        WordListDictionary::from_words("en", ["silk", "worm", "silkworm", "Milk", "  "])
    }

    #[test]
    fn from_words_normalizes() {
        let dictionary = fixture();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.contains("milk"));
        assert!(!dictionary.contains("Milk"));
    }

    #[test]
    fn valid_word() {
        let dictionary = fixture();
        assert!(dictionary.word_is_valid("silk", "en"));
        assert!(dictionary.word_is_valid("silkworm", "en"));
    }

    #[test]
    fn unknown_word_is_misspelled() {
        let dictionary = fixture();
        assert_eq!(dictionary.misspelled_range("slik", "en"), Some(0..4));
        assert!(!dictionary.word_is_valid("slik", "en"));
    }

    #[test]
    fn lookup_ignores_case() {
        let dictionary = fixture();
        assert!(dictionary.word_is_valid("SILK", "en"));
    }

    #[test]
    fn first_misspelled_span_reported() {
        let dictionary = fixture();
        assert_eq!(dictionary.misspelled_range("silk wrom milk", "en"), Some(5..9));
        assert_eq!(dictionary.misspelled_range("silk worm", "en"), None);
    }

    #[test]
    fn other_language_is_misspelled() {
        let dictionary = fixture();
        assert_eq!(dictionary.misspelled_range("silk", "fr"), Some(0..4));
        assert!(!dictionary.word_is_valid("silk", "fr"));
    }

    #[test]
    fn empty_text_has_no_misspelling() {
        let dictionary = fixture();
        assert_eq!(dictionary.misspelled_range("", "en"), None);
    }

    #[test]
    fn word_spans_multibyte() {
        let spans: Vec<_> = word_spans("café au lait").collect();
        assert_eq!(spans, vec![0..5, 6..8, 9..13]);
    }

    #[test]
    fn embedded_dictionary_knows_silkworm_words() {
        let dictionary = WordListDictionary::embedded();
        assert_eq!(dictionary.language(), DEFAULT_LANGUAGE);
        for word in ["silkworm", "silk", "worm", "milk", "works"] {
            assert!(dictionary.word_is_valid(word, "en"), "missing {word}");
        }
        assert!(!dictionary.word_is_valid("wrmsk", "en"));
    }

    #[test]
    fn shared_reference_is_a_spell_checker() {
        fn check<S: SpellChecker>(checker: S) -> bool {
            checker.word_is_valid("worm", "en")
        }
        let dictionary = fixture();
        assert!(check(&dictionary));
    }
}

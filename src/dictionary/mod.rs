//! Spell checking
//!
//! The validator only needs a yes/no answer about whether a word is real. That
//! question is put behind the [`SpellChecker`] trait so a fixture dictionary
//! can stand in for the embedded one.

mod word_list;

pub use word_list::WordListDictionary;

use std::ops::Range;

/// Language code of the embedded dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Spell-check capability used by the submission validator
pub trait SpellChecker {
    /// Find the first misspelled span in `text`
    ///
    /// Scans the full length of `text` and returns the byte range of the first
    /// word not known for `language`, or `None` if every word is known.
    fn misspelled_range(&self, text: &str, language: &str) -> Option<Range<usize>>;

    /// Whether `word` is spelled correctly in `language`
    fn word_is_valid(&self, word: &str, language: &str) -> bool {
        self.misspelled_range(word, language).is_none()
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn misspelled_range(&self, text: &str, language: &str) -> Option<Range<usize>> {
        (**self).misspelled_range(text, language)
    }
}

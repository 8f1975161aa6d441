//! Pool of base words
//!
//! The pool is loaded once and never empty: when the word resource is missing,
//! unreadable, or holds no usable words, a single fallback word takes its place.

use crate::core::BaseWord;
use crate::wordlists::START_WORDS;
use crate::wordlists::loader::{load_from_file, words_from_text};
use rand::Rng;
use std::path::Path;

/// Base word used when no pool resource is available
pub const FALLBACK_WORD: &str = "silkworm";

/// Where a pool's words came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolSource {
    /// Parsed from the supplied resource
    Resource,
    /// Resource absent, unreadable, or empty; holds only the fallback word
    Fallback,
}

/// Read-only set of words a round's base word is drawn from
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<BaseWord>,
    source: PoolSource,
}

/// Load a pool from optional newline-delimited text
///
/// Falls back to a pool holding only [`FALLBACK_WORD`].
///
/// # Examples
/// ```
/// use word_scramble::game::load_pool;
///
/// let pool = load_pool(Some("absolute\nabstract\n"));
/// assert_eq!(pool.len(), 2);
///
/// let fallback = load_pool(None);
/// assert_eq!(fallback.words()[0].text(), "silkworm");
/// ```
#[must_use]
pub fn load_pool(resource: Option<&str>) -> WordPool {
    WordPool::load_with_fallback(resource, FALLBACK_WORD)
}

impl WordPool {
    /// Load a pool, using `fallback` as the singleton when nothing usable is found
    ///
    /// An invalid `fallback` is replaced by [`FALLBACK_WORD`].
    #[must_use]
    pub fn load_with_fallback(resource: Option<&str>, fallback: &str) -> Self {
        let words = resource.map(words_from_text).unwrap_or_default();

        if words.is_empty() {
            Self::fallback(fallback)
        } else {
            Self {
                words,
                source: PoolSource::Resource,
            }
        }
    }

    /// Pool made from the bundled word list
    #[must_use]
    pub fn embedded() -> Self {
        load_pool(Some(START_WORDS))
    }

    /// Pool read from a file
    ///
    /// A file that can't be read is treated like a missing resource.
    #[must_use]
    pub fn from_file<P: AsRef<Path>>(path: P, fallback: &str) -> Self {
        match load_from_file(path) {
            Ok(words) if !words.is_empty() => Self {
                words,
                source: PoolSource::Resource,
            },
            _ => Self::fallback(fallback),
        }
    }

    fn fallback(word: &str) -> Self {
        let word = BaseWord::new(word)
            .or_else(|_| BaseWord::new(FALLBACK_WORD))
            .into_iter()
            .collect();

        Self {
            words: word,
            source: PoolSource::Fallback,
        }
    }

    /// Pick a base word uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &BaseWord {
        // Non-empty by construction
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[BaseWord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true: an empty resource yields the fallback pool
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn source(&self) -> PoolSource {
        self.source
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == PoolSource::Fallback
    }
}

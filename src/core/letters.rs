//! Letter availability
//!
//! A candidate is spellable from a base word when every letter it uses is
//! present in the base word at least as many times as the candidate uses it.

use rustc_hash::FxHashMap;

/// Check whether `candidate` can be spelled from the letters of `base`
///
/// Walks the candidate left to right and removes the first remaining
/// occurrence of each letter from a scratch copy of the base word. Both
/// inputs are expected to be lowercase already.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("silkworm", "silk"));
/// assert!(is_possible("silkworm", "worms"));
/// assert!(!is_possible("silkworm", "silks")); // only one 's'
/// assert!(!is_possible("silkworm", "milky")); // no 'y'
/// ```
#[must_use]
pub fn is_possible(base: &str, candidate: &str) -> bool {
    let mut remaining: Vec<char> = base.chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(position) => {
                remaining.swap_remove(position);
            }
            None => return false,
        }
    }

    true
}

/// Letter multiset of a word
///
/// Precomputed counts make repeated spellability checks against the same base
/// word cheap, which matters when scanning a whole dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of a word
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0;
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of times `letter` appears
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether `candidate` uses no letter more often than this multiset holds
    ///
    /// Agrees with [`is_possible`] for every input.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        if candidate.chars().count() > self.total {
            return false;
        }

        let mut used: FxHashMap<char, usize> = FxHashMap::default();
        for letter in candidate.chars() {
            let slot = used.entry(letter).or_insert(0);
            *slot += 1;
            if *slot > self.count(letter) {
                return false;
            }
        }
        true
    }
}

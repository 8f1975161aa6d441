//! Submission validation
//!
//! Three checks run in a fixed order and the first failure decides the
//! rejection:
//! 1. Letter availability: the word can be spelled from the base word
//! 2. Originality: the word hasn't been accepted this round
//! 3. Validity: the word is long enough and the spell checker knows it
//!
//! All checks are pure. Recording an accepted word is the session's job.

use super::config::GameConfig;
use crate::core::{BaseWord, Rejection, is_possible};
use crate::dictionary::SpellChecker;

/// Whether `candidate` is spellable from the base word's letters
#[inline]
#[must_use]
pub fn check_possible(base: &BaseWord, candidate: &str) -> bool {
    is_possible(base.text(), candidate)
}

/// Whether `candidate` is absent from the round's accepted words
#[must_use]
pub fn is_original(used: &[String], candidate: &str) -> bool {
    !used.iter().any(|word| word == candidate)
}

/// Length and spelling check
///
/// A word equal to the base word is not treated specially.
///
/// # Errors
/// - `Rejection::TooShort` when shorter than `config.min_length` letters
/// - `Rejection::NotRecognized` when the spell checker flags any part of it
pub fn is_real<S: SpellChecker + ?Sized>(
    checker: &S,
    candidate: &str,
    config: &GameConfig,
) -> Result<(), Rejection> {
    if candidate.chars().count() < config.min_length {
        return Err(Rejection::TooShort);
    }

    if checker
        .misspelled_range(candidate, &config.language)
        .is_some()
    {
        return Err(Rejection::NotRecognized);
    }

    Ok(())
}

/// Validate a submission against a round
///
/// The candidate is lowercased before any check. Returns the lowercased word
/// on success; `used` is not modified.
///
/// # Errors
/// Returns the [`Rejection`] of the first check that fails.
///
/// # Examples
/// ```
/// use word_scramble::core::{BaseWord, Rejection};
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::game::{GameConfig, validate};
///
/// let base = BaseWord::new("silkworm").unwrap();
/// let dictionary = WordListDictionary::from_words("en", ["silk", "silks"]);
/// let config = GameConfig::default();
///
/// assert_eq!(validate(&base, &[], "Silk", &dictionary, &config), Ok("silk".to_string()));
/// assert_eq!(
///     validate(&base, &[], "silks", &dictionary, &config),
///     Err(Rejection::NotConstructible)
/// );
/// ```
pub fn validate<S: SpellChecker + ?Sized>(
    base: &BaseWord,
    used: &[String],
    candidate: &str,
    checker: &S,
    config: &GameConfig,
) -> Result<String, Rejection> {
    let candidate = candidate.to_lowercase();

    if !check_possible(base, &candidate) {
        return Err(Rejection::NotConstructible);
    }

    if !is_original(used, &candidate) {
        return Err(Rejection::AlreadyUsed);
    }

    is_real(checker, &candidate, config)?;

    Ok(candidate)
}

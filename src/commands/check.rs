//! Check command
//!
//! Plays a list of words, in order, against a fresh round with a chosen base
//! word.

use crate::core::BaseWord;
use crate::dictionary::SpellChecker;
use crate::game::{GameConfig, GameSession, Submission, load_pool};

/// Result of checking a sequence of words
pub struct CheckResult {
    pub base: String,
    pub steps: Vec<CheckStep>,
    /// Accepted words, most recent first
    pub used: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_accepted()).count()
    }
}

/// One submitted word and how it fared
pub struct CheckStep {
    pub word: String,
    pub outcome: Submission,
    /// Player-facing text for a rejection
    pub message: Option<String>,
}

/// Submit `words` in order against a round on `base`
///
/// # Errors
///
/// Returns an error if `base` is not a single alphabetic word.
pub fn check_words<D: SpellChecker>(
    base: &str,
    words: &[String],
    checker: D,
    config: GameConfig,
) -> Result<CheckResult, String> {
    let base_word = BaseWord::new(base).map_err(|e| format!("Invalid base word: {e}"))?;
    // The round is pinned below, so the pool is never drawn from
    let mut session = GameSession::with_config(load_pool(None), checker, rand::rng(), config);
    session.start_round_with(base_word);

    let mut steps = Vec::with_capacity(words.len());
    for word in words {
        let outcome = session.submit(word).map_err(|e| e.to_string())?;
        let message = outcome
            .rejection()
            .map(|reason| session.rejection_message(reason));

        steps.push(CheckStep {
            word: word.clone(),
            outcome,
            message,
        });
    }

    Ok(CheckResult {
        base: session
            .base_word()
            .map(|b| b.text().to_string())
            .unwrap_or_default(),
        steps,
        used: session.used_words().to_vec(),
    })
}

//! Game session
//!
//! Owns everything a round needs: the pool, the current base word, the words
//! accepted so far, the random source and the spell checker. Front ends only
//! see the read accessors plus `start_round` and `submit`.

use super::config::GameConfig;
use super::pool::WordPool;
use super::validator::validate;
use crate::core::{BaseWord, Rejection, ValidationError};
use crate::dictionary::SpellChecker;
use rand::Rng;
use std::fmt;

/// Outcome of a submission that could be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The lowercased word, now at the front of the used words
    Accepted(String),
    Rejected(Rejection),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// How much of the base word a used word covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterUsage {
    pub used: usize,
    pub total: usize,
}

impl fmt::Display for LetterUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You used {} of {} letters.", self.used, self.total)
    }
}

/// A single player's game
///
/// `R` is the random source for base-word selection, `D` the spell checker.
pub struct GameSession<R, D> {
    pool: WordPool,
    config: GameConfig,
    rng: R,
    checker: D,
    base: Option<BaseWord>,
    used: Vec<String>,
}

impl<R: Rng, D: SpellChecker> GameSession<R, D> {
    /// Create a session with the default rules
    ///
    /// No round is in progress until [`start_round`](Self::start_round) is called.
    pub fn new(pool: WordPool, checker: D, rng: R) -> Self {
        Self::with_config(pool, checker, rng, GameConfig::default())
    }

    pub fn with_config(pool: WordPool, checker: D, rng: R, config: GameConfig) -> Self {
        Self {
            pool,
            config,
            rng,
            checker,
            base: None,
            used: Vec::new(),
        }
    }

    /// Start a new round with a randomly chosen base word
    ///
    /// Clears the used words.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::{GameSession, Submission, load_pool};
    ///
    /// let dictionary = WordListDictionary::from_words("en", ["silk"]);
    /// let mut session = GameSession::new(load_pool(None), dictionary, StdRng::seed_from_u64(0));
    ///
    /// assert_eq!(session.start_round().text(), "silkworm");
    /// assert_eq!(session.submit("silk"), Ok(Submission::Accepted("silk".to_string())));
    /// assert_eq!(session.used_words(), ["silk"]);
    /// ```
    pub fn start_round(&mut self) -> &BaseWord {
        let base = self.pool.choose(&mut self.rng).clone();
        self.begin(base)
    }

    /// Start a new round with a chosen base word
    pub fn start_round_with(&mut self, base: BaseWord) -> &BaseWord {
        self.begin(base)
    }

    fn begin(&mut self, base: BaseWord) -> &BaseWord {
        self.used.clear();
        self.base.insert(base)
    }

    /// Validate a candidate and record it if accepted
    ///
    /// # Errors
    /// Returns `ValidationError::NoRound` if no round has been started.
    pub fn submit(&mut self, candidate: &str) -> Result<Submission, ValidationError> {
        let base = self.base.as_ref().ok_or(ValidationError::NoRound)?;

        match validate(base, &self.used, candidate, &self.checker, &self.config) {
            Ok(word) => {
                self.used.insert(0, word.clone());
                Ok(Submission::Accepted(word))
            }
            Err(reason) => Ok(Submission::Rejected(reason)),
        }
    }
}

impl<R, D> GameSession<R, D> {
    /// Current base word, if a round is in progress
    #[must_use]
    pub const fn base_word(&self) -> Option<&BaseWord> {
        self.base.as_ref()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    /// Letters of the base word covered by the used word at `index`
    #[must_use]
    pub fn letter_usage(&self, index: usize) -> Option<LetterUsage> {
        let base = self.base.as_ref()?;
        let word = self.used.get(index)?;
        Some(LetterUsage {
            used: word.chars().count(),
            total: base.len(),
        })
    }

    /// Player-facing message for a rejection in the current round
    #[must_use]
    pub fn rejection_message(&self, reason: Rejection) -> String {
        let base = self.base.as_ref().map_or("", BaseWord::text);
        reason.message(base, self.config.min_length)
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn checker(&self) -> &D {
        &self.checker
    }
}

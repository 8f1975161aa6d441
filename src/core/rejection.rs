//! Rejection reasons and validator precondition failures

use std::fmt;

/// Why a submission was turned down
///
/// A closed set of recoverable, user-facing outcomes. None of them change any
/// game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Uses a letter the base word doesn't have (or not enough of them)
    NotConstructible,
    /// Already accepted earlier this round
    AlreadyUsed,
    /// Fewer letters than the configured minimum
    TooShort,
    /// The spell checker doesn't know it
    NotRecognized,
}

impl Rejection {
    /// Short heading for the rejection, as shown in an alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NotConstructible => "Word Not Possible",
            Self::AlreadyUsed => "Word Already Used",
            Self::TooShort => "Word Too Short",
            Self::NotRecognized => "Word Not Recognised",
        }
    }

    /// Full player-facing message
    ///
    /// `base` is the round's base word, used by `NotConstructible`.
    /// `min_length` is the configured minimum, used by `TooShort`.
    #[must_use]
    pub fn message(self, base: &str, min_length: usize) -> String {
        match self {
            Self::NotConstructible => format!("You can't spell that word from {base}!"),
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::TooShort => format!("Words must be at least {min_length} letters long."),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConstructible => write!(f, "not constructible from base word's letters"),
            Self::AlreadyUsed => write!(f, "already used this round"),
            Self::TooShort => write!(f, "too short"),
            Self::NotRecognized => write!(f, "not a recognized word"),
        }
    }
}

impl std::error::Error for Rejection {}

/// The validator could not evaluate a submission at all
///
/// Kept apart from [`Rejection`]: this is a caller mistake, not a verdict on
/// the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No round has been started, so there is no base word
    NoRound,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRound => write!(f, "No round in progress; start a round first"),
        }
    }
}

impl std::error::Error for ValidationError {}

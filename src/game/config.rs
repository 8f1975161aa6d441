//! Game configuration

use super::pool::FALLBACK_WORD;
use crate::dictionary::DEFAULT_LANGUAGE;

/// Rules a session validates submissions with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Language passed to the spell checker
    pub language: String,
    /// Shortest accepted word, in letters
    pub min_length: usize,
    /// Base word used when the pool resource is unusable
    pub fallback_word: String,
}

impl GameConfig {
    #[must_use]
    pub fn new(language: impl Into<String>, min_length: usize) -> Self {
        Self {
            language: language.into(),
            min_length,
            fallback_word: FALLBACK_WORD.to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.min_length, 3);
        assert_eq!(config.fallback_word, "silkworm");
    }
}

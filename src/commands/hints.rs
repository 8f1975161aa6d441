//! Hints command
//!
//! Lists every dictionary word that would be accepted against a base word in
//! a fresh round.

use crate::core::BaseWord;
use crate::dictionary::{SpellChecker, WordListDictionary};
use crate::game::GameConfig;
use rayon::prelude::*;

/// Result of a hints lookup
pub struct HintsResult {
    pub base: String,
    pub words: Vec<String>,
    pub dictionary_size: usize,
}

impl HintsResult {
    /// Longest accepted word, if any
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Find every acceptable word spellable from `base`
///
/// Words are sorted longest first, then alphabetically.
///
/// # Examples
/// ```
/// use word_scramble::commands::find_hints;
/// use word_scramble::core::BaseWord;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::game::GameConfig;
///
/// let base = BaseWord::new("silkworm").unwrap();
/// let dictionary = WordListDictionary::from_words("en", ["silk", "worms", "so", "silks"]);
///
/// let hints = find_hints(&base, &dictionary, &GameConfig::default());
/// assert_eq!(hints, ["worms", "silk"]);
/// ```
#[must_use]
pub fn find_hints(
    base: &BaseWord,
    dictionary: &WordListDictionary,
    config: &GameConfig,
) -> Vec<String> {
    let entries: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = entries
        .par_iter()
        .filter(|word| word.chars().count() >= config.min_length)
        .filter(|word| base.can_spell(word))
        .filter(|word| dictionary.word_is_valid(word, &config.language))
        .map(|word| (*word).to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

/// Look up hints for a base word given as text
///
/// # Errors
///
/// Returns an error if `base` is not a single alphabetic word.
pub fn hints_for(
    base: &str,
    dictionary: &WordListDictionary,
    config: &GameConfig,
) -> Result<HintsResult, String> {
    let base_word = BaseWord::new(base).map_err(|e| format!("Invalid base word: {e}"))?;
    let words = find_hints(&base_word, dictionary, config);

    Ok(HintsResult {
        base: base_word.text().to_string(),
        words,
        dictionary_size: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_possible;

    #[test]
    fn hints_are_spellable_and_long_enough() {
        let dictionary = WordListDictionary::embedded();
        let result = hints_for("silkworm", &dictionary, &GameConfig::default()).unwrap();

        assert!(!result.words.is_empty());
        for word in &result.words {
            assert!(is_possible("silkworm", word), "{word} not spellable");
            assert!(word.len() >= 3, "{word} too short");
        }
    }

    #[test]
    fn hints_include_known_words() {
        let dictionary = WordListDictionary::embedded();
        let result = hints_for("silkworm", &dictionary, &GameConfig::default()).unwrap();

        for word in ["silk", "worm", "milk", "silkworm"] {
            assert!(result.words.iter().any(|w| w == word), "missing {word}");
        }
        assert!(!result.words.iter().any(|w| w == "silks"));
    }

    #[test]
    fn hints_sorted_longest_first() {
        let dictionary = WordListDictionary::embedded();
        let result = hints_for("silkworm", &dictionary, &GameConfig::default()).unwrap();

        assert_eq!(result.longest(), Some("silkworm"));
        for pair in result.words.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
    }

    #[test]
    fn hints_respect_min_length() {
        let dictionary = WordListDictionary::from_words("en", ["ilk", "silk", "worm"]);
        let base = BaseWord::new("silkworm").unwrap();
        let hints = find_hints(&base, &dictionary, &GameConfig::new("en", 4));
        assert_eq!(hints, ["silk", "worm"]);
    }

    #[test]
    fn hints_for_invalid_base_errors() {
        let dictionary = WordListDictionary::embedded();
        assert!(hints_for("two words", &dictionary, &GameConfig::default()).is_err());
    }

    #[test]
    fn hints_for_uppercase_base() {
        let dictionary = WordListDictionary::from_words("en", ["silk"]);
        let result = hints_for("SILKWORM", &dictionary, &GameConfig::default()).unwrap();
        assert_eq!(result.base, "silkworm");
        assert_eq!(result.words, ["silk"]);
        assert_eq!(result.dictionary_size, 1);
    }
}

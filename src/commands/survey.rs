//! Survey the base-word pool
//!
//! Counts how many dictionary words each pool word admits, to spot base words
//! that make for thin rounds.

use super::hints::find_hints;
use crate::dictionary::WordListDictionary;
use crate::game::{GameConfig, WordPool};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Answer statistics for one pool word
#[derive(Debug, Clone)]
pub struct SurveyEntry {
    pub word: String,
    pub answers: usize,
    pub longest: Option<String>,
}

/// Statistics over the whole pool
#[derive(Debug)]
pub struct SurveyResult {
    /// Sorted by answer count, richest first
    pub entries: Vec<SurveyEntry>,
    pub total_words: usize,
    pub average_answers: f64,
    pub duration: Duration,
}

impl SurveyResult {
    /// Pool word with the fewest answers
    #[must_use]
    pub fn poorest(&self) -> Option<&SurveyEntry> {
        self.entries.last()
    }
}

/// Count acceptable answers for every word in the pool
///
/// Progress is drawn to stderr when `show_progress` is set.
#[must_use]
pub fn run_survey(
    pool: &WordPool,
    dictionary: &WordListDictionary,
    config: &GameConfig,
    show_progress: bool,
) -> SurveyResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(pool.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let mut entries: Vec<SurveyEntry> = pool
        .words()
        .par_iter()
        .map(|base| {
            let hints = find_hints(base, dictionary, config);
            pb.inc(1);
            SurveyEntry {
                word: base.text().to_string(),
                answers: hints.len(),
                longest: hints.into_iter().find(|w| w != base.text()),
            }
        })
        .collect();

    pb.finish_with_message("done");

    entries.sort_by(|a, b| b.answers.cmp(&a.answers).then_with(|| a.word.cmp(&b.word)));

    let total_words = entries.len();
    let total_answers: usize = entries.iter().map(|e| e.answers).sum();
    let average_answers = if total_words > 0 {
        total_answers as f64 / total_words as f64
    } else {
        0.0
    };

    SurveyResult {
        entries,
        total_words,
        average_answers,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::load_pool;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words(
            "en",
            ["silk", "worm", "milk", "silkworm", "roo", "kangaroo", "ran", "rag"],
        )
    }

    #[test]
    fn survey_counts_answers_per_word() {
        let pool = load_pool(Some("silkworm\nkangaroo"));
        let result = run_survey(&pool, &dictionary(), &GameConfig::default(), false);

        assert_eq!(result.total_words, 2);
        // Tied counts fall back to alphabetical order
        assert_eq!(result.entries[0].word, "kangaroo");
        assert_eq!(result.entries[0].answers, 4);
        assert_eq!(result.entries[1].word, "silkworm");
        assert_eq!(result.entries[1].answers, 4);
        assert!((result.average_answers - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn survey_longest_skips_base_word() {
        let pool = load_pool(Some("silkworm"));
        let result = run_survey(&pool, &dictionary(), &GameConfig::default(), false);

        let entry = &result.entries[0];
        assert_eq!(entry.longest.as_deref(), Some("milk"));
    }

    #[test]
    fn survey_sorted_richest_first() {
        let pool = load_pool(Some("worm\nsilkworm\nmilk"));
        let result = run_survey(&pool, &dictionary(), &GameConfig::default(), false);

        let counts: Vec<usize> = result.entries.iter().map(|e| e.answers).collect();
        assert_eq!(counts, [4, 1, 1]);
        assert_eq!(result.poorest().map(|e| e.word.as_str()), Some("worm"));
    }

    #[test]
    fn survey_embedded_pool() {
        let pool = WordPool::embedded();
        let dictionary = WordListDictionary::embedded();
        let result = run_survey(&pool, &dictionary, &GameConfig::default(), false);

        assert_eq!(result.total_words, pool.len());
        // Every pool word is in the dictionary, so it is at least its own answer
        assert!(result.entries.iter().all(|e| e.answers >= 1));
    }
}

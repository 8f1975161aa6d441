//! Formatting utilities for terminal output

use crate::game::LetterUsage;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the base word a used word covers
#[must_use]
pub fn letter_usage_bar(usage: LetterUsage, width: usize) -> String {
    create_progress_bar(usage.used as f64, usage.total as f64, width)
}

/// Spread a word's letters out, as shown in headers
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn letter_usage_bar_scales() {
        let bar = letter_usage_bar(LetterUsage { used: 4, total: 8 }, 8);
        assert_eq!(bar, "████░░░░");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("silk"), "S I L K");
        assert_eq!(spaced_letters(""), "");
    }
}

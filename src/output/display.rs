//! Display functions for command results

use super::formatters::{create_progress_bar, letter_usage_bar, spaced_letters};
use crate::commands::{CheckResult, HintsResult, SurveyResult};
use crate::game::{LetterUsage, Submission};
use colored::Colorize;

/// Print the result of checking a list of words
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Base word: {}",
        spaced_letters(&result.base).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let base_len = result.base.chars().count();

    for step in &result.steps {
        match &step.outcome {
            Submission::Accepted(word) => {
                let usage = LetterUsage {
                    used: word.chars().count(),
                    total: base_len,
                };
                println!(
                    "\n{} {} [{}] {}",
                    "✓".green().bold(),
                    word.to_uppercase().bright_white().bold(),
                    letter_usage_bar(usage, base_len).green(),
                    usage.to_string().bright_black()
                );
            }
            Submission::Rejected(reason) => {
                println!(
                    "\n{} {} {}",
                    "✗".red().bold(),
                    step.word.to_uppercase(),
                    format!("({reason})").bright_black()
                );
                if let Some(message) = &step.message {
                    println!("  {}: {}", reason.title().red(), message);
                }
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} of {} words accepted",
            result.accepted_count(),
            result.steps.len()
        )
        .bold()
    );
}

/// Print every acceptable word for a base word
pub fn print_hints_result(result: &HintsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINTS:".bright_cyan().bold(),
        result.base.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📖 {} of {} dictionary words can be spelled",
        result.words.len().to_string().bright_yellow(),
        result.dictionary_size
    );

    let shown = limit.unwrap_or(result.words.len());
    let mut current_len = 0;
    for word in result.words.iter().take(shown) {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n{}", format!("{len} letters:").bright_cyan().bold());
        }
        println!("   {}", word.to_uppercase());
    }

    if shown < result.words.len() {
        println!(
            "\n   {}",
            format!("… and {} more", result.words.len() - shown).bright_black()
        );
    }
}

/// Print the pool survey, richest and poorest base words
pub fn print_survey_result(result: &SurveyResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POOL SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Base words:       {}", result.total_words);
    println!(
        "   Average answers:  {}",
        format!("{:.1}", result.average_answers)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let max = result.entries.first().map_or(0, |e| e.answers) as f64;

    println!("\n📈 {}", "Richest base words:".bright_cyan().bold());
    for entry in result.entries.iter().take(top) {
        let bar = create_progress_bar(entry.answers as f64, max, 30);
        println!(
            "   {:<10} {} {:4}  {}",
            entry.word.to_uppercase(),
            bar.green(),
            entry.answers,
            entry.longest.as_deref().unwrap_or("-").bright_black()
        );
    }

    if result.entries.len() > top {
        println!("\n📉 {}", "Poorest base words:".bright_cyan().bold());
        let skip = result.entries.len().saturating_sub(top).max(top);
        for entry in result.entries.iter().skip(skip) {
            let bar = create_progress_bar(entry.answers as f64, max, 30);
            println!(
                "   {:<10} {} {:4}",
                entry.word.to_uppercase(),
                bar.yellow(),
                entry.answers
            );
        }
    }
}

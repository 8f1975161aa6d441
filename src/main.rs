//! Word Scramble - CLI
//!
//! Spell words from the letters of a random base word, in a TUI or a plain
//! terminal prompt, plus a few tools for exploring the word pool.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::{
    commands::{check_words, hints_for, run_simple, run_survey},
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    game::{GameConfig, GameSession, WordPool},
    output::{print_check_result, print_hints_result, print_survey_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random base word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word pool: 'embedded' (default) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    pool: String,

    /// Seed for picking base words (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Shortest accepted word
    #[arg(short, long, global = true, default_value = "3")]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// Submit words, in order, against a chosen base word
    Check {
        /// The base word to play against
        base: String,

        /// Words to submit
        words: Vec<String>,
    },

    /// List every acceptable word for a base word
    Hints {
        /// The base word to search
        base: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Rank the word pool by how many answers each base word allows
    Survey {
        /// Number of base words to show at each end
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

/// Load the base-word pool based on the -p flag
///
/// An unreadable or empty file falls back to the single default word.
fn load_word_pool(pool_mode: &str, config: &GameConfig) -> WordPool {
    if pool_mode == "embedded" {
        return WordPool::embedded();
    }

    let pool = WordPool::from_file(pool_mode, &config.fallback_word);
    if pool.is_fallback() {
        eprintln!(
            "{} no usable words in '{pool_mode}', playing with '{}'",
            "note:".bright_black(),
            config.fallback_word
        );
    }
    pool
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(DEFAULT_LANGUAGE, cli.min_length);

    let dictionary = WordListDictionary::embedded();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let pool = load_word_pool(&cli.pool, &config);
            run_play_command(pool, &dictionary, cli.seed, config)
        }
        Commands::Simple => {
            let pool = load_word_pool(&cli.pool, &config);
            run_simple_command(pool, &dictionary, cli.seed, config)
        }
        Commands::Check { base, words } => run_check_command(&base, &words, &dictionary, config),
        Commands::Hints { base, limit } => run_hints_command(&base, limit, &dictionary, &config),
        Commands::Survey { top } => {
            let pool = load_word_pool(&cli.pool, &config);
            run_survey_command(&pool, top, &dictionary, &config);
            Ok(())
        }
    }
}

fn run_check_command(
    base: &str,
    words: &[String],
    dictionary: &WordListDictionary,
    config: GameConfig,
) -> Result<()> {
    let result = check_words(base, words, dictionary, config).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_hints_command(
    base: &str,
    limit: Option<usize>,
    dictionary: &WordListDictionary,
    config: &GameConfig,
) -> Result<()> {
    let result = hints_for(base, dictionary, config).map_err(|e| anyhow::anyhow!(e))?;
    print_hints_result(&result, limit);
    Ok(())
}

fn run_survey_command(
    pool: &WordPool,
    top: usize,
    dictionary: &WordListDictionary,
    config: &GameConfig,
) {
    println!("🔎 Surveying {} base words...", pool.len());
    let result = run_survey(pool, dictionary, config, true);
    print_survey_result(&result, top);
}

fn run_simple_command(
    pool: WordPool,
    dictionary: &WordListDictionary,
    seed: Option<u64>,
    config: GameConfig,
) -> Result<()> {
    let mut session = GameSession::with_config(pool, dictionary, make_rng(seed), config);
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(
    pool: WordPool,
    dictionary: &WordListDictionary,
    seed: Option<u64>,
    config: GameConfig,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = GameSession::with_config(pool, dictionary, make_rng(seed), config);
    run_tui(App::new(session))
}

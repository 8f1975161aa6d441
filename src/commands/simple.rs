//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::SpellChecker;
use crate::game::{GameSession, Submission};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng, D: SpellChecker>(session: &mut GameSession<R, D>) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the game loop over any line source and sink
///
/// Ends on a quit command or end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R, D, I, O>(
    session: &mut GameSession<R, D>,
    mut input: I,
    mut output: O,
) -> Result<(), String>
where
    R: Rng,
    D: SpellChecker,
    I: BufRead,
    O: Write,
{
    print_banner(&mut output, session.config().min_length).map_err(|e| e.to_string())?;
    start_round(session, &mut output).map_err(|e| e.to_string())?;

    loop {
        let Some(line) = read_line(&mut input, &mut output, "Your word")? else {
            writeln!(output, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())?;
            return Ok(());
        };

        // Commands carry a ':' prefix so every plain word reaches the validator
        match line.to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())?;
                return Ok(());
            }
            ":new" | ":n" => {
                start_round(session, &mut output).map_err(|e| e.to_string())?;
            }
            ":list" | ":l" => {
                print_used_words(session, &mut output).map_err(|e| e.to_string())?;
            }
            _ => {
                let outcome = session.submit(&line).map_err(|e| e.to_string())?;
                print_outcome(session, &outcome, &mut output).map_err(|e| e.to_string())?;
            }
        }
    }
}

fn print_banner<O: Write>(output: &mut O, min_length: usize) -> io::Result<()> {
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║                 Word Scramble - Interactive Mode             ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        output,
        "Spell as many words as you can from the letters of the base word."
    )?;
    writeln!(
        output,
        "Words need at least {min_length} letters, and each letter can be used once.\n"
    )?;
    writeln!(
        output,
        "Commands: ':new' for a new word, ':list' to see your words, ':quit' to exit\n"
    )
}

fn start_round<R: Rng, D: SpellChecker, O: Write>(
    session: &mut GameSession<R, D>,
    output: &mut O,
) -> io::Result<()> {
    let base = session.start_round().capitalized();
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(output, "🔤 Your word: {}", base.bright_yellow().bold())?;
    writeln!(output, "────────────────────────────────────────────────────────────\n")
}

fn print_outcome<R, D, O: Write>(
    session: &GameSession<R, D>,
    outcome: &Submission,
    output: &mut O,
) -> io::Result<()> {
    match outcome {
        Submission::Accepted(word) => {
            let usage = session
                .letter_usage(0)
                .map(|u| u.to_string())
                .unwrap_or_default();
            writeln!(
                output,
                "{} {}  {}\n",
                "✓".green().bold(),
                word.to_uppercase().bright_white().bold(),
                usage.bright_black()
            )
        }
        Submission::Rejected(reason) => {
            writeln!(
                output,
                "{} {}: {}\n",
                "❌".red(),
                reason.title().red().bold(),
                session.rejection_message(*reason)
            )
        }
    }
}

fn print_used_words<R, D, O: Write>(
    session: &GameSession<R, D>,
    output: &mut O,
) -> io::Result<()> {
    let used = session.used_words();
    if used.is_empty() {
        return writeln!(output, "No words yet!\n");
    }

    writeln!(output, "Your words ({}):", used.len())?;
    for (i, word) in used.iter().enumerate() {
        let usage = session
            .letter_usage(i)
            .map(|u| format!("{}/{}", u.used, u.total))
            .unwrap_or_default();
        writeln!(output, "  • {} {}", word.to_uppercase(), usage.bright_black())?;
    }
    writeln!(output)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::game::{GameConfig, load_pool};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(script: &str) -> (GameSession<StdRng, WordListDictionary>, String) {
        let dictionary = WordListDictionary::from_words("en", ["silk", "worm", "milk"]);
        play_with(
            GameSession::new(load_pool(None), dictionary, StdRng::seed_from_u64(0)),
            script,
        )
    }

    fn play_with(
        mut session: GameSession<StdRng, WordListDictionary>,
        script: &str,
    ) -> (GameSession<StdRng, WordListDictionary>, String) {
        let mut output = Vec::new();

        run_simple_with(&mut session, script.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_words_until_quit() {
        let (session, output) = play("silk\nworm\n:quit\n");
        assert_eq!(session.used_words(), ["worm", "silk"]);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn reports_rejections() {
        let (session, output) = play("silks\nsilk\nsilk\n");
        assert_eq!(session.used_words(), ["silk"]);
        assert!(output.contains("You can't spell that word from silkworm!"));
        assert!(output.contains("Be more original!"));
    }

    #[test]
    fn end_of_input_stops() {
        let (session, _) = play("milk");
        assert_eq!(session.used_words(), ["milk"]);
    }

    #[test]
    fn new_clears_words() {
        let (session, _) = play("silk\n:new\n");
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn list_shows_letter_usage() {
        let (_, output) = play("silk\n:list\n");
        assert!(output.contains("Your words (1):"));
        assert!(output.contains("4/8"));
    }

    #[test]
    fn blank_lines_ignored() {
        let (session, output) = play("\n\nsilk\n");
        assert_eq!(session.used_words(), ["silk"]);
        assert!(!output.contains("Word Too Short"));
    }

    #[test]
    fn command_words_are_played_as_answers() {
        let dictionary =
            WordListDictionary::from_words("en", ["quit", "question", "list", "new"]);
        let session = GameSession::new(
            load_pool(Some("question")),
            dictionary,
            StdRng::seed_from_u64(0),
        );
        let (session, _) = play_with(session, "quit\nquestion\n");
        assert_eq!(session.used_words(), ["question", "quit"]);
    }

    #[test]
    fn banner_shows_configured_min_length() {
        let dictionary = WordListDictionary::from_words("en", ["silk"]);
        let session = GameSession::with_config(
            load_pool(None),
            dictionary,
            StdRng::seed_from_u64(0),
            GameConfig::new("en", 5),
        );
        let (_, output) = play_with(session, ":quit\n");
        assert!(output.contains("Words need at least 5 letters"));
    }
}

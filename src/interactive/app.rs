//! TUI application state and logic

use crate::dictionary::WordListDictionary;
use crate::game::{GameSession, Submission};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Session type the TUI drives
pub type TuiSession<'a> = GameSession<StdRng, &'a WordListDictionary>;

/// Application state
pub struct App<'a> {
    pub session: TuiSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub selected: Option<usize>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: TuiSession<'a>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Spell words using the letters of the base word.".to_string(),
                style: MessageStyle::Info,
            }],
            selected: None,
            rounds_played: 0,
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        let base = self.session.start_round().capitalized();
        self.rounds_played += 1;
        self.input_buffer.clear();
        self.selected = None;
        self.add_message(&format!("New word: {base}"), MessageStyle::Info);
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let candidate = input.trim();
        if candidate.is_empty() {
            return;
        }

        match self.session.submit(candidate) {
            Ok(Submission::Accepted(word)) => {
                self.selected = None;
                let usage = self
                    .session
                    .letter_usage(0)
                    .map(|u| u.to_string())
                    .unwrap_or_default();
                self.add_message(
                    &format!("{} accepted! {usage}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(Submission::Rejected(reason)) => {
                let message = self.session.rejection_message(reason);
                self.add_message(
                    &format!("{}: {message}", reason.title()),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Move the used-word selection by `delta` rows and describe the selection
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.session.used_words().len();
        if count == 0 {
            self.selected = None;
            return;
        }

        let next = match self.selected {
            None if delta < 0 => count - 1,
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(count - 1),
        };
        self.selected = Some(next);

        if let (Some(word), Some(usage)) = (
            self.session.used_words().get(next),
            self.session.letter_usage(next),
        ) {
            let text = format!("{}: {usage}", crate::core::capitalize(word));
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_game(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Up => app.move_selection(-1),
                KeyCode::Down => app.move_selection(1),
                KeyCode::Char(c) if c.is_alphabetic() => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::load_pool;
    use crossterm::event::KeyEvent;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words("en", ["silk", "worm", "milk"])
    }

    fn app(dictionary: &WordListDictionary) -> App<'_> {
        let session = GameSession::new(load_pool(None), dictionary, StdRng::seed_from_u64(0));
        let mut app = App::new(session);
        app.new_game();
        app
    }

    #[test]
    fn new_game_starts_round() {
        let dictionary = dictionary();
        let app = app(&dictionary);
        assert_eq!(app.rounds_played, 1);
        assert_eq!(
            app.session.base_word().map(crate::core::BaseWord::text),
            Some("silkworm")
        );
    }

    #[test]
    fn submit_input_accepts_and_clears_buffer() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.input_buffer = "Silk".to_string();
        app.submit_input();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.used_words(), ["silk"]);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.contains("You used 4 of 8 letters."));
    }

    #[test]
    fn submit_input_reports_rejection() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.input_buffer = "silks".to_string();
        app.submit_input();

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Word Not Possible"));
        assert!(app.session.used_words().is_empty());
    }

    #[test]
    fn blank_input_ignored() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        let before = app.messages.len();
        app.input_buffer = "   ".to_string();
        app.submit_input();
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn selection_moves_within_bounds() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.move_selection(1);
        assert_eq!(app.selected, None);

        for word in ["silk", "worm"] {
            app.input_buffer = word.to_string();
            app.submit_input();
        }

        app.move_selection(1);
        assert_eq!(app.selected, Some(0));
        app.move_selection(1);
        app.move_selection(1);
        assert_eq!(app.selected, Some(1));
        app.move_selection(-5);
        assert_eq!(app.selected, Some(0));
        assert!(app.messages.last().unwrap().text.starts_with("Worm"));
    }

    #[test]
    fn new_game_clears_selection() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.input_buffer = "silk".to_string();
        app.submit_input();
        app.move_selection(1);
        app.new_game();
        assert_eq!(app.selected, None);
        assert!(app.session.used_words().is_empty());
    }

    #[test]
    fn messages_capped_at_five() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn run_app_plays_until_escape() {
        let dictionary = dictionary();
        let session = GameSession::new(load_pool(None), &dictionary, StdRng::seed_from_u64(0));
        let mut events = vec![
            press(KeyCode::Char('s')),
            press(KeyCode::Char('i')),
            press(KeyCode::Char('l')),
            press(KeyCode::Char('k')),
            press(KeyCode::Enter),
            press(KeyCode::Esc),
        ]
        .into_iter();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let result = run_app(&mut terminal, App::new(session), || {
            events
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        });
        assert!(result.is_ok());
    }

    #[test]
    fn run_app_propagates_event_errors() {
        let dictionary = dictionary();
        let session = GameSession::new(load_pool(None), &dictionary, StdRng::seed_from_u64(0));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let result = run_app(&mut terminal, App::new(session), || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        });
        assert!(result.unwrap_err().to_string().contains("terminal gone"));
    }
}

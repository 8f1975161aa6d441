//! TUI rendering with ratatui
//!
//! Layout for the Word Scramble interface.

use super::app::{App, MessageStyle};
use crate::output::formatters::{letter_usage_bar, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Used words
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app
        .session
        .base_word()
        .map_or_else(|| "No word yet".to_string(), |b| spaced_letters(b.text()));

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.used_words();

    let items: Vec<ListItem> = if used.is_empty() {
        vec![ListItem::new("No words yet - start typing!").style(Style::default().fg(Color::DarkGray))]
    } else {
        used.iter()
            .enumerate()
            .map(|(i, word)| {
                let bar = app
                    .session
                    .letter_usage(i)
                    .map(|usage| {
                        format!(
                            "{} {}/{}",
                            letter_usage_bar(usage, 12),
                            usage.used,
                            usage.total
                        )
                    })
                    .unwrap_or_default();

                let style = if app.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<12}", word.to_uppercase()), style),
                    Span::styled(bar, Style::default().fg(Color::Green)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({}) ", used.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter Answer | Enter to submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.rounds_played)).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let words = Paragraph::new(format!("Words: {}", app.session.used_words().len()))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Word | ↑/↓: Letters Used")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::game::{GameSession, load_pool};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_base_word_and_used_words() {
        let dictionary = WordListDictionary::from_words("en", ["silk"]);
        let session = GameSession::new(load_pool(None), &dictionary, StdRng::seed_from_u64(0));
        let mut app = App::new(session);
        app.new_game();
        app.input_buffer = "silk".to_string();
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("SILK"));
        assert!(text.contains("4/8"));
    }
}

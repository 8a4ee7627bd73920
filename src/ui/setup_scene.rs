//! Setup screen: choose how many départements to guess.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::DEFAULT_GUESS_COUNT;

/// Guess-count input state. The buffer is free-typed digits; range
/// enforcement happens in the state machine when the player confirms,
/// and its rejection message is surfaced back here.
pub struct SetupScreen {
    pub input: String,
    pub error: Option<String>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            input: DEFAULT_GUESS_COUNT.to_string(),
            error: None,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        if c.is_ascii_digit() && self.input.len() < 4 {
            self.input.push(c);
            self.error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        self.input.pop();
        self.error = None;
    }

    /// Arrow-key adjustment; keeps the buffer numeric and in range.
    pub fn adjust(&mut self, delta: i64, max: usize) {
        let current = self.parsed().unwrap_or(DEFAULT_GUESS_COUNT) as i64;
        let next = (current + delta).clamp(1, max as i64);
        self.input = next.to_string();
        self.error = None;
    }

    /// The typed guess count, if the buffer holds a number.
    pub fn parsed(&self) -> Option<usize> {
        self.input.parse().ok()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, max: usize) {
        let block = Block::default()
            .title(" Quiz des départements ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from("How many départements do you want to guess?"),
            Line::from(""),
            Line::from(vec![
                Span::raw("  Count: "),
                Span::styled(
                    if self.input.is_empty() { "_" } else { self.input.as_str() },
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  (1-{})", max), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(""),
        ];

        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "  Type digits or use Up/Down (PgUp/PgDn: +/-10) - Enter to start - Esc to quit",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
        frame.render_widget(paragraph, inner);
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

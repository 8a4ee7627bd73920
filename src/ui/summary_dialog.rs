//! End-of-session summary dialog, drawn as a centered overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::quiz::summary::SessionSummary;

/// Draws the summary dialog over the game screen.
///
/// `export_message` reports the outcome of the last export attempt, if
/// any (path written, or the error).
pub fn draw_summary(frame: &mut Frame, summary: &SessionSummary, export_message: Option<&str>) {
    let size = frame.size();

    let dialog_width = 64.min(size.width.saturating_sub(4));
    let dialog_height = (summary.rows.len() as u16 + 12).min(size.height.saturating_sub(4));

    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Line::from(Span::styled(
            " Fin de partie ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let (minutes, seconds) = summary.total_time_min_sec();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("You found "),
            Span::styled(
                summary.founded.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" out of "),
            Span::styled(
                summary.picked.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" départements."),
        ]),
        Line::from(format!(
            "Total time: {} minutes and {} seconds.",
            minutes, seconds
        )),
        Line::from(""),
    ];

    // One row per picked region; the dialog is sized to the session, and
    // terminal-height overflow just clips the oldest rows.
    for row in &summary.rows {
        let (mark, color) = if row.founded {
            ("v", Color::Green)
        } else {
            ("x", Color::Red)
        };
        let time = row
            .answer_time
            .map(|ms| format!("{:.1}s", ms as f64 / 1000.0))
            .unwrap_or_else(|| "-".to_string());
        lines.push(Line::from(Span::styled(
            format!("  {} {:>3}  {:<28} {:>8}", mark, row.code, row.name, time),
            Style::default().fg(color),
        )));
    }

    lines.push(Line::from(""));
    if let Some(message) = export_message {
        lines.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(Span::styled(
        "  s: save data - Enter: new game",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

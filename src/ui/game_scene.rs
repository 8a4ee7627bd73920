//! Game screen: question prompt, answer input, per-answer feedback,
//! running counters, and the answered-so-far side panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::quiz::scoring::{count_answered, count_founded, count_picked};
use crate::quiz::types::QuizSession;

/// Draws the whole game screen for an in-flight session.
pub fn draw_game(frame: &mut Frame, area: Rect, session: &QuizSession, input: &str) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Min(40),
            Constraint::Length(30),
        ])
        .split(area);

    draw_counters(frame, columns[0], session);
    draw_question_card(frame, columns[1], session, input);
    draw_history(frame, columns[2], session);
}

fn draw_counters(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let block = Block::default().title(" Score ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Question: "),
            Span::styled(
                format!(
                    "{}/{}",
                    count_picked(&session.regions),
                    session.target_count
                ),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Found: "),
            Span::styled(
                format!(
                    "{}/{}",
                    count_founded(&session.regions),
                    count_answered(&session.regions)
                ),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_question_card(frame: &mut Frame, area: Rect, session: &QuizSession, input: &str) {
    let block = Block::default()
        .title(" Quiz des départements ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];

    // Feedback for the previous question
    if let Some(previous) = session.previous_region() {
        if previous.founded {
            lines.push(Line::from(Span::styled(
                format!("Correct! It was {}.", previous.name),
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Wrong! The answer was ", Style::default().fg(Color::Red)),
                Span::styled(
                    previous.name.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(answer) = &previous.answer {
                lines.push(Line::from(Span::styled(
                    format!("Your answer: {}", answer),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if let Some(current) = session.current_region() {
        lines.push(Line::from(vec![
            Span::raw("Which département has the code "),
            Span::styled(
                current.code.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?"),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(input, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter to answer - Esc to abandon the session",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Answered questions so far, oldest first, win/loss colored.
fn draw_history(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let block = Block::default().title(" Answered ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut answered: Vec<_> = session.regions.iter().filter(|r| r.is_answered()).collect();
    answered.sort_by_key(|r| r.start_question_time);

    // Keep the most recent entries visible in a short panel
    let visible = inner.height as usize;
    let skip = answered.len().saturating_sub(visible);

    let lines: Vec<Line> = answered
        .iter()
        .skip(skip)
        .map(|r| {
            let color = if r.founded { Color::Green } else { Color::Red };
            Line::from(Span::styled(
                format!("{:>3}  {}", r.code, r.name),
                Style::default().fg(color),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

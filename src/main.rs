use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use depquiz::build_info;
use depquiz::constants::POLL_INTERVAL_MS;
use depquiz::export::ExportManager;
use depquiz::quiz::logic::{start, submit_answer};
use depquiz::quiz::summary::{export_payload, SessionSummary};
use depquiz::quiz::types::{QuizSession, SessionPhase, SubmitOutcome, SummaryOrder};
use depquiz::ui::game_scene::draw_game;
use depquiz::ui::setup_scene::SetupScreen;
use depquiz::ui::summary_dialog::draw_summary;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "depquiz {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("depquiz - Terminal quiz game about French départements\n");
                println!("Usage: depquiz [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'depquiz --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = QuizSession::new();
    let mut setup = SetupScreen::new();
    let mut answer_input = String::new();
    let mut summary: Option<SessionSummary> = None;
    let mut export_message: Option<String> = None;
    let mut rng = rand::thread_rng();

    // Main loop
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match session.phase {
                SessionPhase::AwaitingGuessCount => {
                    setup.draw(frame, area, session.catalog_size());
                }
                SessionPhase::InQuestion => {
                    draw_game(frame, area, &session, &answer_input);
                }
                SessionPhase::SessionEnded => {
                    draw_game(frame, area, &session, "");
                    if let Some(summary) = &summary {
                        draw_summary(frame, summary, export_message.as_deref());
                    }
                }
            }
        })?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        match session.phase {
            SessionPhase::AwaitingGuessCount => match key_event.code {
                KeyCode::Char(c) => setup.handle_char_input(c),
                KeyCode::Backspace => setup.handle_backspace(),
                KeyCode::Up => setup.adjust(1, session.catalog_size()),
                KeyCode::Down => setup.adjust(-1, session.catalog_size()),
                KeyCode::PageUp => setup.adjust(10, session.catalog_size()),
                KeyCode::PageDown => setup.adjust(-10, session.catalog_size()),
                KeyCode::Enter => match setup.parsed() {
                    None => {
                        setup.error = Some("Please enter a number.".to_string());
                    }
                    Some(count) => {
                        match start(&mut session, count, &mut rng, Utc::now().timestamp_millis()) {
                            Ok(()) => {
                                summary = None;
                                export_message = None;
                                answer_input.clear();
                            }
                            Err(e) => setup.error = Some(e.to_string()),
                        }
                    }
                },
                KeyCode::Esc => break,
                _ => {}
            },

            SessionPhase::InQuestion => match key_event.code {
                KeyCode::Char(c) => answer_input.push(c),
                KeyCode::Backspace => {
                    answer_input.pop();
                }
                KeyCode::Enter => {
                    let outcome = submit_answer(
                        &mut session,
                        &answer_input,
                        &mut rng,
                        Utc::now().timestamp_millis(),
                    );
                    // Blank submissions are ignored; the prompt stays up
                    if outcome != SubmitOutcome::Ignored {
                        answer_input.clear();
                    }
                    if let SubmitOutcome::Ended { .. } = outcome {
                        summary = Some(SessionSummary::build(
                            &session.regions,
                            SummaryOrder::ChronologicalAsc,
                        ));
                    }
                }
                KeyCode::Esc => {
                    // Abandon the session and return to setup
                    session = QuizSession::new();
                    setup = SetupScreen::new();
                    answer_input.clear();
                }
                _ => {}
            },

            SessionPhase::SessionEnded => match key_event.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    export_message = Some(match export_session(&session) {
                        Ok(path) => format!("Saved to {}", path.display()),
                        Err(e) => format!("Export failed: {}", e),
                    });
                }
                KeyCode::Enter | KeyCode::Esc => {
                    // New game: discard the finished session
                    session = QuizSession::new();
                    setup = SetupScreen::new();
                    summary = None;
                    export_message = None;
                }
                _ => {}
            },
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}

/// Writes the picked regions of the finished session to a timestamped
/// JSON file in the platform data directory.
fn export_session(session: &QuizSession) -> io::Result<PathBuf> {
    let manager = ExportManager::new()?;
    manager.export(
        &export_payload(&session.regions),
        Utc::now().timestamp_millis(),
    )
}

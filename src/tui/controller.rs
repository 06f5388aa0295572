//! The input/tick loop driving the game.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};

use crate::game::{Game, InputEvent, Screen};
use crate::tui::logger::LogBuffer;
use crate::tui::ui;

/// Runs the game until quit: draw, poll for input, advance one tick.
///
/// Applied events take effect immediately; the tick cadence drives the
/// banner animation and shoe replenishment.
///
/// # Errors
///
/// Returns an error if the terminal backend fails.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    tick_rate: Duration,
    messages: &LogBuffer,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, game, messages))?;

        if game.should_quit() {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(game, key.code) {
                    game.update();
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            game.update();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Maps a key press to an input event for the current screen.
///
/// Returns whether an event was applied.
fn handle_key(game: &mut Game, code: KeyCode) -> bool {
    let event = match game.screen {
        Screen::Title => match code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
            _ => None,
        },
        Screen::Table => match code {
            KeyCode::Char('h') | KeyCode::Char('H') => Some(InputEvent::Hit),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Stand),
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::PlayAgain),
            KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('T') => {
                Some(InputEvent::ReturnToTitle)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
            _ => None,
        },
    };

    let Some(event) = event else {
        return false;
    };

    match game.apply(event) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("ignored {event:?}: {err}");
            false
        }
    }
}

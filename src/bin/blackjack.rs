//! Terminal blackjack entry point.

use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use ratatui::prelude::*;

use blackjack_tui::Game;
use blackjack_tui::tui::controller;
use blackjack_tui::tui::logger::TuiLogger;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!("blackjack requires a real terminal (TTY). Run it in a terminal and press q to quit.");
        return Ok(());
    }

    let messages = TuiLogger::install(LevelFilter::Info);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);

    let res = controller::run(&mut terminal, &mut game, tick_rate, &messages);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

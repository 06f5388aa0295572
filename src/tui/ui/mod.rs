//! Screen drawing, dispatched by the current scene.

mod layout;
mod table;
mod title;

use ratatui::prelude::Frame;

use crate::game::{Game, Screen};
use crate::tui::logger::LogBuffer;

/// Draws the current screen.
pub fn draw(f: &mut Frame, game: &Game, messages: &LogBuffer) {
    match game.screen {
        Screen::Title => title::draw_title(f),
        Screen::Table => table::draw_table(f, &game.view(), messages),
    }
}

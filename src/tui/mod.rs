//! Terminal presentation layer: event/tick loop and drawing.

pub mod controller;
pub mod logger;
pub mod ui;

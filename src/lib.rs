//! A single-player casino blackjack game for the terminal.
//!
//! The crate provides a [`Game`] session that manages the full round flow —
//! shoe management, hand valuation, the dealer's drawing policy, and win/loss
//! resolution — driven by discrete input events and a synchronous tick, plus
//! a ratatui front end in [`tui`].
//!
//! # Example
//!
//! ```
//! use blackjack_tui::{Game, InputEvent};
//!
//! let mut game = Game::new(42);
//! game.apply(InputEvent::Start).unwrap();
//! game.update();
//! assert_eq!(game.player_hand.len(), 2);
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod shoe;
pub mod tui;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::EventError;
pub use game::{Game, InputEvent, RoundStatus, Screen};
pub use hand::{DealerHand, Hand, HandValue};
pub use shoe::{REDEAL_MIN, Shoe};
pub use view::{CardView, TableView};

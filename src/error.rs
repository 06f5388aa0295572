//! Error types for input events.

use thiserror::Error;

/// Errors returned when an input event is rejected by the game.
///
/// Shoe exhaustion is not an error; it is modeled as the empty-shoe round
/// status and resolved by rebuilding the shoe on the following tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// This event is only accepted on the title screen.
    #[error("only available on the title screen")]
    NotOnTitle,
    /// This event is only accepted at the table.
    #[error("only available at the table")]
    NotAtTable,
    /// The round has ended; hit and stand are frozen until a new deal.
    #[error("the round is over")]
    RoundOver,
    /// The round is still being played; play-again and return-to-title are
    /// only offered once the round has ended.
    #[error("the round is still in progress")]
    RoundInProgress,
}

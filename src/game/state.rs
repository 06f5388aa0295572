//! Game state and input event types.

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen.
    Title,
    /// The blackjack table.
    Table,
}

/// The status of the current round.
///
/// Every value except `Playing` is terminal: player input is frozen until a
/// new round is dealt via play-again or a fresh start from the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The round is live and waiting for player actions.
    Playing,
    /// The player was dealt a natural two-card 21.
    Blackjack,
    /// The player's hard total exceeded 21.
    Busted,
    /// The player beat the dealer.
    Win,
    /// The dealer beat the player.
    Loss,
    /// Both sides hold the same best total.
    Draw,
    /// A draw was attempted and the shoe could not supply a card, or too few
    /// cards remained to redeal. The shoe is rebuilt on the next tick.
    EmptyShoe,
}

impl RoundStatus {
    /// Returns whether this status ends the round.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A player action queued by an input event and consumed on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Draw one card into the player's hand.
    Hit,
    /// End the player's turn and run the dealer out.
    Stand,
    /// Clear both hands and deal a new round from the current shoe.
    PlayAgain,
}

/// A discrete one-shot input event from the presentation layer.
///
/// The presentation layer emits each event exactly once per press; the game
/// consumes it on the tick it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the title screen and begin a round.
    Start,
    /// Terminate the game.
    Quit,
    /// Queue a hit.
    Hit,
    /// Queue a stand.
    Stand,
    /// Queue a redeal after a finished round.
    PlayAgain,
    /// Return to the title screen, resetting the win counter.
    ReturnToTitle,
}

//! Read-only snapshot of the table for the presentation layer.

use crate::card::Card;
use crate::game::{Game, RoundStatus};

/// A card as the renderer is allowed to see it.
///
/// `FaceDown` carries no rank or suit, so a hidden hole card cannot leak
/// through the drawing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// A visible card.
    FaceUp(Card),
    /// A hidden card.
    FaceDown,
}

/// Snapshot of everything the table screen draws on one tick.
#[derive(Debug, Clone)]
pub struct TableView {
    /// The dealer's cards; the hole card is face down until revealed.
    pub dealer: Vec<CardView>,
    /// The player's cards, always face up.
    pub player: Vec<CardView>,
    /// Status of the current round.
    pub status: RoundStatus,
    /// Session win counter.
    pub wins: u32,
    /// Remaining rows of the result banner's slide-in.
    pub banner_offset: u16,
    /// Cards remaining in the shoe.
    pub shoe_remaining: usize,
}

impl Game {
    /// Produces the snapshot the table screen renders from.
    #[must_use]
    pub fn view(&self) -> TableView {
        let hole_hidden = !self.dealer_hand.is_hole_revealed();
        let dealer = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if hole_hidden && i == 1 {
                    CardView::FaceDown
                } else {
                    CardView::FaceUp(*card)
                }
            })
            .collect();

        let player = self
            .player_hand
            .cards()
            .iter()
            .map(|card| CardView::FaceUp(*card))
            .collect();

        TableView {
            dealer,
            player,
            status: self.status,
            wins: self.wins,
            banner_offset: self.banner_offset,
            shoe_remaining: self.shoe.len(),
        }
    }
}

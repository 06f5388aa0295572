use std::cmp::Ordering;

use log::debug;

use crate::hand::HandValue;

use super::{Game, RoundStatus};

/// The dealer's drawing policy.
///
/// Draws on a hard total below 17, on a soft 17 or less, and on a hand whose
/// soft total busts while the hard total is still below 17. Stops on any
/// hard or soft 17 and above.
const fn dealer_must_draw(value: &HandValue) -> bool {
    (value.aces == 0 && value.low < 17)
        || (value.aces > 0 && value.high <= 17)
        || (value.aces > 0 && value.low < 17 && value.high > 21)
}

impl Game {
    /// Resolves a stand: reveals the hole card, runs the dealer out, and
    /// compares totals.
    pub(super) fn resolve_stand(&mut self) {
        self.dealer_hand.reveal_hole();

        let mut value = self.dealer_hand.value();
        while dealer_must_draw(&value) {
            let Some(card) = self.shoe.draw() else {
                self.status = RoundStatus::EmptyShoe;
                return;
            };
            self.dealer_hand.add_card(card);
            value = self.dealer_hand.value();
            debug!("dealer draws, hand value {value:?}");
        }

        // A dealer bust is decided before any total comparison, so
        // best_valid below always has a candidate within 21 on both sides:
        // the player can only stand from a live (non-busted) round.
        if value.is_bust() {
            self.status = RoundStatus::Win;
            return;
        }

        let dealer_best = value.best_valid();
        let player_best = self.player_hand.value().best_valid();

        self.status = match dealer_best.cmp(&player_best) {
            Ordering::Greater => RoundStatus::Loss,
            Ordering::Less => RoundStatus::Win,
            Ordering::Equal => RoundStatus::Draw,
        };
    }
}

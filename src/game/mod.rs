//! The game session and its per-tick update.

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::hand::{DealerHand, Hand};
use crate::shoe::{REDEAL_MIN, Shoe};

mod actions;
mod dealer;
pub mod state;

pub use state::{InputEvent, PendingAction, RoundStatus, Screen};

/// Row offset the result banner starts at when a round ends; it slides
/// toward zero one row per tick.
pub const BANNER_SLIDE: u16 = 12;

/// The whole game session: current screen, round state, shoe, hands, and the
/// session win counter.
///
/// A single owned `Game` is threaded through the tick loop; input events are
/// applied via [`Game::apply`] and the queued action is consumed by
/// [`Game::update`] before the next render.
#[derive(Debug)]
pub struct Game {
    /// The screen currently shown.
    pub screen: Screen,
    /// Status of the current round.
    pub status: RoundStatus,
    /// Status at the end of the previous tick, for edge-triggered win
    /// counting.
    previous_status: RoundStatus,
    /// Player action queued for the next tick.
    pending: Option<PendingAction>,
    /// Cards available to be drawn.
    pub shoe: Shoe,
    /// The player's hand.
    pub player_hand: Hand,
    /// The dealer's hand.
    pub dealer_hand: DealerHand,
    /// Rounds won this session (wins and blackjacks).
    pub wins: u32,
    /// Remaining rows of the result banner's slide-in.
    pub banner_offset: u16,
    /// Set by the quit event; polled by the controller.
    should_quit: bool,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session on the title screen with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(&mut rng);

        Self {
            screen: Screen::Title,
            status: RoundStatus::Playing,
            previous_status: RoundStatus::Playing,
            pending: None,
            shoe,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            wins: 0,
            banner_offset: 0,
            should_quit: false,
            rng,
        }
    }

    /// Returns whether the quit event has been received.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Begins a round from scratch: fresh shuffled shoe, then the opening
    /// deal.
    pub fn start_round(&mut self) {
        self.shoe.rebuild(&mut self.rng);
        self.deal_initial();
    }

    /// Deals the opening hands from the current shoe and checks the player
    /// for a blackjack.
    pub fn deal_initial(&mut self) {
        self.status = RoundStatus::Playing;
        self.player_hand.clear();
        self.dealer_hand.clear();

        if self.deal_two_each() && self.player_hand.is_blackjack() {
            self.status = RoundStatus::Blackjack;
        }
    }

    /// Deals a new round from the current shoe after play-again.
    ///
    /// Requires at least [`REDEAL_MIN`] cards; otherwise the status becomes
    /// empty-shoe and the hands are left untouched. Unlike the opening deal
    /// this path does not check for a blackjack, so a dealt natural 21 must
    /// be stood on.
    fn redeal(&mut self) {
        if self.shoe.len() < REDEAL_MIN {
            self.status = RoundStatus::EmptyShoe;
            return;
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.deal_two_each();
    }

    /// Deals player/dealer/player/dealer. Returns `false` and sets the
    /// empty-shoe status if the shoe runs out mid-deal.
    fn deal_two_each(&mut self) -> bool {
        for _ in 0..2 {
            let (Some(player_card), Some(dealer_card)) = (self.shoe.draw(), self.shoe.draw())
            else {
                self.status = RoundStatus::EmptyShoe;
                return false;
            };
            self.player_hand.add_card(player_card);
            self.dealer_hand.add_card(dealer_card);
        }
        true
    }

    /// Advances the session by one tick.
    ///
    /// Consumes the pending action, rebuilds the shoe while the status is
    /// empty-shoe, counts wins on the transition into a winning status, and
    /// advances the banner slide. Rendering after `update` always sees the
    /// fully updated state for the tick.
    pub fn update(&mut self) {
        if let Some(action) = self.pending.take() {
            match action {
                PendingAction::Hit => self.resolve_hit(),
                PendingAction::Stand => self.resolve_stand(),
                PendingAction::PlayAgain => self.redeal(),
            }
        }

        if self.status == RoundStatus::EmptyShoe {
            self.shoe.rebuild(&mut self.rng);
            debug!("shoe rebuilt ({} cards)", self.shoe.len());
        }

        if self.status != self.previous_status {
            if matches!(self.status, RoundStatus::Win | RoundStatus::Blackjack) {
                self.wins += 1;
                info!("round won ({} this session)", self.wins);
            }
            if self.status.is_terminal() {
                self.banner_offset = BANNER_SLIDE;
            }
        } else if self.status.is_terminal() {
            self.banner_offset = self.banner_offset.saturating_sub(1);
        }

        self.previous_status = self.status;
    }
}

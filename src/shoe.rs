//! The shoe: the stack of cards available to be drawn.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Minimum number of cards the shoe must hold before a new round can be
/// dealt. Below this the round status becomes
/// [`RoundStatus::EmptyShoe`](crate::game::RoundStatus::EmptyShoe) and the
/// shoe is rebuilt wholesale on the next tick.
pub const REDEAL_MIN: usize = 8;

/// A single shuffled 52-card deck, drawn from the end.
///
/// The shoe is never partially replenished: it is built complete, drawn down,
/// and replaced complete via [`Shoe::rebuild`].
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a fresh, fully shuffled shoe.
    #[must_use]
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut shoe = Self {
            cards: Self::build(),
        };
        shoe.cards.shuffle(rng);
        shoe
    }

    /// Creates a shoe with a predetermined draw order.
    ///
    /// Cards are drawn from the end of the slice. Intended for tests that
    /// need a scripted deal.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds the 52 cards in deterministic order: all 13 ranks of each suit.
    fn build() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Replaces the contents with a fresh shuffled 52-card deck.
    pub fn rebuild(&mut self, rng: &mut ChaCha8Rng) {
        self.cards = Self::build();
        self.cards.shuffle(rng);
    }

    /// Removes and returns the last card, or `None` if the shoe is empty.
    ///
    /// Shoe exhaustion is the only fallible operation in the core; callers
    /// map `None` to the empty-shoe round status rather than an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, last to be drawn first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

//! Player and dealer hand representations and valuation.

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 1,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// The hard and soft totals of a hand, computed on demand.
///
/// Every ace contributes 1 to `low`. If the hand contains at least one ace,
/// `high` is `low + 10` (a single ace promoted to 11); otherwise `high`
/// equals `low`. A second ace is never promoted, matching the table rules
/// this game implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Total with all aces counted as 1.
    pub low: u8,
    /// Total with one ace counted as 11, when an ace is present.
    pub high: u8,
    /// Number of aces in the hand.
    pub aces: u8,
}

impl HandValue {
    /// Returns whether the hand is busted (even the hard total exceeds 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.low > 21
    }

    /// Returns the largest total that does not exceed 21.
    ///
    /// Callers must rule out a bust (`low > 21`) before comparing totals;
    /// on a busted hand there is no valid total to return.
    #[must_use]
    pub fn best_valid(&self) -> u8 {
        debug_assert!(self.low <= 21, "best_valid called on a busted hand");
        if self.high <= 21 { self.high } else { self.low }
    }
}

fn evaluate_cards(cards: &[Card]) -> HandValue {
    let mut low: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        low = low.saturating_add(card_value(card.rank));
    }

    let high = if aces > 0 { low.saturating_add(10) } else { low };
    HandValue { low, high, aces }
}

/// The player's hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Computes the hard and soft totals of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is a blackjack (natural two-card 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value().high == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card; it stays hidden from the
/// presentation layer until revealed at stand resolution.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Computes the hard and soft totals of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate_cards(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round and hides the hole card again.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

//! Hand accumulation and ace adjustment.

use crate::card::{Card, Rank};

/// A hand of cards belonging to the player or the dealer.
///
/// The running total counts each ace as 11 until the hand would bust, at
/// which point soft aces are downgraded to 1 one at a time. The adjustment
/// runs on a counter rather than by rescanning the cards, so it is O(1) per
/// card added.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    soft_aces: u8,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand and reapplies the ace adjustment.
    pub fn add_card(&mut self, card: Card) {
        self.total += card.value();
        if card.rank == Rank::Ace {
            self.soft_aces += 1;
        }
        self.cards.push(card);
        self.adjust_for_ace();
    }

    /// Downgrades soft aces from 11 to 1 while the hand would otherwise bust.
    ///
    /// Runs automatically after every [`add_card`](Self::add_card), so
    /// calling it again without adding a card is a no-op.
    pub const fn adjust_for_ace(&mut self) {
        while self.total > 21 && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current total, with aces already adjusted.
    ///
    /// This is the best legal valuation not exceeding 21 when one exists.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

//! Deck construction, shuffling, and dealing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered single deck of cards.
///
/// The top of the deck is the end of the sequence, so dealing is an O(1)
/// removal. A deck only ever shrinks; a fresh one is built for each round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in suit-major, rank-minor order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The last card in `cards` is the top of the deck and is dealt first.
    /// Useful for scripted deals.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Randomly permutes the remaining cards.
    ///
    /// Uses a Fisher-Yates shuffle, so every permutation is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

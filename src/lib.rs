//! A single-deck blackjack game played against the dealer.
//!
//! The crate provides a [`Round`] type that manages one hand of blackjack as
//! an explicit state machine, and a [`Session`] that repeats rounds over a
//! terminal-style reader and writer while one [`ChipPurse`] carries the chip
//! balance across rounds.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::{ChipPurse, Deck, GameOptions, Round, RoundState};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let mut purse = ChipPurse::new(100);
//! purse.place_bet(10).expect("bet fits the balance");
//!
//! let mut round = Round::new(deck, GameOptions::default());
//! round.deal().expect("a fresh deck has enough cards");
//! assert_eq!(round.state(), RoundState::PlayerTurn);
//! ```

pub mod card;
pub mod chips;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;
pub mod session;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use chips::ChipPurse;
pub use deck::{DECK_SIZE, Deck};
pub use error::{BetError, DeckError, InputError, RoundError, SessionError};
pub use hand::Hand;
pub use options::GameOptions;
pub use round::{Outcome, Round, RoundState};
pub use session::{Choice, Session, parse_bet, parse_choice};

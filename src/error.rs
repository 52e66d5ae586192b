//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the chip balance.
    #[error("bet exceeds the chip balance")]
    ExceedsBalance,
}

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    Empty,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is not in the right state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out of cards mid-round.
    ///
    /// Unreachable in single-deck play against one player, but defined so
    /// exhaustion aborts the round with a diagnostic instead of panicking.
    #[error("the deck ran out of cards mid-round")]
    EmptyDeck,
}

impl From<DeckError> for RoundError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

/// Errors produced when parsing terminal input.
///
/// All of these are recoverable; the session re-prompts on each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The bet text was not a whole number.
    #[error("that was not a whole number")]
    NotANumber,
    /// The choice was neither the hit token nor the stand token.
    #[error("enter h to hit or s to stand")]
    UnknownChoice,
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A round aborted on an invariant violation.
    #[error("round aborted: {0}")]
    Round(#[from] RoundError),
}

//! Round orchestration: dealing, turns, and settlement.

use crate::card::Card;
use crate::chips::ChipPurse;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::GameOptions;

/// Phase of a round.
///
/// A round moves forward only: `Dealing` to `PlayerTurn` to `DealerTurn` to
/// `Settlement` to `Done`. A player bust skips `DealerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Totals are compared and the bet is settled.
    Settlement,
    /// The round has been settled.
    Done,
}

/// Outcome of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21 and loses the bet.
    PlayerBust,
    /// Dealer went over 21 and the player wins the bet.
    DealerBust,
    /// Dealer finished with the higher total.
    DealerWin,
    /// Player finished with the higher total.
    PlayerWin,
    /// Equal totals; no chips change hands.
    Push,
}

/// One round of blackjack against the dealer.
///
/// A round owns its deck and both hands. Drive it with [`deal`](Self::deal),
/// [`player_hit`](Self::player_hit) / [`player_stand`](Self::player_stand),
/// [`dealer_play`](Self::dealer_play), and [`settle`](Self::settle); each
/// rejects calls made in the wrong phase.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    dealer_stand: u8,
    state: RoundState,
}

impl Round {
    /// Creates an undealt round over the given deck.
    #[must_use]
    pub const fn new(deck: Deck, options: GameOptions) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_stand: options.dealer_stand,
            state: RoundState::Dealing,
        }
    }

    /// Deals the initial two cards to each side.
    ///
    /// The deal order is dealer, dealer, player, player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the deck runs
    /// out of cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.deck.deal_one()?;
            self.dealer.add_card(card);
        }
        for _ in 0..2 {
            let card = self.deck.deal_one()?;
            self.player.add_card(card);
        }

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Player action: hit (draw a card).
    ///
    /// A bust ends the player's turn and moves straight to settlement,
    /// skipping the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn player_hit(&mut self) -> Result<Card, RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let card = self.deck.deal_one()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.state = RoundState::Settlement;
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// Hands the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub const fn player_stand(&mut self) -> Result<(), RoundError> {
        if !matches!(self.state, RoundState::PlayerTurn) {
            return Err(RoundError::InvalidState);
        }
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Dealer draws until reaching the stand threshold.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.total() < self.dealer_stand {
            let card = self.deck.deal_one()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.state = RoundState::Settlement;
        Ok(drawn)
    }

    /// Compares totals, settles the purse, and finishes the round.
    ///
    /// Exactly one outcome applies: a player bust loses regardless of the
    /// dealer's cards, a dealer bust wins for the player, otherwise the
    /// higher total wins and equal totals push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached settlement.
    pub const fn settle(&mut self, purse: &mut ChipPurse) -> Result<Outcome, RoundError> {
        if !matches!(self.state, RoundState::Settlement) {
            return Err(RoundError::InvalidState);
        }

        let outcome = if self.player.is_bust() {
            Outcome::PlayerBust
        } else if self.dealer.is_bust() {
            Outcome::DealerBust
        } else if self.dealer.total() > self.player.total() {
            Outcome::DealerWin
        } else if self.dealer.total() < self.player.total() {
            Outcome::PlayerWin
        } else {
            Outcome::Push
        };

        match outcome {
            Outcome::PlayerBust | Outcome::DealerWin => purse.settle_loss(),
            Outcome::DealerBust | Outcome::PlayerWin => purse.settle_win(),
            Outcome::Push => purse.settle_push(),
        }

        self.state = RoundState::Done;
        Ok(outcome)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the current phase of the round.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

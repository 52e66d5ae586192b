//! Chip balance and bet settlement.

use crate::error::BetError;

/// The player's chips and the stake for the current round.
///
/// The balance is the player's total holdings; a placed bet stays pending
/// (not deducted) until the round settles it. The purse is the one entity
/// that survives across rounds within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipPurse {
    balance: u32,
    bet: u32,
}

impl ChipPurse {
    /// Creates a purse with the given starting balance.
    #[must_use]
    pub const fn new(balance: u32) -> Self {
        Self { balance, bet: 0 }
    }

    /// Stakes `amount` for the coming round.
    ///
    /// # Errors
    ///
    /// Rejects a zero bet or one larger than the balance. The pending bet is
    /// left unchanged on rejection.
    pub const fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::ExceedsBalance);
        }
        self.bet = amount;
        Ok(())
    }

    /// Adds the pending bet to the balance and clears it.
    pub const fn settle_win(&mut self) {
        self.balance += self.bet;
        self.bet = 0;
    }

    /// Removes the pending bet from the balance and clears it.
    pub const fn settle_loss(&mut self) {
        self.balance -= self.bet;
        self.bet = 0;
    }

    /// Clears the pending bet with no transfer either way.
    pub const fn settle_push(&mut self) {
        self.bet = 0;
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// Returns the bet pending for the current round.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }
}

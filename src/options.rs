//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_chips(500)
///     .with_dealer_stand(18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Chips the player starts the session with.
    pub starting_chips: u32,
    /// The dealer stands at this total or above and hits below it.
    pub dealer_stand: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            dealer_stand: 17,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand(16);
    /// assert_eq!(options.dealer_stand, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand(mut self, total: u8) -> Self {
        self.dealer_stand = total;
        self
    }
}

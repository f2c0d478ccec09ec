//! Table configuration options.

/// Largest table a single deck can serve.
///
/// Three burns and five board cards leave 44 cards, two per player.
pub const MAX_PLAYERS: u8 = 22;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use eqrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_players(6)
///     .with_burn_cards(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of players dealt in.
    pub players: u8,
    /// Whether a card is burned before the flop, turn, and river.
    pub burn_cards: bool,
    /// Whether street analysis is split across worker threads.
    ///
    /// Only takes effect when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 3,
            burn_cards: true,
            parallel: false,
        }
    }
}

impl TableOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use eqrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(9);
    /// assert_eq!(options.players, 9);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets whether cards are burned before each street.
    ///
    /// # Example
    ///
    /// ```
    /// use eqrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_burn_cards(false);
    /// assert!(!options.burn_cards);
    /// ```
    #[must_use]
    pub const fn with_burn_cards(mut self, burn: bool) -> Self {
        self.burn_cards = burn;
        self
    }

    /// Sets whether analysis runs on worker threads.
    ///
    /// # Example
    ///
    /// ```
    /// use eqrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_parallel(true);
    /// assert!(options.parallel);
    /// ```
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

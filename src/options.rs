//! Game configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_academy::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_min_bet(25)
///     .with_max_bet(1000);
/// assert_eq!(options.decks, 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe. The shoe treats zero as one.
    pub decks: u8,
    /// Fraction of the shoe dealt before a reshuffle at the next round.
    pub penetration: f64,
    /// Smallest bet that starts a round.
    pub min_bet: usize,
    /// Largest total bet per round.
    pub max_bet: usize,
    /// Bankroll for a fresh session and after a bust-out reset.
    pub starting_bankroll: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether insurance is offered against a dealer Ace.
    pub insurance: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            penetration: 0.75,
            min_bet: 10,
            max_bet: 500,
            starting_bankroll: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            insurance: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks, never fewer than one.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_academy::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// assert_eq!(GameOptions::default().with_decks(0).decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_academy::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_academy::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_academy::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }
}

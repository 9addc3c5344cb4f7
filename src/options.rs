//! Engine configuration options.

use crate::count::CountingScheme;
use crate::strategy::{BetStrategy, DEFAULT_PROBABILITY_CAP};

/// Configuration options for a Dragon 7 engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dragon7::{BetStrategy, EngineOptions};
///
/// let options = EngineOptions::default()
///     .with_decks(6)
///     .with_bankroll(500.0)
///     .with_strategy(BetStrategy::TrueCount);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Starting bankroll for simulated bets.
    pub bankroll: f64,
    /// True count at or above which a Dragon 7 bet is placed.
    pub bet_threshold: f64,
    /// Upper bound on the Dragon 7 probability estimate, in percent.
    pub probability_cap: f64,
    /// Strategy used by [`Engine::bet_recommendation`](crate::Engine::bet_recommendation).
    pub strategy: BetStrategy,
    /// Card weights for the running count.
    pub counting: CountingScheme,
    /// Stake placed automatically when a round is finalized, if any.
    pub auto_bet: Option<f64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            bankroll: 0.0,
            bet_threshold: 4.0,
            probability_cap: DEFAULT_PROBABILITY_CAP,
            strategy: BetStrategy::Probability,
            counting: CountingScheme::Dragon7,
            auto_bet: None,
        }
    }
}

impl EngineOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_bankroll(250.0);
    /// assert_eq!(options.bankroll, 250.0);
    /// ```
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: f64) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the true count that triggers a bet.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_bet_threshold(3.0);
    /// assert_eq!(options.bet_threshold, 3.0);
    /// ```
    #[must_use]
    pub const fn with_bet_threshold(mut self, threshold: f64) -> Self {
        self.bet_threshold = threshold;
        self
    }

    /// Sets the cap on the probability estimate.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_probability_cap(20.0);
    /// assert_eq!(options.probability_cap, 20.0);
    /// ```
    #[must_use]
    pub const fn with_probability_cap(mut self, cap: f64) -> Self {
        self.probability_cap = cap;
        self
    }

    /// Sets the bet-timing strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::{BetStrategy, EngineOptions};
    ///
    /// let options = EngineOptions::default().with_strategy(BetStrategy::TrueCount);
    /// assert_eq!(options.strategy, BetStrategy::TrueCount);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: BetStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the counting scheme.
    #[must_use]
    pub const fn with_counting(mut self, counting: CountingScheme) -> Self {
        self.counting = counting;
        self
    }

    /// Enables automatic betting with the given stake, or disables it with `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_auto_bet(Some(10.0));
    /// assert_eq!(options.auto_bet, Some(10.0));
    /// ```
    #[must_use]
    pub const fn with_auto_bet(mut self, stake: Option<f64>) -> Self {
        self.auto_bet = stake;
        self
    }
}

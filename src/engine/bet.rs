use crate::bankroll::{Bankroll, BetRecord};
use crate::error::BetError;

use super::Engine;

impl Engine {
    /// Returns whether the true count has reached the bet threshold.
    #[must_use]
    pub fn should_bet_dragon7(&self) -> bool {
        self.true_count() >= self.options.bet_threshold
    }

    /// Bets on the round in progress being a Dragon 7.
    ///
    /// The bet is only placed once the true count has reached the bet
    /// threshold; otherwise `Ok(None)` is returned and the bankroll is left
    /// alone. A winning bet pays 39 times the stake, a losing one costs the
    /// stake. The balance may go negative.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidAmount`] if `amount` is not a positive
    /// finite number.
    pub fn place_bet(&mut self, amount: f64) -> Result<Option<BetRecord>, BetError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BetError::InvalidAmount);
        }

        if !self.should_bet_dragon7() {
            return Ok(None);
        }

        let round = self.history.len() + 1;
        let true_count = self.true_count();
        let won = self.round.is_dragon7();
        let record = self.bankroll.settle(round, amount, true_count, won);

        tracing::debug!(
            round,
            amount,
            true_count,
            won,
            balance = record.balance,
            "dragon 7 bet settled"
        );

        Ok(Some(record))
    }

    /// Returns the simulated bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
}

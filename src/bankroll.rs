//! Bankroll tracking for simulated Dragon 7 wagers.

extern crate alloc;

use alloc::vec::Vec;

/// Net multiple paid on a winning Dragon 7 bet (40 to 1 returned with stake).
pub const DRAGON7_PAYOUT: f64 = 39.0;

/// A settled Dragon 7 bet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetRecord {
    /// Round number the bet was settled on.
    pub round: usize,
    /// Amount staked.
    pub amount: f64,
    /// True count when the bet was placed.
    pub true_count: f64,
    /// Whether the round was a Dragon 7.
    pub won: bool,
    /// Net change to the bankroll.
    pub net: f64,
    /// Bankroll after settlement.
    pub balance: f64,
}

/// Simulated bankroll and its bet history.
///
/// Nothing stops the balance going negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bankroll {
    balance: f64,
    bets: Vec<BetRecord>,
}

impl Bankroll {
    /// Creates a bankroll with a starting balance.
    #[must_use]
    pub const fn new(balance: f64) -> Self {
        Self {
            balance,
            bets: Vec::new(),
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns every settled bet in order.
    #[must_use]
    pub fn bets(&self) -> &[BetRecord] {
        &self.bets
    }

    /// Settles a bet and records it.
    pub fn settle(&mut self, round: usize, amount: f64, true_count: f64, won: bool) -> BetRecord {
        let net = if won { amount * DRAGON7_PAYOUT } else { -amount };
        self.balance += net;

        let record = BetRecord {
            round,
            amount,
            true_count,
            won,
            net,
            balance: self.balance,
        };
        self.bets.push(record);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_pays_thirty_nine_to_one() {
        let mut bankroll = Bankroll::new(100.0);
        let record = bankroll.settle(1, 10.0, 4.5, true);
        assert!((record.net - 390.0).abs() < f64::EPSILON);
        assert!((bankroll.balance() - 490.0).abs() < f64::EPSILON);
    }

    #[test]
    fn losses_can_go_negative() {
        let mut bankroll = Bankroll::new(5.0);
        bankroll.settle(1, 10.0, 4.0, false);
        assert!((bankroll.balance() + 5.0).abs() < f64::EPSILON);
        assert_eq!(bankroll.bets().len(), 1);
    }
}

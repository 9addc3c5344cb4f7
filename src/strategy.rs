//! Bet-timing strategies for the Dragon 7 side bet.
//!
//! These are heuristics over the count, not probabilities in any rigorous
//! sense. The constants are fixed and intentionally left as they are.

use core::fmt;

/// Baseline Dragon 7 estimate, in percent, before count adjustments.
pub const BASE_PROBABILITY: f64 = 2.3;

/// Percent added per point of true count.
pub const TRUE_COUNT_FACTOR: f64 = 1.5;

/// Default upper bound on the estimate.
pub const DEFAULT_PROBABILITY_CAP: f64 = 25.0;

/// Heuristic Dragon 7 estimate in percent.
///
/// `key_cards` is the number of 8s and 9s left in the shoe.
#[must_use]
pub fn dragon7_probability(true_count: f64, key_cards: u32, remaining_decks: f64, cap: f64) -> f64 {
    let key_card_weight = f64::from(key_cards) / (remaining_decks * 52.0) * 10.0;
    (BASE_PROBABILITY + true_count * TRUE_COUNT_FACTOR + key_card_weight).min(cap)
}

/// How the engine turns the count into a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BetStrategy {
    /// Bands over [`dragon7_probability`].
    #[default]
    Probability,
    /// Thresholds on the true count alone.
    TrueCount,
    /// [`BetStrategy::Probability`], but a Dragon 7 within the last
    /// `lookback` rounds turns "not yet" into "possible soon".
    RecentDragon7 {
        /// Number of most recent rounds to inspect.
        lookback: usize,
    },
}

/// Advice produced by a [`BetStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetRecommendation {
    /// Estimate at or above 15%.
    VeryLikely,
    /// Estimate at or above 10%.
    Strong,
    /// Estimate at or above 6%.
    Possible,
    /// A Dragon 7 showed up recently.
    PossibleSoon,
    /// True count at or above 4.
    BetNow,
    /// True count at or above 3.
    Almost,
    /// Nothing favours the bet.
    NotYet,
}

impl BetRecommendation {
    /// Bands a probability estimate.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 15.0 {
            Self::VeryLikely
        } else if probability >= 10.0 {
            Self::Strong
        } else if probability >= 6.0 {
            Self::Possible
        } else {
            Self::NotYet
        }
    }

    /// Bands a true count.
    #[must_use]
    pub fn from_true_count(true_count: f64) -> Self {
        if true_count >= 4.0 {
            Self::BetNow
        } else if true_count >= 3.0 {
            Self::Almost
        } else {
            Self::NotYet
        }
    }

    /// Returns whether this advice says to place the bet now.
    #[must_use]
    pub const fn is_bet(self) -> bool {
        matches!(self, Self::VeryLikely | Self::Strong | Self::BetNow)
    }
}

impl fmt::Display for BetRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryLikely => "Dragon 7 very likely, bet now",
            Self::Strong => "Strong chance of Dragon 7",
            Self::Possible => "Dragon 7 possible",
            Self::PossibleSoon => "Dragon 7 seen recently, possible soon",
            Self::BetNow => "Time to bet on Dragon 7",
            Self::Almost => "Almost time to bet on Dragon 7",
            Self::NotYet => "No Dragon 7 bet yet",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_is_capped() {
        let p = dragon7_probability(100.0, 64, 8.0, DEFAULT_PROBABILITY_CAP);
        assert!((p - DEFAULT_PROBABILITY_CAP).abs() < f64::EPSILON);
    }

    #[test]
    fn fresh_shoe_estimate() {
        // 64 eights and nines in 8 decks: 64 / 416 * 10
        let p = dragon7_probability(0.0, 64, 8.0, DEFAULT_PROBABILITY_CAP);
        assert!((p - (2.3 + 64.0 / 416.0 * 10.0)).abs() < 1e-9);
        assert_eq!(BetRecommendation::from_probability(p), BetRecommendation::NotYet);
    }

    #[test]
    fn bands() {
        assert_eq!(BetRecommendation::from_probability(15.0), BetRecommendation::VeryLikely);
        assert_eq!(BetRecommendation::from_probability(10.0), BetRecommendation::Strong);
        assert_eq!(BetRecommendation::from_probability(6.0), BetRecommendation::Possible);
        assert_eq!(BetRecommendation::from_probability(5.99), BetRecommendation::NotYet);
        assert_eq!(BetRecommendation::from_true_count(4.0), BetRecommendation::BetNow);
        assert_eq!(BetRecommendation::from_true_count(3.0), BetRecommendation::Almost);
        assert_eq!(BetRecommendation::from_true_count(2.9), BetRecommendation::NotYet);
    }
}

use crate::card::Card;
use crate::strategy::{self, BetRecommendation, BetStrategy};

use super::Engine;

impl Engine {
    /// Heuristic Dragon 7 estimate, in percent, for the current shoe.
    ///
    /// Combines the true count with the share of 8s and 9s left, capped at
    /// [`EngineOptions::probability_cap`](crate::EngineOptions::probability_cap).
    #[must_use]
    pub fn dragon7_probability(&self) -> f64 {
        let key_cards =
            self.shoe.remaining_of(Card::EIGHT) + self.shoe.remaining_of(Card::NINE);

        strategy::dragon7_probability(
            self.true_count(),
            key_cards,
            self.remaining_decks(),
            self.options.probability_cap,
        )
    }

    /// Bet-timing advice using the configured strategy.
    #[must_use]
    pub fn bet_recommendation(&self) -> BetRecommendation {
        self.recommendation_for(self.options.strategy)
    }

    /// Bet-timing advice using an explicit strategy.
    #[must_use]
    pub fn recommendation_for(&self, strategy: BetStrategy) -> BetRecommendation {
        match strategy {
            BetStrategy::Probability => {
                BetRecommendation::from_probability(self.dragon7_probability())
            }
            BetStrategy::TrueCount => BetRecommendation::from_true_count(self.true_count()),
            BetStrategy::RecentDragon7 { lookback } => {
                let banded = BetRecommendation::from_probability(self.dragon7_probability());
                let recent = self
                    .history
                    .iter()
                    .rev()
                    .take(lookback)
                    .any(|round| round.is_dragon7);
                if banded == BetRecommendation::NotYet && recent {
                    BetRecommendation::PossibleSoon
                } else {
                    banded
                }
            }
        }
    }
}

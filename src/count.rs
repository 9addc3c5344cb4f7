//! Card counting for the Dragon 7 side bet.

use crate::card::Card;

/// Weighting applied to each dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CountingScheme {
    /// 4 through 7 count -1, 8 and 9 count +2, everything else is neutral.
    #[default]
    Dragon7,
}

impl CountingScheme {
    /// Returns the count weight of a card under this scheme.
    #[must_use]
    pub const fn weight(self, card: Card) -> i32 {
        match self {
            Self::Dragon7 => match card.rank() {
                4..=7 => -1,
                8 | 9 => 2,
                _ => 0,
            },
        }
    }
}

/// Running count accumulated over every card dealt from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunningCount {
    scheme: CountingScheme,
    value: i32,
}

impl RunningCount {
    /// Creates a zero count using the given scheme.
    #[must_use]
    pub const fn new(scheme: CountingScheme) -> Self {
        Self { scheme, value: 0 }
    }

    /// Adds the weight of `card` and returns it.
    pub const fn update(&mut self, card: Card) -> i32 {
        let weight = self.scheme.weight(card);
        self.value += weight;
        weight
    }

    /// Returns the running count.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the scheme in use.
    #[must_use]
    pub const fn scheme(&self) -> CountingScheme {
        self.scheme
    }

    /// Normalizes the running count by the decks left in the shoe.
    #[must_use]
    pub fn true_count(&self, remaining_decks: f64) -> f64 {
        f64::from(self.value) / remaining_decks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_ranks_carry_no_weight() {
        let scheme = CountingScheme::Dragon7;
        for rank in [1, 2, 3, 10] {
            assert_eq!(scheme.weight(Card::new(rank).unwrap()), 0);
        }
        for rank in 4..=7 {
            assert_eq!(scheme.weight(Card::new(rank).unwrap()), -1);
        }
        assert_eq!(scheme.weight(Card::new(8).unwrap()), 2);
        assert_eq!(scheme.weight(Card::new(9).unwrap()), 2);
    }
}

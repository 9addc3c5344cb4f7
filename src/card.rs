//! Card types and deck constants.

use core::fmt;

use crate::error::InvalidCardError;

/// Number of cards per deck.
pub const DECK_SIZE: u32 = 52;

/// Number of distinct ranks once tens and faces are merged.
pub const RANKS: usize = 10;

/// Cards of each rank per deck; the shoe holds four of every rank 1 through 10.
pub(crate) const CARDS_PER_RANK: u32 = 4;

/// A baccarat card.
///
/// Suits do not affect scoring, so a card is just its rank: 1 is an Ace and
/// 10 stands for any ten, Jack, Queen or King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// The Ace, rank 1.
    pub const ACE: Self = Self(1);

    /// The eight, rank 8.
    pub const EIGHT: Self = Self(8);

    /// The nine, rank 9.
    pub const NINE: Self = Self(9);

    /// A ten or face card, rank 10.
    pub const TEN: Self = Self(10);

    /// Creates a card from a rank in `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError`] if the rank is outside `1..=10`.
    pub const fn new(rank: u8) -> Result<Self, InvalidCardError> {
        if matches!(rank, 1..=10) {
            Ok(Self(rank))
        } else {
            Err(InvalidCardError { rank })
        }
    }

    /// Returns the rank (1 = Ace, 10 = ten or face).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Returns the baccarat point value (ten and faces count zero).
    #[must_use]
    pub const fn point(self) -> u8 {
        self.0 % 10
    }

    /// Index of this rank into per-rank tables.
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns every card rank in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=10).map(Self)
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidCardError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::new(rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            rank => write!(f, "{rank}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_ranks() {
        assert_eq!(Card::new(0), Err(InvalidCardError { rank: 0 }));
        assert_eq!(Card::new(11), Err(InvalidCardError { rank: 11 }));
        assert!(Card::new(1).is_ok());
        assert!(Card::new(10).is_ok());
    }

    #[test]
    fn tens_score_zero() {
        assert_eq!(Card::TEN.point(), 0);
        assert_eq!(Card::ACE.point(), 1);
        assert_eq!(Card::all().count(), RANKS);
    }
}

//! Player and Banker hand representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseRoleError;

/// The side of the table a card is dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The Player hand.
    Player,
    /// The Banker hand.
    Banker,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parses `"Player"` or `"Banker"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("player") {
            Ok(Self::Player)
        } else if s.eq_ignore_ascii_case("banker") {
            Ok(Self::Banker)
        } else {
            Err(ParseRoleError)
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Banker => f.write_str("Banker"),
        }
    }
}

/// A baccarat hand.
///
/// A dealt hand holds two cards plus at most one third card, but cards
/// entered by hand at a live table are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the baccarat total: the sum of ranks modulo 10.
    #[must_use]
    pub fn total(&self) -> u8 {
        let sum: u32 = self.cards.iter().map(|c| u32::from(c.rank())).sum();
        (sum % 10) as u8
    }

    /// Returns the total of the first two cards only.
    ///
    /// Draw decisions are always taken on the two-card total.
    #[must_use]
    pub fn initial_total(&self) -> u8 {
        self.cards.iter().take(2).map(|c| c.point()).sum::<u8>() % 10
    }

    /// Returns whether the first two cards make a natural 8 or 9.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() >= 2 && self.initial_total() >= 8
    }

    /// Returns the third card, if one has been dealt.
    #[must_use]
    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

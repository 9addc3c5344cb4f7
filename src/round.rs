//! The round in progress and finalized round records.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::bankroll::BetRecord;
use crate::card::Card;
use crate::hand::{Hand, Role};

/// Outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// Player has the higher total.
    Player,
    /// Banker has the higher total.
    Banker,
    /// Both totals are equal.
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Banker => f.write_str("Banker"),
            Self::Tie => f.write_str("Tie"),
        }
    }
}

/// The Player and Banker hands being built this round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    /// The Player hand.
    pub player: Hand,
    /// The Banker hand.
    pub banker: Hand,
}

impl Round {
    /// Creates a round with two empty hands.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: Hand::new(),
            banker: Hand::new(),
        }
    }

    /// Returns the hand for `role`.
    #[must_use]
    pub const fn hand(&self, role: Role) -> &Hand {
        match role {
            Role::Player => &self.player,
            Role::Banker => &self.banker,
        }
    }

    /// Returns the hand for `role` mutably.
    pub const fn hand_mut(&mut self, role: Role) -> &mut Hand {
        match role {
            Role::Player => &mut self.player,
            Role::Banker => &mut self.banker,
        }
    }

    /// Returns `(player_total, banker_total)`.
    #[must_use]
    pub fn totals(&self) -> (u8, u8) {
        (self.player.total(), self.banker.total())
    }

    /// Compares the two totals.
    #[must_use]
    pub fn winner(&self) -> Winner {
        let (player, banker) = self.totals();
        match player.cmp(&banker) {
            core::cmp::Ordering::Greater => Winner::Player,
            core::cmp::Ordering::Less => Winner::Banker,
            core::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// Returns whether Banker holds exactly three cards totalling 7.
    ///
    /// This holds whoever wins the round.
    #[must_use]
    pub fn is_dragon7(&self) -> bool {
        self.banker.len() == 3 && self.banker.total() == 7
    }

    /// Returns whether no card has been entered this round.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.player.is_empty() && self.banker.is_empty()
    }
}

/// Immutable record of a finalized round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    /// 1-based round number within the shoe.
    pub number: usize,
    /// Player cards in deal order.
    pub player_cards: Vec<Card>,
    /// Banker cards in deal order.
    pub banker_cards: Vec<Card>,
    /// Final Player total.
    pub player_total: u8,
    /// Final Banker total.
    pub banker_total: u8,
    /// Round outcome.
    pub winner: Winner,
    /// Whether Banker made a three-card 7.
    pub is_dragon7: bool,
    /// Running count after the round.
    pub running_count: i32,
    /// Decks remaining after the round.
    pub remaining_decks: f64,
    /// True count after the round.
    pub true_count: f64,
    /// Dragon 7 bet settled on this round, if any.
    pub bet: Option<BetRecord>,
}

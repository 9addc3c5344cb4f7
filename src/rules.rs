//! The fixed baccarat third-card rules.
//!
//! All decisions are taken on the two-card totals. Player draws on 0 through
//! 5 and stands on 6 or 7. Banker's decision depends on its own total and on
//! the point value of Player's third card:
//!
//! | Banker total | Banker draws when Player's third card is |
//! |---|---|
//! | 0, 1, 2 | anything |
//! | 3 | anything but 8 |
//! | 4 | 2 through 7 |
//! | 5 | 4 through 7 |
//! | 6 | 6 or 7 |
//! | 7 | never |
//!
//! When Player stands, Banker draws on 0 through 5. Either side holding a
//! natural 8 or 9 ends the round with no third cards.

use core::fmt;

use crate::card::Card;
use crate::hand::Hand;

/// Returns whether Player draws on this two-card total.
#[must_use]
pub const fn player_draws(total: u8) -> bool {
    total <= 5
}

/// Returns whether Banker draws on this two-card total.
///
/// `player_third` is `None` when Player stood.
#[must_use]
pub const fn banker_draws(total: u8, player_third: Option<Card>) -> bool {
    let Some(card) = player_third else {
        return total <= 5;
    };
    match total {
        0..=2 => true,
        3 => card.point() != 8,
        4 => matches!(card.point(), 2..=7),
        5 => matches!(card.point(), 4..=7),
        6 => matches!(card.point(), 6 | 7),
        _ => false,
    }
}

/// What Player has done about a third card, as seen by Banker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerThird {
    /// Player stood on two cards.
    Stood,
    /// Player drew this card.
    Drew(Card),
    /// Player must draw but the card is not known yet.
    Pending,
}

/// Banker's decision given what is known about Player's third card.
///
/// Returns `None` when the answer depends on a Player card not yet seen.
#[must_use]
pub const fn banker_decision(total: u8, player: PlayerThird) -> Option<bool> {
    match player {
        PlayerThird::Stood => Some(banker_draws(total, None)),
        PlayerThird::Drew(card) => Some(banker_draws(total, Some(card))),
        PlayerThird::Pending => match total {
            0..=2 => Some(true),
            3..=6 => None,
            _ => Some(false),
        },
    }
}

/// The third-card action for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThirdCardAction {
    /// Stands on two cards.
    Stand,
    /// Must draw a third card.
    Draw,
    /// Has drawn this third card.
    Drawn(Card),
    /// Depends on a card that has not been dealt yet.
    Pending,
}

impl ThirdCardAction {
    /// Returns whether a card is still owed to this side or its decision is open.
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        matches!(self, Self::Draw | Self::Pending)
    }
}

/// Advisory view of the third-card rules for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThirdCardPrediction {
    /// Whether either side holds a natural 8 or 9.
    pub natural: bool,
    /// Player's action.
    pub player: ThirdCardAction,
    /// Banker's action.
    pub banker: ThirdCardAction,
}

impl ThirdCardPrediction {
    /// Predicts both sides' third-card actions without dealing anything.
    ///
    /// Returns `None` until both hands hold their two initial cards.
    #[must_use]
    pub fn predict(player: &Hand, banker: &Hand) -> Option<Self> {
        if player.len() < 2 || banker.len() < 2 {
            return None;
        }

        if player.is_natural() || banker.is_natural() {
            return Some(Self {
                natural: true,
                player: ThirdCardAction::Stand,
                banker: ThirdCardAction::Stand,
            });
        }

        let (player_action, player_third) = match player.third_card() {
            Some(card) => (ThirdCardAction::Drawn(card), PlayerThird::Drew(card)),
            None if player_draws(player.initial_total()) => {
                (ThirdCardAction::Draw, PlayerThird::Pending)
            }
            None => (ThirdCardAction::Stand, PlayerThird::Stood),
        };

        let banker_action = match banker.third_card() {
            Some(card) => ThirdCardAction::Drawn(card),
            None => match banker_decision(banker.initial_total(), player_third) {
                Some(true) => ThirdCardAction::Draw,
                Some(false) => ThirdCardAction::Stand,
                None => ThirdCardAction::Pending,
            },
        };

        Some(Self {
            natural: false,
            player: player_action,
            banker: banker_action,
        })
    }

    /// Returns whether no side is owed a card, so the round can be settled.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.player.is_outstanding() && !self.banker.is_outstanding()
    }
}

impl fmt::Display for ThirdCardPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.natural {
            return f.write_str("Natural: no third cards are drawn");
        }

        match self.player {
            ThirdCardAction::Stand => f.write_str("Player stands")?,
            ThirdCardAction::Draw => f.write_str("Player draws a third card")?,
            ThirdCardAction::Drawn(card) => write!(f, "Player drew {card}")?,
            ThirdCardAction::Pending => f.write_str("Player third card pending")?,
        }
        f.write_str("; ")?;
        match self.banker {
            ThirdCardAction::Stand => f.write_str("Banker stands"),
            ThirdCardAction::Draw => f.write_str("Banker draws a third card"),
            ThirdCardAction::Drawn(card) => write!(f, "Banker drew {card}"),
            ThirdCardAction::Pending => {
                f.write_str("Banker third card pending on Player's third card")
            }
        }
    }
}

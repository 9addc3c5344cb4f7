//! Error types for engine operations.

use thiserror::Error;

/// A card rank outside `1..=10` was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank {rank}, expected 1..=10")]
pub struct InvalidCardError {
    /// The rejected rank.
    pub rank: u8,
}

/// A role name other than `Player` or `Banker` was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown role, expected `Player` or `Banker`")]
pub struct ParseRoleError;

/// Errors that can occur when placing a Dragon 7 bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero, negative, or not finite.
    #[error("bet amount must be a positive finite number")]
    InvalidAmount,
}

/// Errors that can occur when the engine draws third cards itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The initial two cards per side have not been dealt.
    #[error("both hands need their two initial cards")]
    IncompleteDeal,
    /// Third cards have already been dealt this round.
    #[error("third cards have already been dealt")]
    AlreadyResolved,
    /// Cards have already been entered for this round.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// Not enough cards are left in the shoe.
    #[error("not enough cards left in the shoe")]
    ShoeExhausted,
}

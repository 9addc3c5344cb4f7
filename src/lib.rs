//! A baccarat Dragon 7 counting engine with optional `no_std` support.
//!
//! The crate provides an [`Engine`] that tracks the cards dealt into the
//! Player and Banker hands, keeps a running and true count for the Dragon 7
//! side bet, applies the fixed baccarat third-card rules, and records every
//! finalized round.
//!
//! # Example
//!
//! ```
//! use dragon7::{Engine, EngineOptions, Role, Winner};
//!
//! let mut engine = Engine::new(EngineOptions::default(), 42);
//! engine.add_card(Role::Player, 4).unwrap();
//! engine.add_card(Role::Player, 3).unwrap();
//! engine.add_card(Role::Banker, 3).unwrap();
//! engine.add_card(Role::Banker, 4).unwrap();
//! engine.add_card(Role::Banker, 10).unwrap();
//!
//! let summary = engine.finalize_round();
//! assert_eq!(summary.winner, Winner::Tie);
//! assert!(summary.is_dragon7);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod count;
pub mod engine;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;
pub mod rules;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use bankroll::{Bankroll, BetRecord};
pub use card::{Card, DECK_SIZE, RANKS};
pub use count::{CountingScheme, RunningCount};
pub use engine::{Engine, ThirdCardDraws};
pub use error::{BetError, DrawError, InvalidCardError, ParseRoleError};
pub use hand::{Hand, Role};
pub use options::EngineOptions;
pub use round::{Round, RoundSummary, Winner};
pub use rules::{PlayerThird, ThirdCardAction, ThirdCardPrediction};
pub use shoe::Shoe;
pub use strategy::{BetRecommendation, BetStrategy};

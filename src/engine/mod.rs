//! Engine and session state management.

use alloc::vec::Vec;
use core::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::count::RunningCount;
use crate::error::InvalidCardError;
use crate::hand::{Hand, Role};
use crate::options::EngineOptions;
use crate::round::{Round, RoundSummary};
use crate::shoe::Shoe;

mod bet;
mod draw;
mod signal;

pub use draw::ThirdCardDraws;

/// A Dragon 7 engine that tracks the shoe, the count, and the current round.
///
/// One engine holds one session: the shoe and running count carry over from
/// round to round until [`Engine::reset`] replaces the whole thing. Use
/// [`EngineOptions`] to configure the number of decks, the bankroll, and the
/// bet-timing strategy.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Engine options.
    options: EngineOptions,
    /// Cards left in the shoe.
    shoe: Shoe,
    /// Running count over all cards seen.
    count: RunningCount,
    /// Hands being built this round.
    round: Round,
    /// Finalized rounds, oldest first.
    history: Vec<RoundSummary>,
    /// Simulated bankroll.
    bankroll: Bankroll,
    /// Random number generator for simulated draws.
    rng: ChaCha8Rng,
}

impl Engine {
    /// Creates a new engine with the given seed.
    ///
    /// The seed only affects cards the engine draws itself.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon7::{Engine, EngineOptions};
    ///
    /// let engine = Engine::new(EngineOptions::default().with_decks(6), 42);
    /// assert_eq!(engine.cards_remaining(), 6 * 40);
    /// ```
    #[must_use]
    pub fn new(options: EngineOptions, seed: u64) -> Self {
        Self {
            options,
            shoe: Shoe::new(options.decks),
            count: RunningCount::new(options.counting),
            round: Round::new(),
            history: Vec::new(),
            bankroll: Bankroll::new(options.bankroll),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Discards this session and starts a fresh one with the same options.
    ///
    /// The shoe, count, history, bankroll and current round are all dropped.
    #[must_use]
    pub fn reset(mut self) -> Self {
        let seed = self.rng.random();
        tracing::debug!(rounds = self.history.len(), "engine reset");
        Self::new(self.options, seed)
    }

    /// Returns the engine options.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the round in progress.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current hand for `role`.
    #[must_use]
    pub const fn hand(&self, role: Role) -> &Hand {
        self.round.hand(role)
    }

    /// Adds a card seen at the table to a hand.
    ///
    /// The card is counted and taken out of the shoe. A rank the shoe has
    /// already run out of is still accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError`] if `rank` is outside `1..=10`. Nothing is
    /// recorded in that case.
    pub fn add_card(&mut self, role: Role, rank: u8) -> Result<Card, InvalidCardError> {
        let card = Card::new(rank)?;
        self.shoe.remove(card);
        self.record(role, card);
        Ok(card)
    }

    /// Adds a card to a hand named by a string such as `"Player"`.
    ///
    /// Unknown role names are ignored and `Ok(None)` is returned, so input
    /// from an untrusted front-end never aborts the session.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError`] if `rank` is outside `1..=10`.
    pub fn add_card_by_name(
        &mut self,
        role: &str,
        rank: u8,
    ) -> Result<Option<Card>, InvalidCardError> {
        let card = Card::new(rank)?;
        let Ok(role) = Role::from_str(role) else {
            tracing::debug!(role, "ignoring card for unknown role");
            return Ok(None);
        };
        self.add_card(role, card.rank()).map(Some)
    }

    /// Appends a card already taken from the shoe and counts it.
    fn record(&mut self, role: Role, card: Card) {
        self.round.hand_mut(role).add_card(card);
        let weight = self.count.update(card);
        tracing::debug!(
            %role,
            rank = card.rank(),
            weight,
            running_count = self.count.value(),
            cards_dealt = self.shoe.cards_dealt(),
            "card recorded"
        );
    }

    /// Returns `(player_total, banker_total)` for the round in progress.
    #[must_use]
    pub fn current_hand_totals(&self) -> (u8, u8) {
        self.round.totals()
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.count.value()
    }

    /// Returns the number of cards dealt since the shoe was created.
    #[must_use]
    pub const fn cards_dealt(&self) -> u32 {
        self.shoe.cards_dealt()
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> u32 {
        self.shoe.cards_remaining()
    }

    /// Returns the estimated decks left, never below one.
    #[must_use]
    pub fn remaining_decks(&self) -> f64 {
        self.shoe.remaining_decks()
    }

    /// Returns the running count divided by the decks remaining.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.count.true_count(self.remaining_decks())
    }

    /// Settles the round in progress and starts an empty one.
    ///
    /// When auto-betting is enabled and the true count has reached the bet
    /// threshold, a Dragon 7 bet is settled on this round first, unless one
    /// was already placed by hand. The shoe and the count carry over.
    pub fn finalize_round(&mut self) -> RoundSummary {
        let number = self.history.len() + 1;

        if let Some(stake) = self.options.auto_bet {
            if self.bankroll.bets().iter().any(|bet| bet.round == number) {
                tracing::debug!(number, "round already has a bet, auto bet skipped");
            } else if let Err(err) = self.place_bet(stake) {
                tracing::warn!(stake, %err, "auto bet skipped");
            }
        }

        let (player_total, banker_total) = self.round.totals();
        let round = core::mem::take(&mut self.round);
        let summary = RoundSummary {
            number,
            player_cards: round.player.cards().to_vec(),
            banker_cards: round.banker.cards().to_vec(),
            player_total,
            banker_total,
            winner: round.winner(),
            is_dragon7: round.is_dragon7(),
            running_count: self.running_count(),
            remaining_decks: self.remaining_decks(),
            true_count: self.true_count(),
            bet: self
                .bankroll
                .bets()
                .last()
                .filter(|bet| bet.round == number)
                .copied(),
        };

        tracing::debug!(
            number,
            player_total,
            banker_total,
            winner = %summary.winner,
            dragon7 = summary.is_dragon7,
            true_count = summary.true_count,
            "round finalized"
        );

        self.history.push(summary.clone());
        summary
    }

    /// Returns every finalized round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }
}

use crate::card::Card;
use crate::error::DrawError;
use crate::hand::Role;
use crate::round::RoundSummary;
use crate::rules::{self, ThirdCardPrediction};

use super::Engine;

/// Third cards dealt by [`Engine::apply_third_card_rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThirdCardDraws {
    /// Whether a natural ended the round before any draw.
    pub natural: bool,
    /// Player's third card, if drawn.
    pub player: Option<Card>,
    /// Banker's third card, if drawn.
    pub banker: Option<Card>,
    /// Whether the shoe ran out while a card was owed.
    pub shoe_exhausted: bool,
}

impl Engine {
    /// Draws a random card from the shoe without dealing it to a hand.
    ///
    /// The card is counted like any other. Returns `None` once the shoe is
    /// exhausted.
    pub fn draw_random_card(&mut self) -> Option<Card> {
        let card = self.shoe.draw(&mut self.rng)?;
        self.count.update(card);
        Some(card)
    }

    /// Draws a random card from the shoe into a hand.
    fn draw_to(&mut self, role: Role) -> Option<Card> {
        let Some(card) = self.shoe.draw(&mut self.rng) else {
            tracing::warn!(%role, "shoe exhausted, no card to draw");
            return None;
        };
        self.record(role, card);
        Some(card)
    }

    /// Reports which side must draw a third card, without dealing anything.
    ///
    /// Use this while entering real cards from a table. Returns `None`
    /// until both hands hold two cards.
    #[must_use]
    pub fn predict_third_card_actions(&self) -> Option<ThirdCardPrediction> {
        ThirdCardPrediction::predict(&self.round.player, &self.round.banker)
    }

    /// Deals the third cards the rules call for, drawing them from the shoe.
    ///
    /// If the shoe runs out while a card is owed, drawing stops and
    /// [`ThirdCardDraws::shoe_exhausted`] is set.
    ///
    /// # Errors
    ///
    /// Returns an error if either hand does not hold exactly two cards.
    pub fn apply_third_card_rules(&mut self) -> Result<ThirdCardDraws, DrawError> {
        let (player_len, banker_len) = (self.round.player.len(), self.round.banker.len());
        if player_len < 2 || banker_len < 2 {
            return Err(DrawError::IncompleteDeal);
        }
        if player_len > 2 || banker_len > 2 {
            return Err(DrawError::AlreadyResolved);
        }

        let mut draws = ThirdCardDraws::default();
        if self.round.player.is_natural() || self.round.banker.is_natural() {
            draws.natural = true;
            return Ok(draws);
        }

        if rules::player_draws(self.round.player.initial_total()) {
            draws.player = self.draw_to(Role::Player);
            if draws.player.is_none() {
                draws.shoe_exhausted = true;
                return Ok(draws);
            }
        }

        if rules::banker_draws(self.round.banker.initial_total(), draws.player) {
            draws.banker = self.draw_to(Role::Banker);
            draws.shoe_exhausted = draws.banker.is_none();
        }

        Ok(draws)
    }

    /// Deals two cards to each side in Player, Banker, Player, Banker order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::RoundInProgress`] if cards have already been
    /// entered this round, or [`DrawError::ShoeExhausted`] if fewer than four
    /// cards are left. Nothing is dealt in either case.
    pub fn deal_initial_cards(&mut self) -> Result<(), DrawError> {
        if !self.round.is_empty() {
            return Err(DrawError::RoundInProgress);
        }
        if self.shoe.cards_remaining() < 4 {
            return Err(DrawError::ShoeExhausted);
        }

        for role in [Role::Player, Role::Banker, Role::Player, Role::Banker] {
            self.draw_to(role);
        }
        Ok(())
    }

    /// Plays a whole round from the shoe: deal, third cards, finalize.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be dealt. See
    /// [`Engine::deal_initial_cards`].
    pub fn simulate_round(&mut self) -> Result<RoundSummary, DrawError> {
        self.deal_initial_cards()?;
        self.apply_third_card_rules()?;
        Ok(self.finalize_round())
    }
}

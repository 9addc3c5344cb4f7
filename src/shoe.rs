//! The finite shoe of undealt cards.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::{CARDS_PER_RANK, Card, DECK_SIZE, RANKS};

/// Remaining cards per rank plus a running tally of cards dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    decks: u8,
    remaining: [u32; RANKS],
    dealt: u32,
}

impl Shoe {
    /// Creates a full shoe of `decks` 52-card decks.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        Self {
            decks,
            remaining: [CARDS_PER_RANK * u32::from(decks); RANKS],
            dealt: 0,
        }
    }

    /// Returns the number of decks the shoe was built with.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns how many cards of this rank are left.
    #[must_use]
    pub const fn remaining_of(&self, card: Card) -> u32 {
        self.remaining[card.index()]
    }

    /// Returns the total number of cards left.
    #[must_use]
    pub fn cards_remaining(&self) -> u32 {
        self.remaining.iter().sum()
    }

    /// Returns whether no card of any rank is left.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.iter().all(|&n| n == 0)
    }

    /// Returns the number of cards taken out since the shoe was created.
    #[must_use]
    pub const fn cards_dealt(&self) -> u32 {
        self.dealt
    }

    /// Estimated decks left, never below one.
    #[must_use]
    pub fn remaining_decks(&self) -> f64 {
        (f64::from(self.decks) - f64::from(self.dealt) / f64::from(DECK_SIZE)).max(1.0)
    }

    /// Records a card seen at the table.
    ///
    /// The card always counts as dealt. Its rank is decremented only while
    /// copies remain, so entering more copies than the shoe holds is allowed.
    pub fn remove(&mut self, card: Card) {
        let slot = &mut self.remaining[card.index()];
        *slot = slot.saturating_sub(1);
        self.dealt += 1;
    }

    /// Draws a card at random and removes it from the shoe.
    ///
    /// Every rank that still has copies is equally likely. Returns `None`
    /// once the shoe is exhausted.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        let mut candidates = [Card::ACE; RANKS];
        let mut len = 0;
        for card in Card::all() {
            if self.remaining_of(card) > 0 {
                candidates[len] = card;
                len += 1;
            }
        }

        let card = *candidates[..len].choose(rng)?;
        self.remove(card);
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn card(rank: u8) -> Card {
        Card::new(rank).unwrap()
    }

    #[test]
    fn new_shoe_holds_four_per_rank_per_deck() {
        let shoe = Shoe::new(8);
        assert_eq!(shoe.remaining_of(card(1)), 32);
        assert_eq!(shoe.remaining_of(card(10)), 32);
        assert_eq!(shoe.cards_remaining(), 320);
        assert_eq!(shoe.cards_dealt(), 0);
    }

    #[test]
    fn remove_saturates_at_zero_but_still_counts() {
        let mut shoe = Shoe::new(1);
        for _ in 0..5 {
            shoe.remove(card(9));
        }
        assert_eq!(shoe.remaining_of(card(9)), 0);
        assert_eq!(shoe.cards_dealt(), 5);
    }

    #[test]
    fn draw_skips_exhausted_ranks() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut shoe = Shoe::new(1);
        for rank in 1..=9 {
            for _ in 0..4 {
                shoe.remove(card(rank));
            }
        }

        for _ in 0..4 {
            assert_eq!(shoe.draw(&mut rng), Some(card(10)));
        }
        assert!(shoe.is_exhausted());
        assert_eq!(shoe.draw(&mut rng), None);
        assert_eq!(shoe.cards_dealt(), 40);
    }

    #[test]
    fn remaining_decks_is_floored_at_one() {
        let mut shoe = Shoe::new(1);
        for _ in 0..60 {
            shoe.remove(card(2));
        }
        assert!((shoe.remaining_decks() - 1.0).abs() < f64::EPSILON);
    }
}

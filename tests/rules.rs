//! Third-card rule and round resolution tests.

use dragon7::rules::{PlayerThird, banker_decision, banker_draws, player_draws};
use dragon7::{Card, Hand, Round, ThirdCardAction, ThirdCardPrediction, Winner};

fn card(rank: u8) -> Card {
    Card::new(rank).unwrap()
}

fn hand(ranks: &[u8]) -> Hand {
    ranks.iter().map(|&rank| card(rank)).collect()
}

fn round(player: &[u8], banker: &[u8]) -> Round {
    Round {
        player: hand(player),
        banker: hand(banker),
    }
}

#[test]
fn player_draws_on_zero_through_five() {
    for total in 0..=5 {
        assert!(player_draws(total), "total {total}");
    }
    assert!(!player_draws(6));
    assert!(!player_draws(7));
}

#[test]
fn banker_table_is_exhaustive() {
    // Columns: Player stood, then Player's third card A, 2, ..., 9, 10.
    #[rustfmt::skip]
    let expected: [[bool; 11]; 8] = [
        [true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true ],
        [true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true ],
        [true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true ],
        [true,  true,  true,  true,  true,  true,  true,  true,  false, true,  true ],
        [true,  false, true,  true,  true,  true,  true,  true,  false, false, false],
        [true,  false, false, false, true,  true,  true,  true,  false, false, false],
        [false, false, false, false, false, false, true,  true,  false, false, false],
        [false, false, false, false, false, false, false, false, false, false, false],
    ];

    for (total, row) in expected.iter().enumerate() {
        let total = total as u8;
        assert_eq!(banker_draws(total, None), row[0], "total {total}, stood");
        for rank in 1..=10u8 {
            assert_eq!(
                banker_draws(total, Some(card(rank))),
                row[rank as usize],
                "total {total}, player third {rank}"
            );
        }
    }
}

#[test]
fn banker_decision_waits_only_when_it_matters() {
    assert_eq!(banker_decision(0, PlayerThird::Pending), Some(true));
    assert_eq!(banker_decision(2, PlayerThird::Pending), Some(true));
    for total in 3..=6 {
        assert_eq!(banker_decision(total, PlayerThird::Pending), None);
    }
    assert_eq!(banker_decision(7, PlayerThird::Pending), Some(false));
    assert_eq!(banker_decision(5, PlayerThird::Stood), Some(true));
    assert_eq!(banker_decision(6, PlayerThird::Stood), Some(false));
    assert_eq!(banker_decision(6, PlayerThird::Drew(card(7))), Some(true));
}

#[test]
fn prediction_needs_two_cards_each() {
    let r = round(&[4, 3], &[2]);
    assert_eq!(ThirdCardPrediction::predict(&r.player, &r.banker), None);
}

#[test]
fn natural_stops_all_draws() {
    let r = round(&[4, 4], &[2, 1]);
    let prediction = ThirdCardPrediction::predict(&r.player, &r.banker).unwrap();
    assert!(prediction.natural);
    assert_eq!(prediction.player, ThirdCardAction::Stand);
    assert_eq!(prediction.banker, ThirdCardAction::Stand);
    assert!(prediction.is_complete());
    assert_eq!(prediction.to_string(), "Natural: no third cards are drawn");
}

#[test]
fn banker_pending_on_player_third_card() {
    let r = round(&[2, 3], &[1, 2]);
    let prediction = ThirdCardPrediction::predict(&r.player, &r.banker).unwrap();
    assert_eq!(prediction.player, ThirdCardAction::Draw);
    assert_eq!(prediction.banker, ThirdCardAction::Pending);
    assert!(!prediction.is_complete());

    let r = round(&[2, 3, 8], &[1, 2]);
    let prediction = ThirdCardPrediction::predict(&r.player, &r.banker).unwrap();
    assert_eq!(prediction.player, ThirdCardAction::Drawn(card(8)));
    assert_eq!(prediction.banker, ThirdCardAction::Stand);
    assert!(prediction.is_complete());
}

#[test]
fn player_stood_banker_stands_on_seven() {
    let r = round(&[4, 3], &[2, 5]);
    let prediction = ThirdCardPrediction::predict(&r.player, &r.banker).unwrap();
    assert!(!prediction.natural);
    assert_eq!(prediction.player, ThirdCardAction::Stand);
    assert_eq!(prediction.banker, ThirdCardAction::Stand);
    assert!(prediction.is_complete());
    assert_eq!(prediction.to_string(), "Player stands; Banker stands");
}

#[test]
fn player_stood_banker_draws_on_five() {
    let r = round(&[4, 3], &[2, 3]);
    let prediction = ThirdCardPrediction::predict(&r.player, &r.banker).unwrap();
    assert!(!prediction.natural);
    assert_eq!(prediction.player, ThirdCardAction::Stand);
    assert_eq!(prediction.banker, ThirdCardAction::Draw);
    assert_eq!(
        prediction.to_string(),
        "Player stands; Banker draws a third card"
    );
}

#[test]
fn hand_totals_wrap_at_ten() {
    assert_eq!(hand(&[2, 5, 9]).total(), 6);
    assert_eq!(hand(&[10, 10]).total(), 0);
    assert_eq!(hand(&[1, 10]).total(), 1);
    assert_eq!(hand(&[9, 9, 9]).total(), 7);
}

#[test]
fn winner_compares_totals() {
    assert_eq!(round(&[4, 3], &[2, 5, 9]).winner(), Winner::Player);
    assert_eq!(round(&[10, 2], &[3, 4]).winner(), Winner::Banker);
    assert_eq!(round(&[4, 3], &[3, 4]).winner(), Winner::Tie);
}

#[test]
fn dragon7_needs_three_banker_cards_totalling_seven() {
    assert!(round(&[4, 3], &[3, 4, 10]).is_dragon7());
    assert!(round(&[9, 9], &[1, 1, 5]).is_dragon7());
    assert!(!round(&[4, 3], &[3, 4]).is_dragon7());
    assert!(!round(&[4, 3], &[2, 5, 9]).is_dragon7());

    for a in 1..=10u8 {
        for b in 1..=10u8 {
            assert!(!round(&[], &[a, b]).is_dragon7(), "two cards {a} {b}");
            for c in 1..=10u8 {
                let expected = (a + b + c) % 10 == 7;
                assert_eq!(round(&[], &[a, b, c]).is_dragon7(), expected);
            }
        }
    }
}

use dragon7::{
    BetRecommendation, BetRecord, Card, Engine, EngineOptions, Hand, Role, RoundSummary,
    ThirdCardAction, ThirdCardDraws, ThirdCardPrediction, Winner,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(decks: u8, bankroll: f64, seed: u32) -> Self {
        let options = EngineOptions::default()
            .with_decks(decks)
            .with_bankroll(bankroll);
        Self {
            engine: Engine::new(options, seed as u64),
        }
    }

    /// Starts a fresh session with the same options; the new shoe is
    /// seeded from the old engine.
    pub fn reset(&mut self) {
        let placeholder = Engine::new(*self.engine.options(), 0);
        self.engine = core::mem::replace(&mut self.engine, placeholder).reset();
    }

    /// Adds a card; unknown role names are ignored.
    pub fn add_card(&mut self, role: &str, rank: u8) -> Result<bool, JsValue> {
        self.engine
            .add_card_by_name(role, rank)
            .map(|card| card.is_some())
            .map_err(js_err)
    }

    pub fn apply_third_card_rules(&mut self) -> Result<JsValue, JsValue> {
        let draws = self.engine.apply_third_card_rules().map_err(js_err)?;
        to_js_value(&JsDraws::from(draws))
    }

    pub fn simulate_round(&mut self) -> Result<JsValue, JsValue> {
        let summary = self.engine.simulate_round().map_err(js_err)?;
        to_js_value(&JsRoundSummary::from(&summary))
    }

    pub fn place_bet(&mut self, amount: f64) -> Result<JsValue, JsValue> {
        let record = self.engine.place_bet(amount).map_err(js_err)?;
        to_js_value(&record.map(JsBet::from))
    }

    pub fn finalize_round(&mut self) -> Result<JsValue, JsValue> {
        let summary = self.engine.finalize_round();
        to_js_value(&JsRoundSummary::from(&summary))
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        let history: Vec<JsRoundSummary> = self
            .engine
            .history()
            .iter()
            .map(JsRoundSummary::from)
            .collect();
        to_js_value(&history)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let (player_total, banker_total) = self.engine.current_hand_totals();
        let recommendation = self.engine.bet_recommendation();

        let snapshot = Snapshot {
            player: JsHand::from_hand(self.engine.hand(Role::Player), player_total),
            banker: JsHand::from_hand(self.engine.hand(Role::Banker), banker_total),
            prediction: self
                .engine
                .predict_third_card_actions()
                .map(JsPrediction::from),
            running_count: self.engine.running_count(),
            true_count: self.engine.true_count(),
            remaining_decks: self.engine.remaining_decks(),
            cards_dealt: self.engine.cards_dealt(),
            cards_remaining: self.engine.cards_remaining(),
            dragon7_probability: self.engine.dragon7_probability(),
            recommendation: recommendation_to_str(recommendation),
            advice: recommendation.to_string(),
            should_bet: self.engine.should_bet_dragon7(),
            bankroll: self.engine.bankroll().balance(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    player: JsHand,
    banker: JsHand,
    prediction: Option<JsPrediction>,
    running_count: i32,
    true_count: f64,
    remaining_decks: f64,
    cards_dealt: u32,
    cards_remaining: u32,
    dragon7_probability: f64,
    recommendation: &'static str,
    advice: String,
    should_bet: bool,
    bankroll: f64,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<u8>,
    total: u8,
}

impl JsHand {
    fn from_hand(hand: &Hand, total: u8) -> Self {
        Self {
            cards: ranks(hand.cards()),
            total,
        }
    }
}

#[derive(Serialize)]
struct JsPrediction {
    natural: bool,
    player: &'static str,
    banker: &'static str,
    complete: bool,
    text: String,
}

impl From<ThirdCardPrediction> for JsPrediction {
    fn from(prediction: ThirdCardPrediction) -> Self {
        Self {
            natural: prediction.natural,
            player: action_to_str(prediction.player),
            banker: action_to_str(prediction.banker),
            complete: prediction.is_complete(),
            text: prediction.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsDraws {
    natural: bool,
    player: Option<u8>,
    banker: Option<u8>,
    shoe_exhausted: bool,
}

impl From<ThirdCardDraws> for JsDraws {
    fn from(draws: ThirdCardDraws) -> Self {
        Self {
            natural: draws.natural,
            player: draws.player.map(Card::rank),
            banker: draws.banker.map(Card::rank),
            shoe_exhausted: draws.shoe_exhausted,
        }
    }
}

#[derive(Serialize)]
struct JsRoundSummary {
    number: u32,
    player_cards: Vec<u8>,
    banker_cards: Vec<u8>,
    player_total: u8,
    banker_total: u8,
    winner: &'static str,
    is_dragon7: bool,
    running_count: i32,
    remaining_decks: f64,
    true_count: f64,
    bet: Option<JsBet>,
}

impl From<&RoundSummary> for JsRoundSummary {
    fn from(summary: &RoundSummary) -> Self {
        Self {
            number: summary.number as u32,
            player_cards: ranks(&summary.player_cards),
            banker_cards: ranks(&summary.banker_cards),
            player_total: summary.player_total,
            banker_total: summary.banker_total,
            winner: winner_to_str(summary.winner),
            is_dragon7: summary.is_dragon7,
            running_count: summary.running_count,
            remaining_decks: summary.remaining_decks,
            true_count: summary.true_count,
            bet: summary.bet.map(JsBet::from),
        }
    }
}

#[derive(Serialize)]
struct JsBet {
    round: u32,
    amount: f64,
    true_count: f64,
    won: bool,
    net: f64,
    balance: f64,
}

impl From<BetRecord> for JsBet {
    fn from(record: BetRecord) -> Self {
        Self {
            round: record.round as u32,
            amount: record.amount,
            true_count: record.true_count,
            won: record.won,
            net: record.net,
            balance: record.balance,
        }
    }
}

fn ranks(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|card| card.rank()).collect()
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Banker => "Banker",
        Winner::Tie => "Tie",
    }
}

fn action_to_str(action: ThirdCardAction) -> &'static str {
    match action {
        ThirdCardAction::Stand => "Stand",
        ThirdCardAction::Draw => "Draw",
        ThirdCardAction::Drawn(_) => "Drawn",
        ThirdCardAction::Pending => "Pending",
    }
}

fn recommendation_to_str(recommendation: BetRecommendation) -> &'static str {
    match recommendation {
        BetRecommendation::VeryLikely => "VeryLikely",
        BetRecommendation::Strong => "Strong",
        BetRecommendation::Possible => "Possible",
        BetRecommendation::PossibleSoon => "PossibleSoon",
        BetRecommendation::BetNow => "BetNow",
        BetRecommendation::Almost => "Almost",
        BetRecommendation::NotYet => "NotYet",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

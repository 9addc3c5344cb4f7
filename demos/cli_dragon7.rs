//! CLI Dragon 7 counter.
//!
//! Enter cards as `p <rank>` or `b <rank>` (1 = Ace, 10 = ten or face).
//! Set `RUST_LOG=dragon7=debug` to trace every card.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use dragon7::{Card, Engine, EngineOptions, Role, RoundSummary};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Dragon 7 counter (type 'h' for help, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = EngineOptions::default().with_bankroll(1000.0);
    let mut engine = Engine::new(options, seed);

    loop {
        print_table(&engine);

        let input = prompt_line("> ");
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        match command {
            "p" | "b" => {
                let role = if command == "p" { Role::Player } else { Role::Banker };
                let Some(rank) = argument.and_then(|a| a.parse::<u8>().ok()) else {
                    println!("Usage: {command} <rank 1-10>");
                    continue;
                };
                if let Err(err) = engine.add_card(role, rank) {
                    println!("Card error: {err}");
                }
            }
            "d" | "draw" => match engine.apply_third_card_rules() {
                Ok(draws) if draws.natural => println!("Natural, no third cards."),
                Ok(draws) => {
                    if let Some(card) = draws.player {
                        println!("Player draws {card}.");
                    }
                    if let Some(card) = draws.banker {
                        println!("Banker draws {card}.");
                    }
                    if draws.shoe_exhausted {
                        println!("The shoe is empty.");
                    }
                }
                Err(err) => println!("Draw error: {err}"),
            },
            "s" | "sim" => match engine.simulate_round() {
                Ok(summary) => print_summary(&summary),
                Err(err) => println!("Simulation error: {err}"),
            },
            "bet" => {
                let Some(amount) = argument.and_then(|a| a.parse::<f64>().ok()) else {
                    println!("Usage: bet <amount>");
                    continue;
                };
                match engine.place_bet(amount) {
                    Ok(Some(record)) => println!(
                        "Bet {} {}: net {:+}, bankroll {}",
                        record.amount,
                        if record.won { "won" } else { "lost" },
                        record.net,
                        record.balance
                    ),
                    Ok(None) => println!("True count below threshold, no bet placed."),
                    Err(err) => println!("Bet error: {err}"),
                }
            }
            "f" | "finalize" => {
                let summary = engine.finalize_round();
                print_summary(&summary);
            }
            "hist" | "history" => print_history(engine.history()),
            "r" | "reset" => {
                engine = engine.reset();
                println!("Counter reset.");
            }
            "h" | "help" => print_help(),
            "q" | "quit" => break,
            "" => {}
            _ => println!("Unknown command."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_help() {
    println!("  p <rank>     add a card to Player");
    println!("  b <rank>     add a card to Banker");
    println!("  d            draw third cards from the shoe");
    println!("  s            simulate a whole round");
    println!("  bet <amount> bet on Dragon 7 this round");
    println!("  f            finalize the round");
    println!("  history      show finished rounds");
    println!("  r            reset the counter");
}

fn print_table(engine: &Engine) {
    println!(
        "\nRunning {} | True {:.2} | Decks {:.2} | Dragon 7 {:.1}% | Bankroll {}",
        engine.running_count(),
        engine.true_count(),
        engine.remaining_decks(),
        engine.dragon7_probability(),
        engine.bankroll().balance()
    );
    println!("{}", colorize_advice(engine));

    let (player_total, banker_total) = engine.current_hand_totals();
    println!(
        "Player: {} (total {player_total})",
        engine.hand(Role::Player)
    );
    println!(
        "Banker: {} (total {banker_total})",
        engine.hand(Role::Banker)
    );
    if let Some(prediction) = engine.predict_third_card_actions() {
        println!("{prediction}");
    }
}

fn colorize_advice(engine: &Engine) -> String {
    let advice = engine.bet_recommendation();
    let code = if advice.is_bet() { "32" } else { "90" };
    colorize(&advice.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn print_summary(summary: &RoundSummary) {
    let dragon = if summary.is_dragon7 {
        colorize("Dragon 7!", "31")
    } else {
        String::new()
    };
    println!(
        "Hand {}: Player {} vs Banker {} -> {} {dragon}",
        summary.number, summary.player_total, summary.banker_total, summary.winner
    );
    if let Some(bet) = summary.bet {
        println!("Bet {} settled, net {:+}", bet.amount, bet.net);
    }
}

fn print_history(history: &[RoundSummary]) {
    if history.is_empty() {
        println!("No hands yet.");
        return;
    }
    for summary in history {
        let cards = |cards: &[Card]| {
            cards
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!(
            "#{:<3} P[{}] B[{}] {:<6} D7 {:<5} RC {:>3} TC {:>6.2}",
            summary.number,
            cards(summary.player_cards.as_slice()),
            cards(summary.banker_cards.as_slice()),
            summary.winner.to_string(),
            summary.is_dragon7,
            summary.running_count,
            summary.true_count
        );
    }
}

//! Terminal trainer. Type `q` at any prompt to quit.
//!
//! Set `RUST_LOG=blackjack_academy=debug` to watch the engine's events.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack_academy::{
    Card, CounterView, DealerHand, Game, GameOptions, Hand, HandOutcome, JsonFileStorage, Notice,
    Phase, PlayerAction, Recommendation, Seat, Table,
};
use tracing_subscriber::{EnvFilter, fmt};

/// Prints table events as they happen.
struct Terminal;

impl Table for Terminal {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration / 4);
    }

    fn shuffle(&mut self) {
        println!("~ shuffling ~");
    }

    fn card_dealt(&mut self, card: &Card, seat: Seat, face_up: bool) {
        let shown = if face_up {
            card.to_string()
        } else {
            "??".to_owned()
        };
        match seat {
            Seat::Dealer => println!("  dealer <- {shown}"),
            Seat::Player(id) => println!("  hand #{} <- {shown}", id.0),
        }
    }

    fn hole_revealed(&mut self, dealer: &DealerHand) {
        println!("Dealer turns over: {}", format_cards(dealer.cards()));
    }

    fn dealer_value(&mut self, dealer: &DealerHand) {
        println!("Dealer shows {}", dealer.value());
    }

    fn split_layout(&mut self, hands: &[Hand]) {
        println!("Split: now playing {} hands", hands.len());
    }

    fn offer_insurance(&mut self, cost: usize) {
        println!("Dealer shows an Ace. Insurance costs ${cost}.");
    }

    fn hand_outcome(&mut self, index: usize, hand: &Hand, outcome: HandOutcome, payout: usize) {
        let verdict = match outcome {
            HandOutcome::Win => "WIN",
            HandOutcome::Lose => "LOSE",
            HandOutcome::Push => "PUSH",
            HandOutcome::Blackjack => "BLACKJACK",
        };
        println!(
            "Hand {}: {} ({}) -> {verdict}, paid ${payout}",
            index + 1,
            format_cards(hand.cards()),
            hand.describe()
        );
    }

    fn counter(&mut self, view: Option<CounterView>) {
        if let Some(view) = view {
            let tint = if view.strength.favours_player() {
                "\x1b[32m"
            } else if view.strength.favours_dealer() {
                "\x1b[31m"
            } else {
                ""
            };
            println!(
                "  [count {tint}RC {}\x1b[0m TC {:+.1} {}]",
                view.running_count,
                view.true_count,
                view.advantage.label()
            );
        }
    }

    fn flash(&mut self, message: &str, notice: Notice) {
        match notice {
            Notice::Warn => println!("! {message}"),
            Notice::Info => println!("* {message}"),
        }
    }

    fn table_message(&mut self, message: &str) {
        println!("-- {message} --");
    }

    fn book(&mut self, advice: &Recommendation) {
        println!("Book says {}: {}", advice.label, advice.explanation);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).without_time().init();

    println!("Blackjack Academy (type 'q' to quit, 'c' to toggle the count)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let storage = JsonFileStorage::new(std::env::temp_dir().join("blackjack-academy.json"));
    let mut game = Game::with_parts(GameOptions::default(), seed, Terminal, storage);

    loop {
        if game.phase() == Phase::Betting && !play_betting(&mut game) {
            break;
        }

        if let Some(cost) = game.insurance_offer() {
            let take = matches!(
                prompt_line(&format!("Take insurance for ${cost}? (y/n): ")).as_str(),
                "y" | "yes"
            );
            if let Err(err) = game.resolve_insurance(take) {
                println!("Insurance error: {err}");
            }
        }

        while game.phase() == Phase::PlayerTurn {
            print_table(&game);
            let action = match prompt_line("(h)it (s)tand (d)ouble s(p)lit (b)ook: ").as_str() {
                "h" | "hit" => PlayerAction::Hit,
                "s" | "stand" => PlayerAction::Stand,
                "d" | "double" => PlayerAction::Double,
                "p" | "split" => PlayerAction::Split,
                "b" | "book" => PlayerAction::Book,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            if let Err(err) = game.handle_action(action) {
                println!("Action error: {err}");
            }
        }

        if let Some(round) = game.last_round() {
            println!("Net this round: {:+}", round.net());
        }
    }
}

/// Takes a bet and deals. Returns `false` when the player quits.
fn play_betting(game: &mut Game<Terminal, JsonFileStorage>) -> bool {
    loop {
        let stats = game.stats();
        println!(
            "\nBankroll ${} | bet ${} | played {} won {} lost {} pushed {}",
            game.bankroll(),
            game.current_bet(),
            stats.hands_played,
            stats.hands_won,
            stats.hands_lost,
            stats.hands_pushed
        );
        let input = prompt_line("Add chips, (r)ebet, (x) clear, (n)ew shoe, Enter to deal: ");
        let result = match input.as_str() {
            "q" | "quit" => return false,
            "" => match game.start_round() {
                Ok(()) => return true,
                Err(err) => {
                    println!("Deal error: {err}");
                    continue;
                }
            },
            "c" => {
                game.toggle_counter();
                continue;
            }
            "n" => {
                if let Err(err) = game.force_new_shoe() {
                    println!("Shoe error: {err}");
                }
                continue;
            }
            "r" => game.rebet(),
            "x" => game.clear_bet(),
            amount => match amount.parse::<usize>() {
                Ok(amount) => game.place_bet(amount),
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            },
        };
        if let Err(err) = result {
            println!("Bet error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_owned();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game<Terminal, JsonFileStorage>) {
    let snapshot = game.snapshot();
    let hidden = if snapshot.dealer.hole_hidden { " ??" } else { "" };
    println!(
        "\nDealer: {}{hidden} (showing {})",
        format_cards(&snapshot.dealer.cards),
        snapshot.dealer.value
    );
    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if Some(index) == snapshot.active_hand {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} Hand {}: {} | {} | bet ${}",
            index + 1,
            format_cards(hand.cards()),
            hand.describe(),
            hand.bet()
        );
    }
    println!(
        "Shoe: {} cards, {}% dealt",
        snapshot.shoe.cards_remaining, snapshot.shoe.penetration_percent
    );
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

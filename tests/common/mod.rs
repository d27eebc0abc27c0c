//! Shared helpers for integration tests.

#![expect(dead_code, reason = "each test crate uses a different subset")]

use std::sync::OnceLock;
use std::time::Duration;

use blackjack_academy::{
    Card, DealerHand, Game, GameOptions, Hand, HandOutcome, MemoryStorage, Notice, Phase, Rank,
    Recommendation, Seat, Settings, Suit, Table,
};
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Installs a test subscriber once per test binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Cards of mixed suits, in the given rank order.
pub fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| card(suit, rank))
        .collect()
}

pub fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new(blackjack_academy::HandId(0), 10);
    for card in cards(ranks) {
        hand.add_card(card);
    }
    hand
}

/// A table that remembers what it was told.
#[derive(Debug, Default)]
pub struct RecordingTable {
    pub phases: Vec<Phase>,
    pub pauses: Vec<Duration>,
    pub dealt: Vec<(Card, Seat, bool)>,
    pub reveals: usize,
    pub shuffles: usize,
    pub layouts: Vec<usize>,
    pub insurance_offers: Vec<usize>,
    pub outcomes: Vec<(usize, HandOutcome, usize)>,
    pub flashes: Vec<(String, Notice)>,
    pub messages: Vec<String>,
    pub advice: Vec<Recommendation>,
    pub counter_visible: Option<bool>,
}

impl Table for RecordingTable {
    fn set_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }

    fn shuffle(&mut self) {
        self.shuffles += 1;
    }

    fn card_dealt(&mut self, card: &Card, seat: Seat, face_up: bool) {
        self.dealt.push((*card, seat, face_up));
    }

    fn hole_revealed(&mut self, _dealer: &DealerHand) {
        self.reveals += 1;
    }

    fn split_layout(&mut self, hands: &[Hand]) {
        self.layouts.push(hands.len());
    }

    fn offer_insurance(&mut self, cost: usize) {
        self.insurance_offers.push(cost);
    }

    fn hand_outcome(&mut self, index: usize, _hand: &Hand, outcome: HandOutcome, payout: usize) {
        self.outcomes.push((index, outcome, payout));
    }

    fn flash(&mut self, message: &str, notice: Notice) {
        self.flashes.push((message.to_owned(), notice));
    }

    fn table_message(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }

    fn book(&mut self, advice: &Recommendation) {
        self.advice.push(advice.clone());
    }

    fn counter_visible(&mut self, visible: bool) {
        self.counter_visible = Some(visible);
    }
}

pub type TestGame = Game<RecordingTable, MemoryStorage>;

/// A default table whose shoe deals `ranks` first.
pub fn stacked_game(ranks: &[Rank]) -> TestGame {
    stacked_game_with(GameOptions::default(), Settings::default(), ranks)
}

pub fn stacked_game_with(options: GameOptions, settings: Settings, ranks: &[Rank]) -> TestGame {
    init_logging();
    let mut game = Game::with_parts(
        options,
        7,
        RecordingTable::default(),
        MemoryStorage::with_settings(settings),
    );
    game.stack_shoe(cards(ranks))
        .expect("a new game is taking bets");
    game
}

pub fn with_bankroll(bankroll: usize) -> Settings {
    Settings {
        bankroll: Some(bankroll),
        speed: None,
    }
}

//! Game engine and state management.

use core::time::Duration;

use alloc::vec::Vec;
use tracing::{debug, info};

use crate::card::Card;
use crate::counter::HiLoCounter;
use crate::error::ReshuffleError;
use crate::hand::{DealerHand, Hand, HandId};
use crate::options::GameOptions;
use crate::result::{RoundResult, SessionStats};
use crate::shoe::Shoe;
use crate::storage::{MemoryStorage, Settings, Storage};
use crate::strategy::{Recommendation, recommend};
use crate::table::{NullTable, Seat, Table};

mod actions;
mod bet;
mod dealer;
mod insurance;
mod snapshot;
pub mod state;

pub use snapshot::{DealerView, TableSnapshot};
pub use state::{ActionOutcome, Pending, Phase, PlayerAction};

/// Pause after each card of the initial deal and after a split card.
const DEAL_PAUSE_MS: u64 = 250;
/// Pause after a shuffle or a hole-card reveal.
const REVEAL_PAUSE_MS: u64 = 400;
/// Pause before each dealer draw.
const DEALER_DRAW_PAUSE_MS: u64 = 600;
/// Pause around each settlement.
const SETTLE_PAUSE_MS: u64 = 300;
/// Pause before the table returns to betting.
const ROUND_END_PAUSE_MS: u64 = 2000;

/// A single-player blackjack table.
///
/// The game owns the shoe, the count, the bankroll and every hand. It is
/// driven by [`place_bet`](Self::place_bet), [`start_round`](Self::start_round),
/// [`resolve_insurance`](Self::resolve_insurance) and
/// [`handle_action`](Self::handle_action); each call runs until the next
/// decision is needed, reporting progress to the [`Table`] and leaving a
/// [`Pending`] marker behind.
pub struct Game<T = NullTable, S = MemoryStorage> {
    /// Game options.
    pub options: GameOptions,
    shoe: Shoe,
    counter: HiLoCounter,
    phase: Phase,
    pending: Option<Pending>,
    bankroll: usize,
    current_bet: usize,
    last_bet: usize,
    hands: Vec<Hand>,
    dealer_hand: DealerHand,
    current_hand: usize,
    next_hand_id: u32,
    stats: SessionStats,
    speed: f64,
    round: RoundResult,
    last_round: Option<RoundResult>,
    table: T,
    storage: S,
}

impl Game {
    /// Creates a game that renders nothing and persists in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_academy::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Betting);
    /// assert_eq!(game.bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_parts(options, seed, NullTable, MemoryStorage::default())
    }
}

impl<T: Table, S: Storage> Game<T, S> {
    /// Creates a game wired to a presentation layer and a settings store.
    ///
    /// The bankroll and speed are restored from `storage` when present; a
    /// missing or zero bankroll starts at [`GameOptions::starting_bankroll`].
    pub fn with_parts(options: GameOptions, seed: u64, table: T, storage: S) -> Self {
        let settings = storage.load().unwrap_or_else(|err| {
            debug!(error = %err, "settings unavailable, starting fresh");
            Settings::default()
        });
        let bankroll = settings
            .bankroll
            .filter(|&amount| amount > 0)
            .unwrap_or(options.starting_bankroll);
        let speed = settings.speed.filter(|&m| valid_speed(m)).unwrap_or(1.0);
        let shoe = Shoe::new(options.decks, options.penetration, seed);

        info!(bankroll, decks = options.decks, seed, "table opened");

        Self {
            options,
            shoe,
            counter: HiLoCounter::new(),
            phase: Phase::Betting,
            pending: None,
            bankroll,
            current_bet: 0,
            last_bet: 0,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            current_hand: 0,
            next_hand_id: 0,
            stats: SessionStats::default(),
            speed,
            round: RoundResult::default(),
            last_round: None,
            table,
            storage,
        }
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the decision the game is waiting on, if any.
    pub const fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Returns the bankroll, excluding money on the table.
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet for the next (or current) round.
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the bet of the most recent round.
    pub const fn last_bet(&self) -> usize {
        self.last_bet
    }

    /// Returns the player hands in table order.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Index of the hand being played.
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand
    }

    /// Returns the session statistics.
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Returns the animation speed multiplier.
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the card counter.
    pub const fn counter(&self) -> &HiLoCounter {
        &self.counter
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the settlement of the last finished round.
    pub const fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    /// Returns the presentation layer.
    pub const fn table(&self) -> &T {
        &self.table
    }

    /// Returns the presentation layer mutably.
    pub const fn table_mut(&mut self) -> &mut T {
        &mut self.table
    }

    /// Returns the settings store.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Strategy advice for the hand being played.
    ///
    /// Splitting and doubling are offered to the strategy only when the
    /// bankroll covers another full bet. Returns `None` outside the player
    /// turn.
    pub fn recommendation(&self) -> Option<Recommendation> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }
        let hand = self.hands.get(self.current_hand)?;
        let up_card = self.dealer_hand.up_card()?;
        let funded = self.bankroll >= hand.bet();
        Some(recommend(
            hand,
            up_card,
            hand.can_split() && funded,
            hand.can_double() && funded,
        ))
    }

    /// Shows or hides the count and returns the new visibility.
    pub fn toggle_counter(&mut self) -> bool {
        let visible = self.counter.toggle();
        self.table.counter_visible(visible);
        self.notify_counter();
        visible
    }

    /// Sets the animation speed multiplier and persists it.
    ///
    /// Negative or non-finite multipliers are ignored.
    pub fn set_speed(&mut self, multiplier: f64) {
        if !valid_speed(multiplier) {
            debug!(multiplier, "ignoring invalid speed");
            return;
        }
        self.speed = multiplier;
        self.save_settings();
    }

    /// Scales a nominal animation time by the speed multiplier.
    pub fn pace(&self, millis: u64) -> Duration {
        #[expect(
            clippy::cast_precision_loss,
            reason = "animation times are far below f64 precision limits"
        )]
        let seconds = millis as f64 / 1000.0 * self.speed;
        Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
    }

    /// Rebuilds and reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is taking bets.
    pub fn force_new_shoe(&mut self) -> Result<(), ReshuffleError> {
        if self.phase != Phase::Betting || self.pending.is_some() {
            return Err(ReshuffleError::InvalidState);
        }
        self.rebuild_shoe("New shoe. Shuffling...");
        self.table.table_message("Place your bet to begin");
        Ok(())
    }

    /// Replaces the shoe with cards dealt in exactly the given order.
    ///
    /// Used for drills and tests. The count is reset as for a new shoe.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is taking bets.
    pub fn stack_shoe(&mut self, draws: impl IntoIterator<Item = Card>) -> Result<(), ReshuffleError> {
        if self.phase != Phase::Betting || self.pending.is_some() {
            return Err(ReshuffleError::InvalidState);
        }
        self.shoe.stack(draws);
        self.counter.reset();
        self.notify_counter();
        self.table.shoe(self.shoe.view());
        Ok(())
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.table.set_phase(phase);
    }

    fn pause(&mut self, millis: u64) {
        let duration = self.pace(millis);
        self.table.pause(duration);
    }

    fn next_hand_id(&mut self) -> HandId {
        let id = HandId(self.next_hand_id);
        self.next_hand_id = self.next_hand_id.wrapping_add(1);
        id
    }

    fn rebuild_shoe(&mut self, message: &str) {
        self.table.table_message(message);
        self.table.shuffle();
        self.shoe.init();
        self.counter.reset();
        self.notify_counter();
        self.table.shoe(self.shoe.view());
        info!(decks = self.shoe.decks(), "shoe reshuffled");
    }

    /// Deals one face-up card to player hand `index` and counts it.
    fn deal_to_player(&mut self, index: usize) -> Card {
        let card = self.shoe.deal();
        let Some(hand) = self.hands.get_mut(index) else {
            return card;
        };
        hand.add_card(card);
        self.counter.process_card(&card);
        self.table.card_dealt(&card, Seat::Player(hand.id()), true);
        self.table.hand_value(index, hand);
        self.notify_counter();
        self.table.shoe(self.shoe.view());
        card
    }

    /// Deals one card to the dealer; only a face-up card is counted.
    fn deal_to_dealer(&mut self, face_up: bool) -> Card {
        let card = self.shoe.deal();
        self.dealer_hand.add_card(card);
        if face_up {
            self.counter.process_card(&card);
        }
        self.table.card_dealt(&card, Seat::Dealer, face_up);
        self.notify_counter();
        self.table.shoe(self.shoe.view());
        card
    }

    /// Turns the hole card over and counts it.
    fn reveal_hole(&mut self) {
        if self.dealer_hand.is_hole_revealed() {
            return;
        }
        self.dealer_hand.reveal_hole();
        if let Some(hole) = self.dealer_hand.hole_card().copied() {
            self.counter.process_card(&hole);
        }
        self.table.hole_revealed(&self.dealer_hand);
        self.notify_counter();
        self.table.dealer_value(&self.dealer_hand);
    }

    fn notify_counter(&mut self) {
        let view = self.counter.view(self.shoe.decks_remaining());
        self.table.counter(view);
    }

    fn notify_bet(&mut self) {
        self.table.bet(self.current_bet, self.bankroll);
    }

    /// Persists bankroll and speed; failures only degrade persistence.
    fn save_settings(&mut self) {
        let settings = Settings {
            bankroll: Some(self.bankroll),
            speed: Some(self.speed),
        };
        if let Err(err) = self.storage.store(&settings) {
            debug!(error = %err, "settings not saved");
        }
    }
}

fn valid_speed(multiplier: f64) -> bool {
    multiplier.is_finite() && multiplier >= 0.0
}

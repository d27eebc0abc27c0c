//! Presentation hooks.
//!
//! The game calls these after each state change, strictly one at a time.
//! Every method defaults to a no-op so a front end implements only what it
//! renders.

use core::time::Duration;

use crate::card::Card;
use crate::counter::CounterView;
use crate::game::Phase;
use crate::hand::{DealerHand, Hand, HandId};
use crate::result::{HandOutcome, SessionStats};
use crate::shoe::ShoeView;
use crate::strategy::Recommendation;

/// Where a dealt card lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// A player hand.
    Player(HandId),
    /// The dealer.
    Dealer,
}

/// Severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A rejected request.
    Warn,
    /// Informational.
    Info,
}

/// The presentation-layer collaborator.
#[expect(unused_variables, reason = "default hooks ignore their arguments")]
pub trait Table {
    /// The round moved to `phase`.
    fn set_phase(&mut self, phase: Phase) {}

    /// An animated step finished; hold the table for `duration`.
    ///
    /// Durations are already scaled by the speed setting.
    fn pause(&mut self, duration: Duration) {}

    /// The shoe is being rebuilt.
    fn shuffle(&mut self) {}

    /// Remove all cards and outcomes from the felt.
    fn clear_table(&mut self) {}

    /// A card was dealt to `seat`.
    fn card_dealt(&mut self, card: &Card, seat: Seat, face_up: bool) {}

    /// The dealer's hole card was turned over.
    fn hole_revealed(&mut self, dealer: &DealerHand) {}

    /// The player hands were re-laid out after a split.
    fn split_layout(&mut self, hands: &[Hand]) {}

    /// A player hand changed value.
    fn hand_value(&mut self, index: usize, hand: &Hand) {}

    /// The dealer hand changed value.
    fn dealer_value(&mut self, dealer: &DealerHand) {}

    /// Hand `index` of `count` is now being played.
    fn highlight_hand(&mut self, index: usize, count: usize) {}

    /// Waiting for an action on hand `index`.
    fn show_actions(&mut self, index: usize, hand: &Hand) {}

    /// No action is awaited any more.
    fn hide_actions(&mut self) {}

    /// Insurance is offered at `cost`; answer through
    /// [`Game::resolve_insurance`](crate::Game::resolve_insurance).
    fn offer_insurance(&mut self, cost: usize) {}

    /// Hand `index` was settled.
    fn hand_outcome(&mut self, index: usize, hand: &Hand, outcome: HandOutcome, payout: usize) {}

    /// The count changed. `None` while the counter is hidden.
    fn counter(&mut self, view: Option<CounterView>) {}

    /// The shoe metrics changed.
    fn shoe(&mut self, view: ShoeView) {}

    /// The bet or bankroll changed.
    fn bet(&mut self, bet: usize, bankroll: usize) {}

    /// The session statistics changed.
    fn stats(&mut self, stats: &SessionStats) {}

    /// Show a transient message.
    fn flash(&mut self, message: &str, notice: Notice) {}

    /// Show a message in the middle of the table.
    fn table_message(&mut self, message: &str) {}

    /// Show strategy advice.
    fn book(&mut self, advice: &Recommendation) {}

    /// The counter was shown or hidden.
    fn counter_visible(&mut self, visible: bool) {}
}

/// A table that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTable;

impl Table for NullTable {}

//! Read-only views of the table.

use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::counter::CounterView;
use crate::hand::Hand;
use crate::result::SessionStats;
use crate::shoe::ShoeView;
use crate::storage::Storage;
use crate::table::Table;

use super::{Game, Pending, Phase};

/// The dealer's side of the table as a player sees it.
#[derive(Debug, Clone, Serialize)]
pub struct DealerView {
    /// Face-up cards.
    pub cards: Vec<Card>,
    /// Whether a hole card is still face down.
    pub hole_hidden: bool,
    /// Value of the face-up cards.
    pub value: u8,
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Decision the game is waiting on.
    pub pending: Option<Pending>,
    /// Bankroll, excluding money on the table.
    pub bankroll: usize,
    /// Bet for the next (or current) round.
    pub current_bet: usize,
    /// Bet of the most recent round.
    pub last_bet: usize,
    /// Dealer side.
    pub dealer: DealerView,
    /// Player hands in table order.
    pub hands: Vec<Hand>,
    /// Index of the hand awaiting an action.
    pub active_hand: Option<usize>,
    /// Present only while the counter is shown.
    pub counter: Option<CounterView>,
    /// Shoe metrics.
    pub shoe: ShoeView,
    /// Session statistics.
    pub stats: SessionStats,
    /// Animation speed multiplier.
    pub speed: f64,
}

impl<T: Table, S: Storage> Game<T, S> {
    /// Captures the table without revealing the hole card.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_academy::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let snapshot = game.snapshot();
    /// assert!(snapshot.hands.is_empty());
    /// assert!(snapshot.counter.is_none());
    /// ```
    pub fn snapshot(&self) -> TableSnapshot {
        let visible = self.dealer_hand.visible_cards();
        let active_hand = match self.pending {
            Some(Pending::Action { hand_index, .. }) => Some(hand_index),
            _ => None,
        };

        TableSnapshot {
            phase: self.phase,
            pending: self.pending,
            bankroll: self.bankroll,
            current_bet: self.current_bet,
            last_bet: self.last_bet,
            dealer: DealerView {
                cards: visible.to_vec(),
                hole_hidden: visible.len() < self.dealer_hand.len(),
                value: self.dealer_hand.visible_value(),
            },
            hands: self.hands.clone(),
            active_hand,
            counter: self.counter.view(self.shoe.decks_remaining()),
            shoe: self.shoe.view(),
            stats: self.stats,
            speed: self.speed,
        }
    }
}

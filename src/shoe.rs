//! The multi-deck shoe.

extern crate alloc;

use alloc::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Shoe metrics surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShoeView {
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// Cards dealt since the last shuffle (the burn card excluded).
    pub cards_dealt: usize,
    /// Decks left, never below 0.5.
    pub decks_remaining: f64,
    /// Share of the shoe dealt, in whole percent.
    pub penetration_percent: usize,
}

/// A shuffled multi-deck shoe.
///
/// After [`Shoe::init`] one card is burned, so
/// `cards_remaining() + cards_dealt() == decks * 52 - 1` until the next
/// shuffle.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u8,
    penetration: f64,
    cards: VecDeque<Card>,
    dealt: usize,
    next_id: u32,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates, shuffles and burns a shoe of `decks` decks.
    ///
    /// A deck count of zero is raised to one.
    #[must_use]
    pub fn new(decks: u8, penetration: f64, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut shoe = Self {
            decks,
            penetration,
            cards: VecDeque::with_capacity(decks as usize * DECK_SIZE),
            dealt: 0,
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.init();
        shoe
    }

    /// Creates a shoe that deals exactly `draws`, in order.
    ///
    /// No card is burned. Once the draws run out the shoe rebuilds itself
    /// from `decks` full decks (at least one) like any other shoe.
    #[must_use]
    pub fn from_draws(
        decks: u8,
        penetration: f64,
        seed: u64,
        draws: impl IntoIterator<Item = Card>,
    ) -> Self {
        let mut shoe = Self {
            decks: decks.max(1),
            penetration,
            cards: VecDeque::new(),
            dealt: 0,
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.stack(draws);
        shoe
    }

    /// Replaces the remaining cards with `draws`, dealt in order, and resets
    /// the dealt counter.
    pub fn stack(&mut self, draws: impl IntoIterator<Item = Card>) {
        self.cards.clear();
        for card in draws {
            let id = self.stamp();
            self.cards.push_back(card.with_id(id));
        }
        self.dealt = 0;
    }

    fn stamp(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Rebuilds the full shoe, shuffles it, burns one card and resets the
    /// dealt counter.
    pub fn init(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    let id = self.stamp();
                    self.cards.push_back(Card::new(suit, rank).with_id(id));
                }
            }
        }

        self.shuffle();

        let burned = self.cards.pop_front();
        self.dealt = 0;
        debug!(
            decks = self.decks,
            cards = self.cards.len(),
            burned = ?burned,
            "shoe rebuilt"
        );
    }

    /// Fisher-Yates: walk down from the last index, swapping each slot with a
    /// uniformly chosen slot at or below it.
    fn shuffle(&mut self) {
        let cards = self.cards.make_contiguous();
        for i in (1..cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            cards.swap(i, j);
        }
    }

    /// Deals the front card.
    ///
    /// An empty shoe is rebuilt first. Counting is left to the caller since
    /// only the caller knows whether the card lands face up.
    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop_front() {
                self.dealt += 1;
                trace!(card = %card, dealt = self.dealt, "card dealt");
                return card;
            }
            // At least one deck, so a rebuilt shoe always has cards.
            self.init();
        }
    }

    /// Number of cards that may be dealt before a reshuffle is due.
    #[must_use]
    pub fn reshuffle_mark(&self) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let total = self.total_cards() as f64;
        (total * self.penetration) as usize
    }

    /// Returns whether penetration has reached the reshuffle mark.
    ///
    /// Only consulted at the start of a round.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.dealt >= self.reshuffle_mark()
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Cards in a full shoe before the burn.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.dealt
    }

    /// Decks remaining, floored at half a deck.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let decks = self.cards.len() as f64 / DECK_SIZE as f64;
        decks.max(0.5)
    }

    /// Share of the shoe dealt, rounded half up to a whole percent.
    #[must_use]
    pub fn penetration_percent(&self) -> usize {
        let total = self.total_cards();
        if total == 0 {
            return 0;
        }
        (self.dealt * 100 + total / 2) / total
    }

    /// Returns the metrics shown next to the shoe.
    #[must_use]
    pub fn view(&self) -> ShoeView {
        ShoeView {
            cards_remaining: self.cards_remaining(),
            cards_dealt: self.cards_dealt(),
            decks_remaining: self.decks_remaining(),
            penetration_percent: self.penetration_percent(),
        }
    }
}

//! Player and dealer hand representations.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::result::HandOutcome;

/// Deepest split lineage a hand may reach.
pub const MAX_SPLIT_DEPTH: u8 = 3;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Stable identity of a player hand, including hands created by splits.
///
/// The presentation layer keys its render targets by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HandId(pub u32);

/// A player's hand.
#[derive(Debug, Clone, Serialize)]
pub struct Hand {
    id: HandId,
    cards: Vec<Card>,
    bet: usize,
    from_split: bool,
    split_depth: u8,
    doubled: bool,
    stood: bool,
    insurance_bet: usize,
    outcome: Option<HandOutcome>,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(id: HandId, bet: usize) -> Self {
        Self {
            id,
            cards: Vec::new(),
            bet,
            from_split: false,
            split_depth: 0,
            doubled: false,
            stood: false,
            insurance_bet: 0,
            outcome: None,
        }
    }

    /// Creates the sibling hand produced by a split, holding the moved card.
    #[must_use]
    pub fn from_split(id: HandId, card: Card, bet: usize, split_depth: u8) -> Self {
        Self {
            cards: alloc::vec![card],
            from_split: true,
            split_depth,
            ..Self::new(id, bet)
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the hand id.
    #[must_use]
    pub const fn id(&self) -> HandId {
        self.id
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_split_hand(&self) -> bool {
        self.from_split
    }

    /// Number of splits in this hand's lineage.
    #[must_use]
    pub const fn split_depth(&self) -> u8 {
        self.split_depth
    }

    /// Returns whether the hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the player stood on this hand.
    #[must_use]
    pub const fn is_stood(&self) -> bool {
        self.stood
    }

    /// Insurance taken against this hand, 0 if none.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Settled outcome, once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Natural 21 on the first two cards of a hand that was never split.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > 21
    }

    fn is_split_aces(&self) -> bool {
        self.from_split
            && self.cards.len() == 2
            && self.cards.first().is_some_and(|card| card.rank.is_ace())
    }

    /// Returns whether the hand can be split.
    ///
    /// Pairs of equal value split until [`MAX_SPLIT_DEPTH`]; Aces split once.
    #[must_use]
    pub fn can_split(&self) -> bool {
        let [first, second] = self.cards.as_slice() else {
            return false;
        };
        if self.split_depth >= MAX_SPLIT_DEPTH {
            return false;
        }
        if self.from_split && first.rank.is_ace() {
            return false;
        }
        first.value() == second.value()
    }

    /// Returns whether the hand can be doubled.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2 && !self.doubled
    }

    /// Returns whether the hand may draw another card.
    ///
    /// Split Aces take exactly one card each.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        if self.value() >= 21 {
            return false;
        }
        !self.is_split_aces()
    }

    /// True when the hand needs no further player decision.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.stood || self.doubled || self.value() >= 21 || self.is_split_aces()
    }

    /// Display label for the hand total.
    #[must_use]
    pub fn describe(&self) -> String {
        let value = self.value();
        if self.is_blackjack() {
            "BLACKJACK".to_string()
        } else if value > 21 {
            format!("BUST ({value})")
        } else if self.is_soft() && value < 21 {
            format!("{value} (soft)")
        } else {
            value.to_string()
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) const fn stand(&mut self) {
        self.stood = true;
    }

    /// Adds `extra` to the stake and marks the hand doubled.
    pub(crate) const fn double(&mut self, extra: usize) {
        self.bet += extra;
        self.doubled = true;
    }

    pub(crate) const fn set_insurance(&mut self, amount: usize) {
        self.insurance_bet = amount;
    }

    pub(crate) const fn settle(&mut self, outcome: HandOutcome) {
        self.outcome = Some(outcome);
    }

    /// Moves the second card out for a split and deepens this hand's lineage.
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() != 2 {
            return None;
        }
        let card = self.cards.pop()?;
        self.from_split = true;
        self.split_depth += 1;
        Some(card)
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards a player can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            &self.cards[..self.cards.len().min(1)]
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-down card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate_cards(self.visible_cards()).0
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

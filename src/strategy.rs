//! Basic strategy for eight decks, dealer standing on soft 17.
//!
//! Columns are indexed by the dealer upcard: 2-9 map to 0-7, ten-valued
//! cards to 8 and the Ace to 9. Pair rows use the same mapping for the
//! paired rank.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use serde::Serialize;

use crate::card::{Card, Rank};
use crate::hand::Hand;

/// A cell of a strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdviceCode {
    /// Hit.
    Hit,
    /// Stand.
    Stand,
    /// Double if allowed, otherwise hit.
    Double,
    /// Double if allowed, otherwise stand.
    DoubleOrStand,
    /// Split.
    Split,
    /// Surrender if allowed, otherwise hit.
    Surrender,
}

/// A playable move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Take a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet and take one card.
    Double,
    /// Split the pair.
    Split,
}

impl Move {
    /// Name of the action button this move maps to.
    #[must_use]
    pub const fn button(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        }
    }
}

use AdviceCode::{
    Double as D, DoubleOrStand as Ds, Hit as H, Split as P, Stand as S, Surrender as R,
};

/// Hard totals 5 through 21.
const HARD: [[AdviceCode; 10]; 17] = [
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, H], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, R, H], // 15
    [S, S, S, S, S, H, H, R, R, R], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Soft totals 13 (A,2) through 20 (A,9).
const SOFT: [[AdviceCode; 10]; 8] = [
    [H, H, H, D, D, H, H, H, H, H],      // 13
    [H, H, H, D, D, H, H, H, H, H],      // 14
    [H, H, D, D, D, H, H, H, H, H],      // 15
    [H, H, D, D, D, H, H, H, H, H],      // 16
    [H, D, D, D, D, H, H, H, H, H],      // 17
    [Ds, Ds, Ds, Ds, Ds, S, S, H, H, H], // 18
    [S, S, S, S, S, S, S, S, S, S],      // 19
    [S, S, S, S, S, S, S, S, S, S],      // 20
];

/// Pairs, rows in column order. Fives play as hard 10.
const PAIRS: [Option<[AdviceCode; 10]>; 10] = [
    Some([P, P, P, P, P, P, H, H, H, H]), // 2,2
    Some([P, P, P, P, P, P, H, H, H, H]), // 3,3
    Some([H, H, H, P, P, H, H, H, H, H]), // 4,4
    None,                                 // 5,5
    Some([P, P, P, P, P, H, H, H, H, H]), // 6,6
    Some([P, P, P, P, P, P, H, H, H, H]), // 7,7
    Some([P, P, P, P, P, P, P, P, P, P]), // 8,8
    Some([P, P, P, P, P, S, P, P, S, S]), // 9,9
    Some([S, S, S, S, S, S, S, S, S, S]), // T,T
    Some([P, P, P, P, P, P, P, P, P, P]), // A,A
];

/// Table column for a rank: 2-9 → 0-7, tens → 8, Ace → 9.
#[must_use]
pub const fn column(rank: Rank) -> usize {
    match rank {
        Rank::Ace => 9,
        other => other.value() as usize - 2,
    }
}

/// Looks up the hard-total table, clamping the total to 5..=21.
#[must_use]
pub fn hard_code(total: u8, dealer: Rank) -> AdviceCode {
    let row = total.clamp(5, 21) as usize - 5;
    HARD[row][column(dealer)]
}

/// Looks up the soft-total table. `None` outside 13..=20.
#[must_use]
pub fn soft_code(total: u8, dealer: Rank) -> Option<AdviceCode> {
    if !(13..=20).contains(&total) {
        return None;
    }
    Some(SOFT[total as usize - 13][column(dealer)])
}

/// Looks up the pair table. `None` for fives, which play as a hard total.
#[must_use]
pub fn pair_code(paired: Rank, dealer: Rank) -> Option<AdviceCode> {
    PAIRS[column(paired)].map(|row| row[column(dealer)])
}

/// Strategy advice for one decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The move to play.
    pub action: Move,
    /// Short label, e.g. `DOUBLE DOWN`.
    pub label: &'static str,
    /// Sentence explaining the advice.
    pub explanation: String,
    /// Action button to highlight.
    pub highlight_button: &'static str,
    /// The table says surrender; `action` holds the fallback.
    pub is_surrender: bool,
}

const fn action_label(code: AdviceCode) -> &'static str {
    match code {
        AdviceCode::Hit => "HIT",
        AdviceCode::Stand => "STAND",
        AdviceCode::Double | AdviceCode::DoubleOrStand => "DOUBLE DOWN",
        AdviceCode::Split => "SPLIT",
        AdviceCode::Surrender => "SURRENDER",
    }
}

const fn action_detail(code: AdviceCode) -> &'static str {
    match code {
        AdviceCode::Hit => "Your total is too low to stand safely. Take another card.",
        AdviceCode::Stand => "Protect this total and let the dealer risk busting.",
        AdviceCode::Double | AdviceCode::DoubleOrStand => {
            "Strong position. Double your bet and receive one more card."
        }
        AdviceCode::Split => "Splitting creates two stronger hands here.",
        AdviceCode::Surrender => {
            "Surrender half your bet to cut your losses (hit if surrender unavailable)."
        }
    }
}

/// Recommends a move for `hand` against `dealer_up`.
///
/// `can_split` and `can_double` describe what the table allows right now,
/// funds included. Pure: nothing outside the arguments is consulted, so the
/// advice must be re-queried after every card.
#[must_use]
pub fn recommend(hand: &Hand, dealer_up: &Card, can_split: bool, can_double: bool) -> Recommendation {
    let value = hand.value();
    let mut looked_up = None;

    if can_split {
        if let [first, second] = hand.cards() {
            if first.value() == second.value() {
                looked_up = pair_code(first.rank, dealer_up.rank)
                    .map(|code| (code, format!("Pair of {}s", first.rank.name())));
            }
        }
    }

    if looked_up.is_none() && hand.is_soft() {
        looked_up = soft_code(value, dealer_up.rank)
            .map(|code| (code, format!("Soft {value} (Ace + {})", value - 11)));
    }

    let (code, hand_desc) = looked_up
        .unwrap_or_else(|| (hard_code(value, dealer_up.rank), format!("Hard {value}")));

    let (action, is_surrender) = match code {
        AdviceCode::Hit | AdviceCode::Surrender => (Move::Hit, code == AdviceCode::Surrender),
        AdviceCode::Stand => (Move::Stand, false),
        AdviceCode::Double if can_double => (Move::Double, false),
        AdviceCode::Double => (Move::Hit, false),
        AdviceCode::DoubleOrStand if can_double => (Move::Double, false),
        AdviceCode::DoubleOrStand => (Move::Stand, false),
        AdviceCode::Split => (Move::Split, false),
    };

    // Labels follow the resolved move, except that surrender keeps its name.
    let shown = if is_surrender {
        AdviceCode::Surrender
    } else {
        match action {
            Move::Hit => AdviceCode::Hit,
            Move::Stand => AdviceCode::Stand,
            Move::Double => AdviceCode::Double,
            Move::Split => AdviceCode::Split,
        }
    };
    let label = action_label(shown);
    let mut explanation = format!(
        "{hand_desc} vs Dealer {}: {label}. {}",
        dealer_up.rank.name(),
        action_detail(shown)
    );
    if is_surrender {
        explanation.push_str(" (Hit if surrender is unavailable.)");
    }

    Recommendation {
        action,
        label,
        explanation,
        highlight_button: action.button(),
        is_surrender,
    }
}

//! Game state types.

use serde::Serialize;

use crate::card::Card;
use crate::hand::HandId;
use crate::strategy::Recommendation;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards and settling insurance.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are being settled.
    RoundEnd,
}

/// A decision the game is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Pending {
    /// Take or decline insurance at `cost`.
    Insurance {
        /// Price of the insurance bet.
        cost: usize,
    },
    /// Choose an action for a player hand.
    Action {
        /// Position of the hand at the table.
        hand_index: usize,
        /// Identity of the hand.
        hand_id: HandId,
    },
}

/// A player intent during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Take a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Ask for strategy advice without acting.
    Book,
}

/// What a player action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A card was dealt to the hand.
    Dealt(Card),
    /// The hand stood.
    Stood,
    /// The stake grew by `extra` and `card` was dealt.
    Doubled {
        /// The single card dealt.
        card: Card,
        /// Amount added to the stake.
        extra: usize,
    },
    /// The pair was split; `new_hand` sits right after the current hand.
    Split {
        /// The sibling hand.
        new_hand: HandId,
    },
    /// Advice for the current hand. Nothing changed.
    Advice(Recommendation),
}

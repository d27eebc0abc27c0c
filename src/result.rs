//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use serde::Serialize;

use crate::hand::HandId;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandResult {
    /// The hand that was settled.
    pub hand_id: HandId,
    /// Position of the hand at the table (splits insert after their parent).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand, doubling included.
    pub bet: usize,
    /// Amount returned to the bankroll (stake included).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
}

/// Cumulative session statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Rounds started.
    pub hands_played: u32,
    /// Hands won, blackjacks included.
    pub hands_won: u32,
    /// Hands lost.
    pub hands_lost: u32,
    /// Hands pushed.
    pub hands_pushed: u32,
    /// Blackjacks paid.
    pub blackjacks: u32,
}

/// Result of the entire round.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoundResult {
    /// Results for each player hand, in table order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Insurance bet amount (0 if no insurance taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 if dealer didn't have blackjack or no insurance taken).
    pub insurance_payout: usize,
    /// Whether the bankroll fell below the minimum bet and was reset.
    pub bankroll_reset: bool,
}

impl RoundResult {
    /// Total returned to the bankroll by hands and insurance.
    #[must_use]
    pub fn total_payout(&self) -> usize {
        self.hands.iter().map(|hand| hand.payout).sum::<usize>() + self.insurance_payout
    }

    /// Net result (positive = profit, negative = loss).
    #[must_use]
    pub fn net(&self) -> isize {
        let staked = self.hands.iter().map(|hand| hand.bet).sum::<usize>() + self.insurance_bet;
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = self.total_payout() as isize - staked as isize;
        net
    }
}

use core::mem;

use tracing::{debug, info};

use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult};
use crate::storage::Storage;
use crate::table::{Notice, Table};

use super::{
    DEALER_DRAW_PAUSE_MS, Game, Phase, REVEAL_PAUSE_MS, ROUND_END_PAUSE_MS, SETTLE_PAUSE_MS,
};

/// The dealer draws below this total.
const DEALER_STANDS_ON: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl<T: Table, S: Storage> Game<T, S> {
    /// Reveals the hole card and draws to 17 unless every player hand busted.
    pub(super) fn dealer_turn(&mut self) {
        self.set_phase(Phase::DealerTurn);
        self.table.hide_actions();

        let all_busted = self.hands.iter().all(|hand| hand.is_busted());

        self.reveal_hole();
        self.pause(REVEAL_PAUSE_MS);

        if !all_busted {
            while self.dealer_hand.value() < DEALER_STANDS_ON {
                self.pause(DEALER_DRAW_PAUSE_MS);
                self.deal_to_dealer(true);
                self.table.dealer_value(&self.dealer_hand);
            }
        }

        self.resolve_all_hands();
    }

    fn resolve_all_hands(&mut self) {
        self.set_phase(Phase::RoundEnd);
        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        self.pause(SETTLE_PAUSE_MS);

        for index in 0..self.hands.len() {
            let Some(hand) = self.hands.get(index) else {
                break;
            };
            let value = hand.value();
            let outcome = if hand.is_busted() {
                HandOutcome::Lose
            } else if hand.is_blackjack() {
                HandOutcome::Blackjack
            } else if dealer_bust || value > dealer_value {
                HandOutcome::Win
            } else if value < dealer_value {
                HandOutcome::Lose
            } else {
                HandOutcome::Push
            };

            self.settle_hand(index, outcome);
            self.pause(SETTLE_PAUSE_MS);
        }

        self.finish_round();
    }

    /// Pays out hand `index`, records the result and persists the bankroll.
    pub(super) fn settle_hand(&mut self, index: usize, outcome: HandOutcome) {
        let Some(hand) = self.hands.get_mut(index) else {
            return;
        };
        hand.settle(outcome);
        let bet = hand.bet();

        #[expect(
            clippy::cast_precision_loss,
            reason = "bet values are small enough for f64"
        )]
        let payout = match outcome {
            HandOutcome::Blackjack => {
                self.stats.hands_won += 1;
                self.stats.blackjacks += 1;
                bet + round_amount(
                    bet as f64 * self.options.blackjack_pays,
                    self.options.rounding_blackjack,
                )
            }
            HandOutcome::Win => {
                self.stats.hands_won += 1;
                bet * 2
            }
            HandOutcome::Push => {
                self.stats.hands_pushed += 1;
                bet
            }
            HandOutcome::Lose => {
                self.stats.hands_lost += 1;
                0
            }
        };
        self.bankroll += payout;

        debug!(hand = index, ?outcome, bet, payout, "hand settled");

        self.round.hands.push(HandResult {
            hand_id: hand.id(),
            hand_index: index,
            outcome,
            bet,
            payout,
            player_value: hand.value(),
        });

        self.table.hand_outcome(index, hand, outcome, payout);
        self.notify_bet();
        self.table.stats(&self.stats);
        self.save_settings();
    }

    /// Returns the table to betting, resetting an exhausted bankroll and
    /// carrying the last bet forward.
    pub(super) fn finish_round(&mut self) {
        self.pause(ROUND_END_PAUSE_MS);
        self.pending = None;
        self.set_phase(Phase::Betting);
        self.current_bet = 0;

        self.round.dealer_value = self.dealer_hand.value();
        self.round.dealer_bust = self.dealer_hand.is_bust();
        self.round.dealer_blackjack = self.dealer_hand.is_blackjack();

        if self.bankroll < self.options.min_bet {
            let starting = self.options.starting_bankroll;
            self.table.flash(
                &alloc::format!("Bankroll reset to ${}. Good luck!", thousands(starting)),
                Notice::Info,
            );
            info!(bankroll = self.bankroll, reset_to = starting, "bankroll reset");
            self.bankroll = starting;
            self.round.bankroll_reset = true;
            self.save_settings();
        }

        if self.last_bet > 0 {
            self.current_bet = self
                .last_bet
                .min(self.bankroll)
                .min(self.options.max_bet);
        }

        let round = mem::take(&mut self.round);
        info!(
            hands = round.hands.len(),
            net = round.net(),
            bankroll = self.bankroll,
            dealer = round.dealer_value,
            "round finished"
        );
        self.last_round = Some(round);

        self.notify_bet();
        self.table
            .table_message("Place your bet to begin the next round");
    }
}

/// Formats `amount` with comma thousands separators.
fn thousands(amount: usize) -> alloc::string::String {
    let digits = alloc::format!("{amount}");
    let mut out = alloc::string::String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

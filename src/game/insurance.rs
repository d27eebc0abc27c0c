use tracing::debug;

use crate::error::InsuranceError;
use crate::result::HandOutcome;
use crate::storage::Storage;
use crate::table::Table;

use super::{Game, Pending, REVEAL_PAUSE_MS};

impl<T: Table, S: Storage> Game<T, S> {
    /// Returns the price of the pending insurance offer, if any.
    pub const fn insurance_offer(&self) -> Option<usize> {
        match self.pending {
            Some(Pending::Insurance { cost }) => Some(cost),
            _ => None,
        }
    }

    /// Takes or declines the pending insurance offer and continues the round.
    ///
    /// Taking insurance debits the cost at once. It pays three times the
    /// cost when the dealer holds a blackjack.
    ///
    /// # Errors
    ///
    /// Returns an error if no insurance offer is pending.
    pub fn resolve_insurance(&mut self, take: bool) -> Result<(), InsuranceError> {
        let Some(cost) = self.insurance_offer() else {
            debug!(take, "insurance answered without an offer");
            return Err(InsuranceError::NotOffered);
        };
        self.pending = None;

        if take {
            self.bankroll -= cost;
            if let Some(hand) = self.hands.first_mut() {
                hand.set_insurance(cost);
            }
            self.round.insurance_bet = cost;
            self.notify_bet();
            debug!(cost, "insurance taken");
        }

        self.check_naturals();
        Ok(())
    }

    /// Settles the round early on a natural, otherwise hands control to the
    /// player.
    pub(super) fn check_naturals(&mut self) {
        let dealer_blackjack = self.dealer_hand.is_blackjack();
        let player_blackjack = self.hands.first().is_some_and(|hand| hand.is_blackjack());

        if dealer_blackjack {
            self.reveal_hole();
            self.pause(REVEAL_PAUSE_MS);

            if self.round.insurance_bet > 0 {
                let payout = self.round.insurance_bet * 3;
                self.bankroll += payout;
                self.round.insurance_payout = payout;
                self.notify_bet();
            }

            let outcome = if player_blackjack {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            };
            self.settle_hand(0, outcome);
            self.finish_round();
            return;
        }

        if player_blackjack {
            self.reveal_hole();
            self.pause(REVEAL_PAUSE_MS);
            self.settle_hand(0, HandOutcome::Blackjack);
            self.finish_round();
            return;
        }

        self.begin_player_turn();
    }
}

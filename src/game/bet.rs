use alloc::format;
use alloc::vec;

use tracing::{debug, info};

use crate::error::{BetError, DealError};
use crate::hand::Hand;
use crate::result::RoundResult;
use crate::storage::Storage;
use crate::table::{Notice, Table};

use super::{DEAL_PAUSE_MS, Game, Pending, Phase, REVEAL_PAUSE_MS};

impl<T: Table, S: Storage> Game<T, S> {
    fn ensure_betting(&self) -> bool {
        self.phase == Phase::Betting && self.pending.is_none()
    }

    /// Adds `amount` to the bet for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the amount is zero,
    /// the total would exceed the table maximum, or the bankroll cannot cover
    /// it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.ensure_betting() {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let max = self.options.max_bet;
        if self.current_bet + amount > max {
            self.table
                .flash(&format!("Maximum bet is ${max}"), Notice::Warn);
            debug!(amount, current_bet = self.current_bet, "bet above maximum");
            return Err(BetError::AboveMaximum { max });
        }
        if amount > self.bankroll.saturating_sub(self.current_bet) {
            self.table.flash("Insufficient funds!", Notice::Warn);
            debug!(amount, bankroll = self.bankroll, "bet exceeds bankroll");
            return Err(BetError::InsufficientFunds);
        }

        self.current_bet += amount;
        self.notify_bet();
        Ok(())
    }

    /// Takes the bet back.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets.
    pub fn clear_bet(&mut self) -> Result<(), BetError> {
        if !self.ensure_betting() {
            return Err(BetError::InvalidState);
        }
        self.current_bet = 0;
        self.notify_bet();
        Ok(())
    }

    /// Restores the previous round's bet, capped at the bankroll and the
    /// table maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets or no round has been
    /// played yet.
    pub fn rebet(&mut self) -> Result<(), BetError> {
        if !self.ensure_betting() {
            return Err(BetError::InvalidState);
        }
        if self.last_bet == 0 {
            return Err(BetError::NoPreviousBet);
        }
        self.current_bet = self
            .last_bet
            .min(self.bankroll)
            .min(self.options.max_bet);
        self.notify_bet();
        Ok(())
    }

    /// Starts a round with the current bet.
    ///
    /// Deals the opening cards and runs until the first decision: an
    /// insurance offer, a player action, or the end of the round when either
    /// side holds a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the bet is below the
    /// table minimum, or the bankroll no longer covers it.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if !self.ensure_betting() {
            return Err(DealError::InvalidState);
        }
        let min = self.options.min_bet;
        if self.current_bet < min {
            self.table
                .flash(&format!("Minimum bet is ${min}"), Notice::Warn);
            debug!(bet = self.current_bet, "bet below minimum");
            return Err(DealError::BelowMinimum { min });
        }
        if self.current_bet > self.bankroll {
            self.table.flash("Insufficient funds!", Notice::Warn);
            debug!(bet = self.current_bet, bankroll = self.bankroll, "bet exceeds bankroll");
            return Err(DealError::InsufficientFunds);
        }

        self.set_phase(Phase::Dealing);

        if self.shoe.needs_reshuffle() {
            self.rebuild_shoe("Shuffling the shoe...");
            self.pause(REVEAL_PAUSE_MS);
        }

        let bet = self.current_bet;
        self.last_bet = bet;
        self.bankroll -= bet;
        let id = self.next_hand_id();
        self.hands = vec![Hand::new(id, bet)];
        self.dealer_hand.clear();
        self.current_hand = 0;
        self.round = RoundResult::default();
        self.stats.hands_played += 1;

        info!(
            bet,
            bankroll = self.bankroll,
            hands_played = self.stats.hands_played,
            "round started"
        );

        self.table.clear_table();
        self.notify_bet();
        self.table.stats(&self.stats);

        self.deal_to_player(0);
        self.pause(DEAL_PAUSE_MS);
        self.deal_to_dealer(true);
        self.pause(DEAL_PAUSE_MS);
        self.deal_to_player(0);
        self.pause(DEAL_PAUSE_MS);
        self.deal_to_dealer(false);

        let ace_up = self
            .dealer_hand
            .up_card()
            .is_some_and(|card| card.rank.is_ace());
        if ace_up && self.options.insurance {
            let cost = bet / 2;
            if cost > 0 && cost <= self.bankroll {
                self.pending = Some(Pending::Insurance { cost });
                self.table.offer_insurance(cost);
                return Ok(());
            }
        }

        self.check_naturals();
        Ok(())
    }
}

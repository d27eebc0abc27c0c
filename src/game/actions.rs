use tracing::debug;

use crate::error::ActionError;
use crate::hand::Hand;
use crate::storage::Storage;
use crate::table::Table;

use super::{ActionOutcome, DEAL_PAUSE_MS, Game, Pending, Phase, PlayerAction};

/// Pause after the second card of a split.
const SPLIT_PAUSE_MS: u64 = 200;

impl<T: Table, S: Storage> Game<T, S> {
    /// Returns the hand awaiting an action.
    fn active_hand(&self) -> Result<(usize, &Hand), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        let Some(Pending::Action { hand_index, .. }) = self.pending else {
            return Err(ActionError::InvalidState);
        };
        let hand = self
            .hands
            .get(hand_index)
            .ok_or(ActionError::InvalidState)?;
        Ok((hand_index, hand))
    }

    /// Applies a player action to the hand being played.
    ///
    /// Runs until the next decision is needed. When the last hand is done the
    /// dealer plays and the round is settled before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting an action or the hand is not
    /// eligible for `action`. A rejected action changes nothing.
    pub fn handle_action(&mut self, action: PlayerAction) -> Result<ActionOutcome, ActionError> {
        let result = self.apply_action(action);
        if let Err(err) = &result {
            debug!(?action, error = %err, "action rejected");
        }
        result
    }

    fn apply_action(&mut self, action: PlayerAction) -> Result<ActionOutcome, ActionError> {
        let (index, hand) = self.active_hand()?;
        let bet = hand.bet();

        match action {
            PlayerAction::Book => {
                let advice = self.recommendation().ok_or(ActionError::InvalidState)?;
                self.table.book(&advice);
                Ok(ActionOutcome::Advice(advice))
            }
            PlayerAction::Hit => {
                if !hand.can_hit() {
                    return Err(ActionError::CannotHit);
                }
                let card = self.deal_to_player(index);
                self.advance();
                Ok(ActionOutcome::Dealt(card))
            }
            PlayerAction::Stand => {
                if let Some(hand) = self.hands.get_mut(index) {
                    hand.stand();
                }
                self.table.hide_actions();
                self.advance();
                Ok(ActionOutcome::Stood)
            }
            PlayerAction::Double => {
                if !hand.can_double() {
                    return Err(ActionError::CannotDouble);
                }
                if self.bankroll < 1 {
                    return Err(ActionError::InsufficientFunds);
                }
                let extra = bet.min(self.bankroll);
                self.bankroll -= extra;
                if let Some(hand) = self.hands.get_mut(index) {
                    hand.double(extra);
                }
                self.notify_bet();
                let card = self.deal_to_player(index);
                self.table.hide_actions();
                self.advance();
                Ok(ActionOutcome::Doubled { card, extra })
            }
            PlayerAction::Split => {
                if !hand.can_split() {
                    return Err(ActionError::CannotSplit);
                }
                if self.bankroll < bet {
                    return Err(ActionError::InsufficientFunds);
                }
                self.split_hand(index)
            }
        }
    }

    /// Moves the second card of hand `index` into a new hand right after it
    /// and deals one card to each.
    fn split_hand(&mut self, index: usize) -> Result<ActionOutcome, ActionError> {
        let hand = self.hands.get_mut(index).ok_or(ActionError::InvalidState)?;
        let bet = hand.bet();
        let card = hand.take_split_card().ok_or(ActionError::CannotSplit)?;
        let depth = hand.split_depth();

        self.bankroll -= bet;
        self.notify_bet();
        self.table.hide_actions();

        let id = self.next_hand_id();
        self.hands.insert(index + 1, Hand::from_split(id, card, bet, depth));
        self.table.split_layout(&self.hands);
        debug!(hand = index, depth, hands = self.hands.len(), "hand split");

        self.deal_to_player(index);
        self.pause(DEAL_PAUSE_MS);
        self.deal_to_player(index + 1);
        self.pause(SPLIT_PAUSE_MS);

        self.advance();
        Ok(ActionOutcome::Split { new_hand: id })
    }

    pub(super) fn begin_player_turn(&mut self) {
        self.set_phase(Phase::PlayerTurn);
        self.current_hand = 0;
        self.advance();
    }

    /// Moves to the first unfinished hand at or after the current one, or on
    /// to the dealer once every hand is done.
    ///
    /// Hands inserted by a split sit right after their parent, so they are
    /// reached in order.
    fn advance(&mut self) {
        while let Some(hand) = self.hands.get(self.current_hand) {
            if !hand.is_done() {
                let hand_index = self.current_hand;
                self.pending = Some(Pending::Action {
                    hand_index,
                    hand_id: hand.id(),
                });
                self.table.highlight_hand(hand_index, self.hands.len());
                self.table.show_actions(hand_index, hand);
                return;
            }
            self.current_hand += 1;
        }

        self.pending = None;
        self.table.hide_actions();
        self.dealer_turn();
    }
}

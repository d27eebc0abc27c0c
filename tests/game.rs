//! Round flow integration tests.

mod common;

use std::time::Duration;

use blackjack_academy::{
    ActionError, ActionOutcome, BetError, DealError, Game, GameOptions, HandOutcome,
    InsuranceError, MemoryStorage, Move, Notice, NullTable, Pending, Phase, PlayerAction, Rank,
    MAX_SPLIT_DEPTH, ReshuffleError, Seat, Settings, Storage, StorageError,
};
use common::{RecordingTable, stacked_game, stacked_game_with, with_bankroll};

use Rank::{Ace, Eight, Five, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};

#[test]
fn new_game_starts_in_betting() {
    let game = stacked_game(&[]);
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.current_bet(), 0);
    assert_eq!(game.pending(), None);
    assert!(game.hands().is_empty());
}

#[test]
fn bet_errors() {
    let mut game = stacked_game_with(GameOptions::default(), with_bankroll(100), &[]);

    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        game.place_bet(150).unwrap_err(),
        BetError::InsufficientFunds
    );
    game.place_bet(60).unwrap();
    assert_eq!(game.place_bet(50).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(game.current_bet(), 60);

    let flashes = &game.table().flashes;
    assert!(
        flashes
            .iter()
            .all(|(message, notice)| message == "Insufficient funds!" && *notice == Notice::Warn)
    );
    assert_eq!(flashes.len(), 2);

    assert_eq!(game.rebet().unwrap_err(), BetError::NoPreviousBet);
    game.clear_bet().unwrap();
    assert_eq!(game.current_bet(), 0);
}

#[test]
fn bets_are_capped_at_the_table_maximum() {
    let mut game = stacked_game(&[]);

    game.place_bet(400).unwrap();
    assert_eq!(
        game.place_bet(200).unwrap_err(),
        BetError::AboveMaximum { max: 500 }
    );
    game.place_bet(100).unwrap();
    assert_eq!(game.current_bet(), 500);
    assert_eq!(
        game.table().flashes,
        vec![("Maximum bet is $500".to_owned(), Notice::Warn)]
    );
}

#[test]
fn start_round_requires_the_minimum_bet() {
    let mut game = stacked_game(&[]);
    game.place_bet(5).unwrap();

    assert_eq!(
        game.start_round().unwrap_err(),
        DealError::BelowMinimum { min: 10 }
    );
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(
        game.table().flashes,
        vec![("Minimum bet is $10".to_owned(), Notice::Warn)]
    );
}

#[test]
fn actions_outside_the_player_turn_are_rejected() {
    let mut game = stacked_game(&[]);
    assert_eq!(
        game.handle_action(PlayerAction::Hit).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        game.resolve_insurance(true).unwrap_err(),
        InsuranceError::NotOffered
    );
    assert!(game.recommendation().is_none());
}

#[test]
fn initial_deal_order_and_hidden_hole_card() {
    let mut game = stacked_game(&[Ten, Nine, Seven, Eight]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    let hand_id = game.hands()[0].id();
    let dealt: Vec<_> = game
        .table()
        .dealt
        .iter()
        .map(|(card, seat, face_up)| (card.rank, *seat, *face_up))
        .collect();
    assert_eq!(
        dealt,
        vec![
            (Ten, Seat::Player(hand_id), true),
            (Nine, Seat::Dealer, true),
            (Seven, Seat::Player(hand_id), true),
            (Eight, Seat::Dealer, false),
        ]
    );

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(
        game.pending(),
        Some(Pending::Action {
            hand_index: 0,
            hand_id
        })
    );
    assert_eq!(game.bankroll(), 990);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.dealer.cards.len(), 1);
    assert!(snapshot.dealer.hole_hidden);
    assert_eq!(snapshot.dealer.value, 9);
    assert_eq!(snapshot.active_hand, Some(0));
}

#[test]
fn insurance_declined_against_dealer_blackjack_loses() {
    let mut game = stacked_game(&[Ten, Ace, Seven, King]);
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), Phase::Dealing);
    assert_eq!(game.insurance_offer(), Some(50));
    assert_eq!(game.table().insurance_offers, vec![50]);
    assert_eq!(
        game.handle_action(PlayerAction::Stand).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);

    game.resolve_insurance(false).unwrap();

    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.bankroll(), 900);
    assert_eq!(game.current_bet(), 100);
    let round = game.last_round().unwrap();
    assert!(round.dealer_blackjack);
    assert_eq!(round.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(round.hands[0].payout, 0);
    assert_eq!(round.net(), -100);
}

#[test]
fn insurance_taken_against_dealer_blackjack_breaks_even() {
    let mut game = stacked_game(&[Ten, Ace, Seven, Queen]);
    game.place_bet(100).unwrap();
    game.start_round().unwrap();
    game.resolve_insurance(true).unwrap();

    assert_eq!(game.bankroll(), 1000);
    let round = game.last_round().unwrap();
    assert_eq!(round.insurance_bet, 50);
    assert_eq!(round.insurance_payout, 150);
    assert_eq!(round.net(), 0);
    assert_eq!(game.hands()[0].insurance_bet(), 50);
}

#[test]
fn insurance_lost_when_dealer_has_no_blackjack() {
    let mut game = stacked_game(&[Ten, Ace, Nine, Five, Three]);
    game.place_bet(20).unwrap();
    game.start_round().unwrap();
    game.resolve_insurance(true).unwrap();

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.bankroll(), 970);

    // Dealer A,5 + 3 makes soft 19.
    game.handle_action(PlayerAction::Stand).unwrap();
    let round = game.last_round().unwrap();
    assert_eq!(round.insurance_payout, 0);
    assert_eq!(round.hands[0].outcome, HandOutcome::Push);
    assert_eq!(game.bankroll(), 990);
}

#[test]
fn insurance_is_not_offered_when_disabled() {
    let options = GameOptions::default().with_insurance(false);
    let mut game = stacked_game_with(options, Settings::default(), &[Ten, Ace, Seven, Six]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.insurance_offer(), None);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn both_naturals_push() {
    let mut game = stacked_game(&[Ace, Ace, King, Jack]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    game.resolve_insurance(false).unwrap();

    let round = game.last_round().unwrap();
    assert_eq!(round.hands[0].outcome, HandOutcome::Push);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.stats().hands_pushed, 1);
}

#[test]
fn player_blackjack_pays_three_to_two_rounded_down() {
    let mut game = stacked_game(&[Ace, Nine, King, Seven]);
    game.place_bet(15).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), Phase::Betting);
    // 15 + floor(22.5)
    assert_eq!(game.bankroll(), 1000 - 15 + 37);
    assert_eq!(game.stats().blackjacks, 1);
    assert_eq!(game.stats().hands_won, 1);
    assert_eq!(game.hands()[0].outcome(), Some(HandOutcome::Blackjack));
    assert!(game.dealer_hand().is_hole_revealed());
}

#[test]
fn hitting_to_bust_loses_without_dealer_draws() {
    let mut game = stacked_game(&[Ten, Nine, Six, Six, Six, Ten]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    let outcome = game.handle_action(PlayerAction::Hit).unwrap();
    assert!(matches!(outcome, ActionOutcome::Dealt(card) if card.rank == Six));

    let round = game.last_round().unwrap();
    assert_eq!(round.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(round.hands[0].payout, 0);
    assert_eq!(round.hands[0].player_value, 22);
    let busted = &game.hands()[0];
    assert!(busted.is_busted());
    assert!(!busted.can_hit());
    assert!(busted.is_done());
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.bankroll(), 990);
}

#[test]
fn dealer_draws_to_seventeen() {
    let mut game = stacked_game(&[Ten, Six, Eight, Five, Two, Ten]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    // Dealer 6,5 + 2 + 10 = 23
    let round = game.last_round().unwrap();
    assert!(round.dealer_bust);
    assert_eq!(round.hands[0].outcome, HandOutcome::Win);
    assert_eq!(round.hands[0].payout, 20);
    assert_eq!(game.dealer_hand().len(), 4);
    assert_eq!(game.bankroll(), 1010);
}

#[test]
fn book_advises_splitting_eights_without_acting() {
    let mut game = stacked_game(&[Eight, Six, Eight, Ten]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    let before = game.snapshot();
    let outcome = game.handle_action(PlayerAction::Book).unwrap();
    let ActionOutcome::Advice(advice) = outcome else {
        panic!("book returns advice");
    };
    assert_eq!(advice.action, Move::Split);
    assert_eq!(advice.highlight_button, "split");
    assert!(advice.explanation.starts_with("Pair of 8s vs Dealer 6"));
    assert_eq!(game.table().advice.len(), 1);

    let after = game.snapshot();
    assert_eq!(after.pending, before.pending);
    assert_eq!(after.bankroll, before.bankroll);
    assert_eq!(after.hands[0].cards(), before.hands[0].cards());
    assert_eq!(game.shoe().cards_dealt(), 4);
}

#[test]
fn split_double_and_settle_both_hands() {
    let mut game = stacked_game(&[Eight, Six, Eight, Ten, Three, Ten, Ten, Nine]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    let ActionOutcome::Split { new_hand } = game.handle_action(PlayerAction::Split).unwrap() else {
        panic!("split returns the new hand");
    };
    assert_eq!(game.hands().len(), 2);
    assert_eq!(game.hands()[1].id(), new_hand);
    assert_ne!(game.hands()[0].id(), new_hand);
    assert_eq!(game.hands()[0].value(), 11);
    assert_eq!(game.hands()[1].value(), 18);
    assert_eq!(game.hands()[0].split_depth(), 1);
    assert_eq!(game.hands()[1].split_depth(), 1);
    assert_eq!(game.bankroll(), 980);
    assert_eq!(game.table().layouts, vec![2]);

    let outcome = game.handle_action(PlayerAction::Double).unwrap();
    assert!(matches!(outcome, ActionOutcome::Doubled { extra: 10, .. }));
    assert_eq!(
        game.pending(),
        Some(Pending::Action {
            hand_index: 1,
            hand_id: new_hand
        })
    );

    game.handle_action(PlayerAction::Stand).unwrap();

    let round = game.last_round().unwrap();
    assert!(round.dealer_bust);
    assert_eq!(round.hands.len(), 2);
    assert_eq!(round.hands[0].bet, 20);
    assert_eq!(round.hands[0].payout, 40);
    assert_eq!(round.hands[1].payout, 20);
    assert_eq!(game.bankroll(), 1030);
    assert_eq!(game.stats().hands_won, 2);
    assert_eq!(game.stats().hands_played, 1);
}

#[test]
fn resplit_up_to_depth_three() {
    let mut ranks = vec![Eight, Six, Eight, Ten];
    ranks.extend([Eight; 20]);
    let mut game = stacked_game(&ranks);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    for _ in 0..3 {
        game.handle_action(PlayerAction::Split).unwrap();
    }
    assert_eq!(game.hands().len(), 4);
    let depths: Vec<u8> = game.hands().iter().map(|hand| hand.split_depth()).collect();
    assert_eq!(depths, vec![3, 3, 2, 1]);
    assert!(!game.hands()[0].can_split());
    assert_eq!(
        game.handle_action(PlayerAction::Split).unwrap_err(),
        ActionError::CannotSplit
    );
    assert_eq!(game.hands().len(), 4);
    assert_eq!(game.bankroll(), 960);

    // Split every hand that still can, stand the rest.
    let mut splits = 3;
    while let Some(Pending::Action { hand_index, .. }) = game.pending() {
        match game.handle_action(PlayerAction::Split) {
            Ok(_) => splits += 1,
            Err(ActionError::CannotSplit) => {
                assert_eq!(game.hands()[hand_index].split_depth(), MAX_SPLIT_DEPTH);
                game.handle_action(PlayerAction::Stand).unwrap();
            }
            Err(err) => panic!("unexpected split error: {err}"),
        }
    }

    assert_eq!(splits, 7);
    assert_eq!(game.hands().len(), 8);
    assert!(game.hands().iter().all(|hand| hand.split_depth() == MAX_SPLIT_DEPTH));
    assert!(game.hands().iter().all(|hand| hand.value() == 16));

    // Dealer 6,10 draws an 8 and busts.
    let round = game.last_round().unwrap();
    assert!(round.dealer_bust);
    assert_eq!(round.hands.len(), 8);
    assert!(round.hands.iter().all(|hand| hand.payout == 20));
    assert_eq!(game.bankroll(), 1080);
}

#[test]
fn split_aces_take_one_card_each() {
    let mut game = stacked_game(&[Ace, Seven, Ace, Ten, Five, King]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    game.handle_action(PlayerAction::Split).unwrap();

    // Both hands are finished, so the round settles at once.
    assert_eq!(game.phase(), Phase::Betting);
    let round = game.last_round().unwrap();
    assert_eq!(round.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(round.hands[1].outcome, HandOutcome::Win);
    assert_eq!(round.hands[1].payout, 20);
    assert!(!game.hands()[1].is_blackjack());
    assert!(!game.hands()[0].can_split());
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn double_and_split_need_funds() {
    let mut game = stacked_game_with(
        GameOptions::default(),
        with_bankroll(100),
        &[Eight, Six, Eight, Ten],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.bankroll(), 0);
    assert_eq!(
        game.handle_action(PlayerAction::Split).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(
        game.handle_action(PlayerAction::Double).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(game.hands().len(), 1);

    let advice = game.recommendation().unwrap();
    assert_ne!(advice.action, Move::Split);
}

#[test]
fn double_for_less_takes_what_is_left() {
    let mut game = stacked_game_with(
        GameOptions::default(),
        with_bankroll(150),
        &[Six, Seven, Five, Ten, Ten],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    let outcome = game.handle_action(PlayerAction::Double).unwrap();
    assert!(matches!(outcome, ActionOutcome::Doubled { extra: 50, .. }));
    assert!(game.hands()[0].is_doubled());
    assert_eq!(game.hands()[0].bet(), 150);
    // 21 against 17
    assert_eq!(game.bankroll(), 300);
}

#[test]
fn cannot_split_unequal_cards() {
    let mut game = stacked_game(&[Eight, Six, Nine, Ten, Two]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    assert_eq!(
        game.handle_action(PlayerAction::Split).unwrap_err(),
        ActionError::CannotSplit
    );
    game.handle_action(PlayerAction::Hit).unwrap();
    assert_eq!(
        game.handle_action(PlayerAction::Double).unwrap_err(),
        ActionError::CannotDouble
    );
}

#[test]
fn auto_rebet_is_capped_by_the_bankroll() {
    let mut game = stacked_game_with(
        GameOptions::default(),
        with_bankroll(100),
        &[Ten, Ten, Seven, Eight],
    );
    game.place_bet(60).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    assert_eq!(game.bankroll(), 40);
    assert_eq!(game.last_bet(), 60);
    assert_eq!(game.current_bet(), 40);

    game.clear_bet().unwrap();
    game.rebet().unwrap();
    assert_eq!(game.current_bet(), 40);
}

#[test]
fn exhausted_bankroll_is_reset() {
    let mut game = stacked_game_with(
        GameOptions::default(),
        with_bankroll(20),
        &[Ten, Ten, Seven, Eight],
    );
    game.place_bet(15).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.current_bet(), 15);
    assert!(game.last_round().unwrap().bankroll_reset);
    assert!(
        game.table()
            .flashes
            .contains(&("Bankroll reset to $1,000. Good luck!".to_owned(), Notice::Info))
    );
    assert_eq!(game.storage().settings().bankroll, Some(1000));
}

#[test]
fn hole_card_is_counted_only_when_revealed() {
    let mut game = stacked_game(&[Two, Five, Three, King, Ten]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.counter().running_count(), 3);

    game.handle_action(PlayerAction::Stand).unwrap();
    // King revealed, then the dealer busts on a ten.
    assert_eq!(game.counter().running_count(), 1);
    assert_eq!(game.last_round().unwrap().hands[0].outcome, HandOutcome::Win);
}

#[test]
fn toggling_the_counter_keeps_the_count() {
    let mut game = stacked_game(&[Two, Nine, Three, Seven]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    let running = game.counter().running_count();

    assert!(game.toggle_counter());
    assert_eq!(game.table().counter_visible, Some(true));
    assert_eq!(game.snapshot().counter.unwrap().running_count, running);
    assert!(!game.toggle_counter());
    assert!(game.snapshot().counter.is_none());
    assert_eq!(game.counter().running_count(), running);
}

#[test]
fn settlement_and_speed_are_persisted() {
    let mut game = stacked_game(&[Ten, Ten, Nine, Seven]);
    game.set_speed(0.5);
    assert_eq!(game.storage().settings().speed, Some(0.5));

    game.place_bet(50).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    assert_eq!(game.bankroll(), 1050);
    assert_eq!(game.storage().settings().bankroll, Some(1050));

    let restored = Game::with_parts(
        GameOptions::default(),
        1,
        NullTable,
        MemoryStorage::with_settings(game.storage().settings()),
    );
    assert_eq!(restored.bankroll(), 1050);
    assert!((restored.speed() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn pauses_scale_with_speed() {
    let mut game = stacked_game(&[Ten, Nine, Seven, Eight]);
    assert_eq!(game.pace(1000), Duration::from_millis(1000));

    game.set_speed(-1.0);
    game.set_speed(f64::NAN);
    assert!((game.speed() - 1.0).abs() < f64::EPSILON);

    game.set_speed(0.0);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    let pauses = &game.table().pauses;
    assert!(!pauses.is_empty());
    assert!(pauses.iter().all(Duration::is_zero));
}

#[test]
fn zero_bankroll_in_storage_starts_fresh() {
    let game = stacked_game_with(GameOptions::default(), with_bankroll(0), &[]);
    assert_eq!(game.bankroll(), 1000);
}

struct FailingStorage;

impl Storage for FailingStorage {
    fn load(&self) -> Result<Settings, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn store(&mut self, _settings: &Settings) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn failing_storage_never_stops_play() {
    common::init_logging();
    let mut game = Game::with_parts(
        GameOptions::default(),
        3,
        RecordingTable::default(),
        FailingStorage,
    );
    assert_eq!(game.bankroll(), 1000);

    game.stack_shoe(common::cards(&[Ten, Ten, Nine, Seven]))
        .unwrap();
    game.set_speed(2.0);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    assert_eq!(game.bankroll(), 1010);
    assert!((game.speed() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn new_shoe_only_while_betting() {
    let mut game = stacked_game(&[Ten, Nine, Seven, Eight]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.force_new_shoe().unwrap_err(), ReshuffleError::InvalidState);
    assert!(game.stack_shoe(Vec::new()).is_err());

    game.handle_action(PlayerAction::Stand).unwrap();
    game.force_new_shoe().unwrap();

    assert_eq!(game.shoe().cards_dealt(), 0);
    assert_eq!(game.shoe().cards_remaining(), 8 * 52 - 1);
    assert_eq!(game.counter().running_count(), 0);
    assert_eq!(game.table().shuffles, 1);
}

#[test]
fn zero_decks_play_from_a_single_deck() {
    let options = GameOptions::default().with_decks(0);
    assert_eq!(options.decks, 1);

    let mut game = Game::new(GameOptions { decks: 0, ..options }, 3);
    assert_eq!(game.shoe().decks(), 1);
    assert_eq!(game.shoe().cards_remaining(), 51);

    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    assert_eq!(game.hands()[0].cards().len(), 2);
    let mut ids: Vec<u32> = game.hands()[0].cards().iter().map(|card| card.id).collect();
    ids.extend(game.dealer_hand().cards().iter().take(2).map(|card| card.id));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert!(game.shoe().cards_dealt() >= 4);
    assert!(game.shoe().cards_remaining() + game.shoe().cards_dealt() <= 51);
}

#[test]
fn reshuffles_at_penetration_before_dealing() {
    let options = GameOptions::default().with_decks(1).with_penetration(0.0);
    let mut game = stacked_game_with(options, Settings::default(), &[]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.table().shuffles, 1);
    assert_eq!(game.shoe().cards_dealt(), 4);
    assert_eq!(game.shoe().cards_remaining(), 52 - 1 - 4);
}

#[test]
fn phases_follow_the_round() {
    let mut game = stacked_game(&[Ten, Nine, Seven, Eight]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    game.handle_action(PlayerAction::Stand).unwrap();

    assert_eq!(
        game.table().phases,
        vec![
            Phase::Dealing,
            Phase::PlayerTurn,
            Phase::DealerTurn,
            Phase::RoundEnd,
            Phase::Betting,
        ]
    );
    assert_eq!(
        game.table().messages.last().map(String::as_str),
        Some("Place your bet to begin the next round")
    );
    assert_eq!(game.table().outcomes, vec![(0, HandOutcome::Push, 10)]);
}

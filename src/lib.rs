//! A single-player blackjack trainer engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow
//! (betting, insurance, player actions including splits, dealer play and
//! settlement) on a multi-deck [`Shoe`], keeps a Hi-Lo count with
//! [`HiLoCounter`] and answers basic-strategy questions through
//! [`recommend`]. Rendering is left to a [`Table`] implementation.
//!
//! # Example
//!
//! ```
//! use blackjack_academy::{Game, GameOptions, Phase, PlayerAction};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(25).unwrap();
//! game.start_round().unwrap();
//!
//! // Decline insurance if the dealer shows an Ace.
//! if game.insurance_offer().is_some() {
//!     game.resolve_insurance(false).unwrap();
//! }
//! while game.phase() == Phase::PlayerTurn {
//!     game.handle_action(PlayerAction::Stand).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Betting);
//! assert!(game.last_round().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod counter;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod storage;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use counter::{Advantage, CountStrength, CounterView, HiLoCounter};
pub use error::{
    ActionError, BetError, DealError, InsuranceError, ReshuffleError, StorageError,
};
pub use game::{
    ActionOutcome, DealerView, Game, Pending, Phase, PlayerAction, TableSnapshot,
};
pub use hand::{DealerHand, Hand, HandId, MAX_SPLIT_DEPTH};
pub use options::{GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult, SessionStats};
pub use shoe::{Shoe, ShoeView};
#[cfg(feature = "std")]
pub use storage::JsonFileStorage;
pub use storage::{MemoryStorage, Settings, Storage};
pub use strategy::{AdviceCode, Move, Recommendation, recommend};
pub use table::{Notice, NullTable, Seat, Table};

//! Error types for game operations.
//!
//! Every rejection leaves the game exactly as it was.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet would exceed the table maximum.
    #[error("maximum bet is {max}")]
    AboveMaximum {
        /// Table maximum.
        max: usize,
    },
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// There is no previous bet to restore.
    #[error("no previous bet")]
    NoPreviousBet,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The bet is below the table minimum.
    #[error("minimum bet is {min}")]
    BelowMinimum {
        /// Table minimum.
        min: usize,
    },
    /// The bet exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// No insurance offer is pending.
    #[error("no insurance offer is pending")]
    NotOffered,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The hand cannot take another card.
    #[error("hand cannot take another card")]
    CannotHit,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors raised by a settings store.
///
/// The game logs and discards these; play continues without persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be used.
    #[error("storage unavailable")]
    Unavailable,
    /// Reading or writing the settings file failed.
    #[cfg(feature = "std")]
    #[error("settings file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The settings file is not valid JSON.
    #[cfg(feature = "std")]
    #[error("settings file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

//! Hi-Lo card counting.
//!
//! | Cards     | Count |
//! |-----------|-------|
//! | 2-6       | +1    |
//! | 7-9       | 0     |
//! | 10-K, A   | -1    |
//!
//! The true count divides the running count by the decks left in the shoe.

use serde::Serialize;

use crate::card::Card;

#[cfg(feature = "std")]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_to_tenth(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

/// Label reading of the running count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advantage {
    /// Running count of +3 or more.
    Player,
    /// Running count of +1 or more.
    SlightPlayer,
    /// Zero.
    Neutral,
    /// Running count of -1 or less.
    SlightDealer,
    /// Running count of -3 or less.
    Dealer,
}

impl Advantage {
    /// Short label for the count display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Player Advantage",
            Self::SlightPlayer => "Slight Advantage",
            Self::Neutral => "Neutral",
            Self::SlightDealer => "Slight Disadvantage",
            Self::Dealer => "Dealer Advantage",
        }
    }
}

/// Display band of the running count, used to tint the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountStrength {
    /// Running count of +4 or more.
    StrongPlayer,
    /// Running count of +2 or more.
    MildPlayer,
    /// Between -2 and +2.
    Neutral,
    /// Running count of -2 or less.
    MildDealer,
    /// Running count of -4 or less.
    StrongDealer,
}

impl CountStrength {
    /// Returns whether the band favours the player.
    #[must_use]
    pub const fn favours_player(self) -> bool {
        matches!(self, Self::StrongPlayer | Self::MildPlayer)
    }

    /// Returns whether the band favours the dealer.
    #[must_use]
    pub const fn favours_dealer(self) -> bool {
        matches!(self, Self::StrongDealer | Self::MildDealer)
    }
}

/// Count values surfaced while the counter is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CounterView {
    /// Running count.
    pub running_count: i32,
    /// True count, one decimal.
    pub true_count: f64,
    /// Label reading of the running count.
    pub advantage: Advantage,
    /// Display band of the running count.
    pub strength: CountStrength,
}

/// A Hi-Lo running count.
#[derive(Debug, Clone, Default)]
pub struct HiLoCounter {
    running: i32,
    enabled: bool,
}

impl HiLoCounter {
    /// Creates a zeroed, hidden counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            running: 0,
            enabled: false,
        }
    }

    /// Adds a card that just became visible.
    pub const fn process_card(&mut self, card: &Card) {
        self.running += card.count_value();
    }

    /// Zeroes the running count.
    pub const fn reset(&mut self) {
        self.running = 0;
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running
    }

    /// Running count per remaining deck, rounded to one decimal.
    #[must_use]
    pub fn true_count(&self, decks_remaining: f64) -> f64 {
        round_to_tenth(f64::from(self.running) / decks_remaining.max(0.5))
    }

    /// Classifies the running count for the count label.
    ///
    /// The label reads the count against a single deck, so it tracks the
    /// running count rather than the per-deck figure.
    #[must_use]
    pub const fn advantage(&self) -> Advantage {
        match self.running {
            3.. => Advantage::Player,
            1..=2 => Advantage::SlightPlayer,
            ..=-3 => Advantage::Dealer,
            -2..=-1 => Advantage::SlightDealer,
            0 => Advantage::Neutral,
        }
    }

    /// Bands the running count at two and four points either way.
    #[must_use]
    pub const fn strength(&self) -> CountStrength {
        match self.running {
            4.. => CountStrength::StrongPlayer,
            2..=3 => CountStrength::MildPlayer,
            ..=-4 => CountStrength::StrongDealer,
            -3..=-2 => CountStrength::MildDealer,
            -1..=1 => CountStrength::Neutral,
        }
    }

    /// Flips visibility and returns the new state.
    ///
    /// Counting continues while hidden.
    pub const fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Returns whether the count is shown.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the count values, or `None` while the counter is hidden.
    #[must_use]
    pub fn view(&self, decks_remaining: f64) -> Option<CounterView> {
        self.enabled.then(|| CounterView {
            running_count: self.running,
            true_count: self.true_count(decks_remaining),
            advantage: self.advantage(),
            strength: self.strength(),
        })
    }
}

//! Game configuration types.
//!
//! A game of Literature is configured by:
//! - `Variant`: which deck and set partition is in play (6 or 8 seats)
//! - `GameConfig`: the variant plus the seat count the table was built with
//!
//! Set membership for a variant lives in `cards::taxonomy`.

use serde::{Deserialize, Serialize};

use crate::rules::error::InvariantViolation;

/// Rules variant.
///
/// The 6-seat game uses the full 54-card deck, split into nine sets including
/// the special set (both jokers and the four eights). The 8-seat game drops the
/// jokers and the eights: 48 cards, eight sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Two teams of three.
    #[default]
    SixSeat,
    /// Two teams of four.
    EightSeat,
}

impl Variant {
    /// Number of seats at the table.
    #[must_use]
    pub const fn seat_count(self) -> usize {
        match self {
            Variant::SixSeat => 6,
            Variant::EightSeat => 8,
        }
    }

    /// Number of sets in play.
    #[must_use]
    pub const fn total_sets(self) -> usize {
        match self {
            Variant::SixSeat => 9,
            Variant::EightSeat => 8,
        }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        self.total_sets() * crate::cards::SET_SIZE
    }

    /// Seats per team.
    #[must_use]
    pub const fn team_size(self) -> usize {
        self.seat_count() / 2
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::SixSeat => f.write_str("3v3"),
            Variant::EightSeat => f.write_str("4v4"),
        }
    }
}

/// Complete configuration of a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rules variant.
    pub variant: Variant,

    /// Number of seats the caller asked for. Must match the variant.
    pub seat_count: usize,
}

impl GameConfig {
    /// Configuration for a variant with its natural seat count.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            seat_count: variant.seat_count(),
        }
    }

    /// Override the seat count. Checked by `validate`.
    #[must_use]
    pub const fn with_seat_count(mut self, seat_count: usize) -> Self {
        self.seat_count = seat_count;
        self
    }

    /// Check that the seat count matches the variant.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.seat_count != self.variant.seat_count() {
            return Err(InvariantViolation::SeatCount {
                variant: self.variant,
                expected: self.variant.seat_count(),
                actual: self.seat_count,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

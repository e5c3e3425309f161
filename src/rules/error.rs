//! Error classes.
//!
//! - `Rejection`: the caller submitted an illegal action or nomination. Nothing
//!   was mutated; the caller may correct the input and retry.
//! - `InvariantViolation`: bookkeeping would become inconsistent (bad deck,
//!   wrong owner passed to a transfer, corrupt snapshot). Setup or the call is
//!   aborted.

use crate::cards::{Card, SetId};
use crate::core::config::Variant;
use crate::core::seat::{Seat, Team};

/// Reason an action or nomination was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{0} must nominate a seat before anyone can act")]
    TeamPending(Team),

    #[error("the game is over")]
    GameOver,

    #[error("{0} does not exist at this table")]
    UnknownSeat(Seat),

    #[error("{0} holds no cards and cannot be asked")]
    EmptyTarget(Seat),

    #[error("{asker} cannot ask {target}: they are on the same team")]
    SameTeam { asker: Seat, target: Seat },

    #[error("set {set} is not part of the {variant} variant")]
    SetNotInVariant { set: SetId, variant: Variant },

    #[error("set {0} has already been resolved")]
    SetResolved(SetId),

    #[error("no nomination is pending; {0} holds the turn")]
    NotPending(Seat),

    #[error("{seat} is not on {team}")]
    WrongTeam { seat: Seat, team: Team },

    #[error("{0} holds no cards and cannot take the turn")]
    EmptyHand(Seat),
}

/// Internal consistency failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{card} is not held by {expected} (owner: {actual:?})")]
    NotOwner {
        card: Card,
        expected: Seat,
        actual: Option<Seat>,
    },

    #[error("deck has {actual} cards, expected {expected}")]
    DeckLength { expected: usize, actual: usize },

    #[error("{card} is not part of the {variant} deck")]
    ForeignCard { card: Card, variant: Variant },

    #[error("{0} appears more than once in the deck")]
    DuplicateCard(Card),

    #[error("the {variant} variant needs {expected} seats, got {actual}")]
    SeatCount {
        variant: Variant,
        expected: usize,
        actual: usize,
    },

    #[error("{0} is not at the table")]
    UnknownSeat(Seat),

    #[error("cannot seat {0} players")]
    UnsupportedSeatCount(usize),

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

/// Any error returned by a game instance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("action rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl GameError {
    /// The rejection reason, if this is a rejected action.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            GameError::Rejected(r) => Some(r),
            GameError::Invariant(_) => None,
        }
    }
}

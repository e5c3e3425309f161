//! Action representation.
//!
//! An action is one of two moves, submitted on behalf of the seat that holds
//! the turn:
//! - `CardAsk`: ask one opposing seat for one specific card
//! - `SetDeclaration`: assert who holds every card of one set
//!
//! Accepted actions and nominations are kept as `ActionRecord`s in the game
//! history, together with their outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::seat::Seat;
use crate::cards::{Card, SetId};
use crate::rules::outcome::Outcome;

/// An assertion that `seat` holds `card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    pub seat: Seat,
    pub card: Card,
}

impl Claim {
    #[must_use]
    pub const fn new(seat: Seat, card: Card) -> Self {
        Self { seat, card }
    }
}

/// Claims for one set. Never more than six in a well-formed declaration.
pub type Claims = SmallVec<[Claim; 6]>;

/// A move by the seat holding the turn.
///
/// ## Example
///
/// ```
/// use rust_literature::cards::{Card, SetId, Suit};
/// use rust_literature::core::{Action, Claim, Seat};
///
/// let ask = Action::ask(Seat::new(4), "5C".parse().unwrap());
///
/// let declare = Action::declare(
///     SetId::Low(Suit::Clubs),
///     [Claim::new(Seat::new(1), "5C".parse().unwrap())],
/// );
/// assert_eq!(declare.set(), SetId::Low(Suit::Clubs));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Ask `target` for `card`.
    CardAsk { target: Seat, card: Card },

    /// Declare the distribution of `set`. Claims for the declarer's own cards
    /// may be included or left implicit.
    SetDeclaration { set: SetId, claims: Claims },
}

impl Action {
    /// Create a card ask.
    #[must_use]
    pub fn ask(target: Seat, card: Card) -> Self {
        Action::CardAsk { target, card }
    }

    /// Create a set declaration.
    #[must_use]
    pub fn declare(set: SetId, claims: impl IntoIterator<Item = Claim>) -> Self {
        Action::SetDeclaration {
            set,
            claims: claims.into_iter().collect(),
        }
    }

    /// The set this action concerns.
    #[must_use]
    pub fn set(&self) -> SetId {
        match self {
            Action::CardAsk { card, .. } => crate::cards::set_of(*card),
            Action::SetDeclaration { set, .. } => *set,
        }
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// An action was resolved.
    Resolved { action: Action, outcome: Outcome },
    /// A pending team handed the turn to one of its seats.
    Nominated,
}

/// A recorded event with metadata for history tracking.
///
/// Used for replay, debugging, and for clients that render a game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the game's history, starting at 0.
    pub sequence: u32,

    /// The seat that acted, or that was nominated.
    pub seat: Seat,

    /// What happened.
    pub event: Event,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, seat: Seat, event: Event) -> Self {
        Self { sequence, seat, event }
    }

    /// The outcome, for resolved actions.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.event {
            Event::Resolved { outcome, .. } => Some(outcome),
            Event::Nominated => None,
        }
    }
}

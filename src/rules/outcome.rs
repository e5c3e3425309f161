//! Outcome records returned by the call resolver.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, SetId};
use crate::core::seat::{Seat, Team};

/// Why a set was burned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurnKind {
    /// A card was asked for without holding any card of its set, or the asker
    /// already held the card.
    BadAsk,
    /// The declarer held no card of the declared set.
    EmptyDeclaration,
    /// Claims for other seats plus the declarer's own cards did not make six.
    CountMismatch,
    /// At least one claim named the wrong owner.
    WrongClaim,
}

/// How a set was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropKind {
    /// The declarer held all six cards.
    Solo,
    /// Other seats held part of the set.
    Collective,
}

/// Result of a resolved action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The target held the card; it moved to the asker.
    CardAskSuccess { card: Card, from: Seat, to: Seat },

    /// The target did not hold the card; the turn moved to the target.
    CardAskFailure { card: Card, asker: Seat, target: Seat },

    /// The set was forfeited to the other team.
    SetBurn {
        set: SetId,
        offending_team: Team,
        credited_team: Team,
        kind: BurnKind,
    },

    /// The set was declared correctly and credited to the declaring team.
    SetDrop {
        set: SetId,
        dropping_team: Team,
        kind: DropKind,
    },
}

impl Outcome {
    /// The set resolved by this outcome, if any.
    #[must_use]
    pub fn resolved_set(&self) -> Option<SetId> {
        match self {
            Outcome::SetBurn { set, .. } | Outcome::SetDrop { set, .. } => Some(*set),
            Outcome::CardAskSuccess { .. } | Outcome::CardAskFailure { .. } => None,
        }
    }

    /// The team credited with a set by this outcome, if any.
    #[must_use]
    pub fn credited_team(&self) -> Option<Team> {
        match self {
            Outcome::SetBurn { credited_team, .. } => Some(*credited_team),
            Outcome::SetDrop { dropping_team, .. } => Some(*dropping_team),
            Outcome::CardAskSuccess { .. } | Outcome::CardAskFailure { .. } => None,
        }
    }

    #[must_use]
    pub fn is_burn(&self) -> bool {
        matches!(self, Outcome::SetBurn { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::CardAskSuccess { card, from, to } => {
                write!(f, "{} took {} from {}", to, card, from)
            }
            Outcome::CardAskFailure { card, asker, target } => {
                write!(f, "{} asked {} for {}: not held", asker, target, card)
            }
            Outcome::SetBurn {
                set,
                offending_team,
                credited_team,
                kind,
            } => write!(
                f,
                "{} burned {} ({:?}); credited to {}",
                offending_team, set, kind, credited_team
            ),
            Outcome::SetDrop {
                set,
                dropping_team,
                kind,
            } => write!(f, "{} dropped {} ({:?})", dropping_team, set, kind),
        }
    }
}

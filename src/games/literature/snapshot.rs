//! Serializable game snapshots.
//!
//! A snapshot is a plain copy of a game's state. Restoring one re-checks the
//! bookkeeping: every card of an unresolved set must be held by an existing
//! seat, no card of a resolved set may be held, and the cached hand sizes must
//! agree with the owners.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::game::LiteratureGame;
use crate::core::{ActionRecord, GameConfig, Team};
use crate::rules::{GameError, InvariantViolation, ScoreLedger, TurnState};
use crate::zones::LocationRegistry;

/// Full state of a game at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub registry: LocationRegistry,
    pub turn: TurnState,
    pub ledger: ScoreLedger,
    pub history: Vector<ActionRecord>,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, InvariantViolation> {
        bincode::serialize(self).map_err(|e| InvariantViolation::CorruptSnapshot(e.to_string()))
    }

    /// Decode from bincode. The result still has to go through
    /// `LiteratureGame::restore` to be checked.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvariantViolation> {
        bincode::deserialize(bytes).map_err(|e| InvariantViolation::CorruptSnapshot(e.to_string()))
    }
}

fn corrupt(reason: impl Into<String>) -> InvariantViolation {
    InvariantViolation::CorruptSnapshot(reason.into())
}

impl LiteratureGame {
    /// Copy out the full state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            registry: self.registry.clone(),
            turn: self.turn,
            ledger: self.ledger.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot, checking its consistency first.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, GameError> {
        let GameSnapshot {
            config,
            registry,
            turn,
            ledger,
            history,
        } = snapshot;
        let variant = config.variant;

        config.validate()?;
        if registry.seat_count() != config.seat_count {
            return Err(corrupt(format!("registry has {} seats", registry.seat_count())).into());
        }
        if ledger.total_sets() != variant.total_sets() {
            return Err(corrupt(format!("ledger expects {} sets", ledger.total_sets())).into());
        }

        let mut credited = FxHashSet::default();
        for team in Team::BOTH {
            for &set in ledger.sets_won(team) {
                if !variant.contains_set(set) {
                    let reason = format!("{} credited a set outside the variant: {}", team, set);
                    return Err(corrupt(reason).into());
                }
                if !credited.insert(set) {
                    return Err(corrupt(format!("{} credited more than once", set)).into());
                }
            }
        }

        let in_play: Vec<_> =
            variant.sets().iter().copied().filter(|s| !credited.contains(s)).collect();
        registry.verify(variant, &in_play)?;

        if let TurnState::Seat(seat) = turn {
            if !seat.exists(config.seat_count) {
                return Err(corrupt(format!("turn held by nonexistent {}", seat)).into());
            }
        }
        if !ledger.is_game_over() {
            if let TurnState::Seat(seat) = turn {
                if registry.hand_size(seat) == 0 {
                    return Err(corrupt(format!("turn held by {} with no cards", seat)).into());
                }
            }
            if turn.skip_exhausted(&registry) != turn {
                let reason = format!("turn pending with {}, which has no cards", turn);
                return Err(corrupt(reason).into());
            }
        }

        Ok(LiteratureGame {
            config,
            registry,
            turn,
            ledger,
            history,
        })
    }
}

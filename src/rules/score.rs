//! Score ledger and game result.
//!
//! Each resolved set is credited to exactly one team, either by a correct
//! declaration (drop) or by the other team's error (burn). The game is over
//! once every set of the variant has been credited.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::SetId;
use crate::core::config::Variant;
use crate::core::seat::Team;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One team won more sets.
    Winner(Team),
    /// Equal sets (only possible in the 8-seat variant).
    Draw,
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: Team) -> bool {
        matches!(self, GameResult::Winner(t) if *t == team)
    }
}

/// Sets credited to each team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    total_sets: usize,
    won: [Vector<SetId>; 2],
}

impl ScoreLedger {
    /// Empty ledger for a variant.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            total_sets: variant.total_sets(),
            won: [Vector::new(), Vector::new()],
        }
    }

    /// Credit `set` to `team`.
    pub fn credit(&mut self, team: Team, set: SetId) {
        debug_assert!(!self.is_resolved(set), "{} credited twice", set);
        self.won[team.index()].push_back(set);
    }

    /// Number of sets credited to `team`.
    #[must_use]
    pub fn score_of(&self, team: Team) -> usize {
        self.won[team.index()].len()
    }

    /// Sets credited to `team`, in the order they were won.
    #[must_use]
    pub fn sets_won(&self, team: Team) -> &Vector<SetId> {
        &self.won[team.index()]
    }

    /// Whether `set` has been credited to either team.
    #[must_use]
    pub fn is_resolved(&self, set: SetId) -> bool {
        self.won.iter().any(|sets| sets.contains(&set))
    }

    /// Number of sets in the variant this ledger was built for.
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.total_sets
    }

    /// Number of sets resolved so far.
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.score_of(Team::A) + self.score_of(Team::B)
    }

    /// True once every set of the variant has been credited.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.resolved() == self.total_sets
    }

    /// The final result, or `None` while sets remain.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }

        let (a, b) = (self.score_of(Team::A), self.score_of(Team::B));
        Some(match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(Team::A),
            std::cmp::Ordering::Less => GameResult::Winner(Team::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}

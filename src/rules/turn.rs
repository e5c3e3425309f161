//! Turn state machine.
//!
//! The turn belongs either to a specific seat, or, after a set has been
//! resolved, to a team that has not yet chosen which of its seats acts next.
//! No ask or declaration is legal while a team is pending; `nominate` is the
//! only way out of that state.
//!
//! ```text
//!            ask success / drop (hand not empty)
//!              +-----+
//!              v     |
//!   Seat(s) ---------+---- ask failure ----> Seat(target)
//!      |  ^
//!      |  | nominate(seat on t, hand not empty)
//!      v  |
//!   TeamPending(t)   <---- any burn, or drop that empties the hand
//! ```

use serde::{Deserialize, Serialize};

use crate::core::seat::{Seat, Team};
use crate::rules::error::Rejection;
use crate::zones::LocationRegistry;

/// Whose move it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// This seat must act next.
    Seat(Seat),
    /// This team must nominate a seat before anyone can act.
    TeamPending(Team),
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::Seat(Seat::new(0))
    }
}

impl TurnState {
    /// The seat holding the turn, if one has been decided.
    #[must_use]
    pub fn seat(self) -> Option<Seat> {
        match self {
            TurnState::Seat(s) => Some(s),
            TurnState::TeamPending(_) => None,
        }
    }

    /// The team that must nominate, if any.
    #[must_use]
    pub fn pending_team(self) -> Option<Team> {
        match self {
            TurnState::Seat(_) => None,
            TurnState::TeamPending(t) => Some(t),
        }
    }

    /// The acting seat, or a rejection if a team still has to nominate.
    pub fn acting_seat(self) -> Result<Seat, Rejection> {
        match self {
            TurnState::Seat(s) => Ok(s),
            TurnState::TeamPending(t) => Err(Rejection::TeamPending(t)),
        }
    }

    /// Resolve a pending team turn by handing it to `seat`.
    ///
    /// The seat must exist, belong to the pending team, and still hold cards.
    pub fn nominate(self, seat: Seat, registry: &LocationRegistry) -> Result<TurnState, Rejection> {
        let team = match self {
            TurnState::Seat(current) => return Err(Rejection::NotPending(current)),
            TurnState::TeamPending(team) => team,
        };

        let seat_count = registry.seat_count();
        if !seat.exists(seat_count) {
            return Err(Rejection::UnknownSeat(seat));
        }
        if seat.team(seat_count) != team {
            return Err(Rejection::WrongTeam { seat, team });
        }
        if registry.hand_size(seat) == 0 {
            return Err(Rejection::EmptyHand(seat));
        }

        Ok(TurnState::Seat(seat))
    }

    /// Pass a pending turn to the other team when every seat of the pending
    /// team is out of cards. A no-op once both teams are out.
    #[must_use]
    pub fn skip_exhausted(self, registry: &LocationRegistry) -> TurnState {
        match self {
            TurnState::TeamPending(team)
                if registry.is_team_exhausted(team)
                    && !registry.is_team_exhausted(team.opponent()) =>
            {
                TurnState::TeamPending(team.opponent())
            }
            other => other,
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::Seat(s) => write!(f, "{}", s),
            TurnState::TeamPending(t) => write!(f, "{} (nominating)", t),
        }
    }
}

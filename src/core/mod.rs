//! Core types: seats and teams, actions, RNG, configuration.
//!
//! Everything here is independent of card ownership; the registry and the
//! rules build on top of these.

pub mod action;
pub mod config;
pub mod rng;
pub mod seat;

pub use action::{Action, ActionRecord, Claim, Claims, Event};
pub use config::{GameConfig, Variant};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap, Team};

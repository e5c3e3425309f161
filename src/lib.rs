//! # rust-literature
//!
//! Rule engine for Literature (Canadian Fish), a team card game for six or
//! eight seats.
//!
//! ## Design Principles
//!
//! 1. **Judge, then apply**: every action is checked against the current state
//!    before anything is mutated. A rejected action leaves no trace.
//!
//! 2. **Single source of truth**: card ownership lives in one registry indexed
//!    by a dense card id. Hands, set membership and team exhaustion are all
//!    derived from it.
//!
//! 3. **Explicit turn states**: after a set is resolved the turn belongs to a
//!    team, not a seat, until the team nominates who acts next.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: history and won-set lists use `im`, so
//!   cloning a game for analysis is cheap.
//!
//! - **Deterministic Dealing**: shuffles are driven by a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Seats, teams, actions, RNG, configuration
//! - `cards`: Card identity, notation, set taxonomy, decks
//! - `zones`: Card location registry
//! - `rules`: Turn state, call resolution, scoring, errors
//! - `games`: The `LiteratureGame` instance and snapshots
//!
//! ## Example
//!
//! ```
//! use rust_literature::{Action, LiteratureGame, Outcome, Seat, Variant};
//!
//! let mut game = LiteratureGame::deal_hands(6, Variant::SixSeat, None, 42).unwrap();
//!
//! let asker = Seat::new(0);
//! let card = game.hand_of(asker)[0];
//! // Asking for a card you already hold burns its set.
//! let outcome = game.act(Action::ask(Seat::new(3), card)).unwrap();
//! assert!(matches!(outcome, Outcome::SetBurn { .. }));
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Claim, Event, GameConfig, GameRng, Seat, SeatMap, Team, Variant,
};

pub use crate::cards::{Card, CardId, ParseCardError, Rank, SetId, Suit};

pub use crate::zones::LocationRegistry;

pub use crate::rules::{
    BurnKind, CallResolver, DropKind, GameError, GameResult, InvariantViolation, Outcome, Rejection,
    ScoreLedger, TurnState, Verdict,
};

pub use crate::games::{GameSnapshot, LiteratureGame, LiteratureGameBuilder};

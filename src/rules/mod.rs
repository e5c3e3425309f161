//! Game rules: turn flow, call resolution, scoring, and error classes.
//!
//! The resolver is the only code that mutates card ownership or scores. It
//! judges an action against the registry and ledger first, then applies the
//! verdict, so a rejected action leaves every piece of state untouched.

pub mod error;
pub mod outcome;
pub mod resolver;
pub mod score;
pub mod turn;

pub use error::{GameError, InvariantViolation, Rejection};
pub use outcome::{BurnKind, DropKind, Outcome};
pub use resolver::{apply, CallResolver, Resolution, Verdict};
pub use score::{GameResult, ScoreLedger};
pub use turn::TurnState;

//! Card location tracking.
//!
//! - `LocationRegistry`: card -> seat ownership, hand sizes, set removal

pub mod registry;

pub use registry::LocationRegistry;

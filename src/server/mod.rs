//! Automation server startup probing.
//!
//! - [`probe`] - Spawns the server and races its output against a deadline
//! - [`state`] - The single-assignment race state machine

pub mod probe;
pub mod state;

pub use probe::{ServerProbe, StartupReport};
pub use state::{FailureCause, ProbeState, StartupRace};

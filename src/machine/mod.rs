//! The calculator state machine.
//!
//! # Key Concepts
//!
//! - **Transitions**: `step` / `apply` are pure functions from a state and a
//!   command to the next state
//! - **Calculator**: owns the current state and applies commands one at a time
//! - **Snapshot**: the read-only view handed to renderers after each command

mod calculator;
mod snapshot;
mod transition;

pub use calculator::Calculator;
pub use snapshot::Snapshot;
pub use transition::{apply, step, IgnoreReason, StepResult};

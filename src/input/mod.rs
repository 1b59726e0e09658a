//! Input normalization.
//!
//! Turns raw user intents (key presses, keypad clicks) into the small closed
//! set of [`Command`]s the state machine understands. Nothing here has side
//! effects; unrecognized input simply yields no command.

mod command;
mod keyboard;
pub mod keypad;

pub use command::{Command, Digit};
pub use keyboard::{normalize, KeyInput, NormalizedInput};
pub use keypad::{Button, ButtonKind};

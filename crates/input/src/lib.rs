//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s. It owns no game
//! state: the runner forwards each mapped command to the game controller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};

//! Terminal input module.
//!
//! Two kinds of input reach the program:
//!
//! - start-up prompts on a line-buffered stdin ([`prompt`])
//! - single key presses during a run, read through `crossterm` and mapped to
//!   [`Command`](crate::types::Command)s ([`map`])

pub mod map;
pub mod prompt;

pub use tui_life_types as types;

pub use map::{handle_key_event, should_quit};
pub use prompt::{parse_iterations, parse_selection, prompt_iterations, prompt_selection};

//! Terminal Game of Life (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can write `tui_life::core::Grid` and friends, and adds the small
//! amount of configuration glue shared by the binary and the tests.

pub mod config;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

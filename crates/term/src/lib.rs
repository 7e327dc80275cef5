//! Terminal output module.
//!
//! Turns grids into text and puts that text on a screen. The simulation core
//! stays unaware of terminals: it hands a [`Grid`](tui_life_core::Grid) to
//! [`render_text`] and the resulting lines to a [`DisplayDriver`].
//!
//! Drivers:
//! - [`TerminalDisplay`]: crossterm-backed, alternate screen and raw mode
//! - [`PlainDisplay`]: any `Write`r, for piping and tests

pub mod display;
pub mod renderer;
pub mod text;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use display::{terminal_size_for, DisplayDriver, PlainDisplay};
pub use renderer::TerminalDisplay;
pub use text::{render_into, render_row_into, render_text, Glyphs};

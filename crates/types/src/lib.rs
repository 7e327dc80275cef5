//! Core types module - shared constants and small enums
//!
//! This crate defines the plain data used throughout the workspace. It has no
//! external dependencies, so it can be shared by the simulation core, the
//! terminal layer and the input layer alike.
//!
//! # Grid Dimensions
//!
//! The default board is 55 rows by 55 columns. Grids are toroidal: the last
//! row is adjacent to the first and the last column to the first.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Delay between generations (5 per second) |
//! | `MIN_TICK_MS` | 10 | Fastest delay reachable from the keyboard |
//! | `MAX_TICK_MS` | 5000 | Slowest delay reachable from the keyboard |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{SeedMode, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(SeedMode::from_str("random"), Some(SeedMode::Random));
//! assert_eq!(SeedMode::from_str("2"), Some(SeedMode::Curated));
//!
//! assert_eq!(DEFAULT_ROWS, 55);
//! assert_eq!(DEFAULT_COLS, 55);
//! ```

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 55;

/// Default grid width in cells
pub const DEFAULT_COLS: usize = 55;

/// Delay between generations in milliseconds (5 generations per second)
pub const TICK_MS: u64 = 200;

/// Lower bound for the keyboard-adjusted delay
pub const MIN_TICK_MS: u64 = 10;

/// Upper bound for the keyboard-adjusted delay
pub const MAX_TICK_MS: u64 = 5000;

/// Smallest iteration count accepted at the prompt
pub const MIN_ITERATIONS: u32 = 1;

/// Largest iteration count accepted at the prompt
pub const MAX_ITERATIONS: u32 = 10_000;

/// Iteration count used when nothing is configured and no prompt is possible
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Probability of a live cell on a fully random board (one in eight)
pub const RANDOM_DENSITY: f64 = 0.125;

/// Probability of a live cell inside the random patch of the curated board
pub const PATCH_DENSITY: f64 = 0.25;

/// Glyph for a live cell (U+25CF BLACK CIRCLE)
pub const ALIVE_GLYPH: char = '\u{25cf}';

/// Glyph for a dead cell
pub const DEAD_GLYPH: char = '.';

/// Glyph printed after every cell, making each cell two columns wide
pub const CELL_SEPARATOR: char = ' ';

/// Terminal columns occupied by a single cell
pub const CELL_WIDTH: u16 = 2;

/// Narrowest grid (in cells) the terminal is resized for
pub const MIN_RESIZE_COLS: u16 = 30;

/// Extra terminal rows reserved below the grid for the header and prompts
pub const RESIZE_EXTRA_ROWS: u16 = 10;

/// How the initial board is populated
///
/// - **Random**: every cell independently alive with a fixed density
/// - **Curated**: known patterns at fixed offsets plus a small random patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedMode {
    Random,
    Curated,
}

impl SeedMode {
    /// Parse seed mode from string (case-insensitive)
    ///
    /// Accepts the names used on the command line and the numeric choices
    /// offered at the interactive prompt.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::SeedMode;
    ///
    /// assert_eq!(SeedMode::from_str("Curated"), Some(SeedMode::Curated));
    /// assert_eq!(SeedMode::from_str("1"), Some(SeedMode::Random));
    /// assert_eq!(SeedMode::from_str("3"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" | "1" => Some(SeedMode::Random),
            "curated" | "2" => Some(SeedMode::Curated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeedMode::Random => "random",
            SeedMode::Curated => "curated",
        }
    }
}

/// Commands a user can issue while the simulation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the run before the iteration count is reached
    Quit,
    /// Freeze or resume the generation loop
    TogglePause,
    /// Halve the delay between generations
    SpeedUp,
    /// Double the delay between generations
    SlowDown,
}

//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life itself. It has no dependencies on the
//! terminal, the keyboard or the clock, making it:
//!
//! - **Deterministic**: the same seed produces the same board and history
//! - **Testable**: every rule and seeding path is covered by unit tests
//! - **Portable**: usable from the terminal driver, benches or a headless run
//!
//! # Module Structure
//!
//! - [`grid`]: toroidal grid and the neighbor counter
//! - [`step`]: the B3/S23 generation stepper
//! - [`generations`]: double-buffered current/next grids
//! - [`pattern`]: named seed patterns (glider, glider gun, ...)
//! - [`seed`]: random boards and pattern layouts
//! - [`rng`]: small deterministic LCG
//! - [`error`]: [`LifeError`]
//!
//! # Rules
//!
//! - A live cell with fewer than 2 or more than 3 live neighbors dies
//! - A dead cell with exactly 3 live neighbors becomes alive
//! - Every other cell keeps its state
//!
//! Neighbors wrap around the edges in both directions.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{Generations, Grid, PatternKind};
//!
//! let mut board = Grid::new(8, 8).unwrap();
//! board.place(&PatternKind::Blinker.grid().unwrap(), 3, 2).unwrap();
//!
//! let mut gens = Generations::new(board.clone());
//! gens.step().unwrap();
//! assert_ne!(gens.current(), &board);
//! gens.step().unwrap();
//! assert_eq!(gens.current(), &board);
//! ```

pub mod error;
pub mod generations;
pub mod grid;
pub mod pattern;
pub mod rng;
pub mod seed;
pub mod step;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use error::{LifeError, LifeResult};
pub use generations::Generations;
pub use grid::{count_live_neighbors, Grid, NEIGHBOR_OFFSETS};
pub use pattern::PatternKind;
pub use rng::SimpleRng;
pub use seed::{random_grid, seed_layout, Layout, Placement, RandomPatch};
pub use step::{compute_next_generation, next_state};

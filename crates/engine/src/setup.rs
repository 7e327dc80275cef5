//! Board setup - turns a seeding choice into the first generation.

use tui_life_core::{random_grid, seed_layout, Grid, Layout, LifeResult, SimpleRng};
use tui_life_types::{SeedMode, DEFAULT_COLS, DEFAULT_ROWS, RANDOM_DENSITY};

/// How to build the initial board.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSpec {
    /// Every cell alive with probability `density`.
    Random {
        rows: usize,
        cols: usize,
        density: f64,
    },
    /// Patterns and patches described by a layout.
    Layout(Layout),
}

impl SeedSpec {
    /// The default spec for a seed mode on a `rows` x `cols` board.
    ///
    /// Curated patterns keep their offsets, so a board too small for them
    /// fails to build rather than being clipped.
    pub fn for_mode(mode: SeedMode, rows: usize, cols: usize) -> Self {
        match mode {
            SeedMode::Random => SeedSpec::Random {
                rows,
                cols,
                density: RANDOM_DENSITY,
            },
            SeedMode::Curated => SeedSpec::Layout(Layout {
                rows,
                cols,
                ..Layout::curated()
            }),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            SeedSpec::Random { rows, cols, .. } => (*rows, *cols),
            SeedSpec::Layout(layout) => (layout.rows, layout.cols),
        }
    }

    /// Build a fresh board.
    pub fn build(&self, rng: &mut SimpleRng) -> LifeResult<Grid> {
        match self {
            SeedSpec::Random {
                rows,
                cols,
                density,
            } => random_grid(*rows, *cols, *density, rng),
            SeedSpec::Layout(layout) => seed_layout(layout, rng),
        }
    }
}

impl Default for SeedSpec {
    fn default() -> Self {
        Self::for_mode(SeedMode::Curated, DEFAULT_ROWS, DEFAULT_COLS)
    }
}

//! Seeding - building the initial board
//!
//! Every seeding function takes its parameters explicitly and returns a
//! freshly allocated [`Grid`]. Boards come in two flavors:
//!
//! - a fully random board with a given live-cell density
//! - a [`Layout`]: named patterns at fixed offsets plus random patches
//!
//! Layouts deserialize from TOML, so alternative boards (other offsets,
//! other densities) are data rather than code.

use serde::Deserialize;

use tui_life_types::{DEFAULT_COLS, DEFAULT_ROWS, PATCH_DENSITY};

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;
use crate::pattern::PatternKind;
use crate::rng::SimpleRng;

/// A named pattern with its top-left corner at (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Placement {
    pub pattern: PatternKind,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(pattern: PatternKind, row: usize, col: usize) -> Self {
        Self { pattern, row, col }
    }
}

/// A rectangle filled at random, overwriting whatever was there.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RandomPatch {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
    #[serde(default = "default_patch_density")]
    pub density: f64,
}

fn default_patch_density() -> f64 {
    PATCH_DENSITY
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

/// Description of a seeded board.
///
/// Placements are applied in order, then patches; later writes win.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layout {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub patches: Vec<RandomPatch>,
}

impl Layout {
    /// A layout with no patterns.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            placements: Vec::new(),
            patches: Vec::new(),
        }
    }

    /// The curated 55x55 board: a glider gun near the bottom, gliders in the
    /// top corners, the plus figure, a spaceship and a random patch.
    pub fn curated() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            placements: vec![
                Placement::new(PatternKind::GliderGun, 40, 5),
                Placement::new(PatternKind::Glider, 1, 1),
                Placement::new(PatternKind::ReverseGlider, 5, 51),
                Placement::new(PatternKind::Simple, 23, 15),
                Placement::new(PatternKind::Spaceship, 28, 28),
            ],
            patches: vec![RandomPatch {
                row: 20,
                col: 30,
                rows: 10,
                cols: 20,
                density: PATCH_DENSITY,
            }],
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn with_patch(mut self, patch: RandomPatch) -> Self {
        self.patches.push(patch);
        self
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::curated()
    }
}

fn check_density(density: f64) -> LifeResult<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LifeError::InvalidDensity(density))
    }
}

/// A board where each cell is independently alive with probability `density`.
pub fn random_grid(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut SimpleRng,
) -> LifeResult<Grid> {
    check_density(density)?;
    let mut grid = Grid::new(rows, cols)?;
    for row in 0..rows {
        for col in 0..cols {
            grid.set(row, col, rng.chance(density));
        }
    }
    Ok(grid)
}

/// Build the board described by `layout`.
///
/// Fails with [`LifeError::PlacementOutOfBounds`] if any pattern or patch
/// does not fit; patterns are never clipped.
pub fn seed_layout(layout: &Layout, rng: &mut SimpleRng) -> LifeResult<Grid> {
    let mut grid = Grid::new(layout.rows, layout.cols)?;

    for placement in &layout.placements {
        let pattern = placement.pattern.grid()?;
        grid.place(&pattern, placement.row, placement.col)?;
    }

    for patch in &layout.patches {
        check_density(patch.density)?;
        grid.check_fits(patch.row, patch.col, patch.rows, patch.cols)?;
        for r in 0..patch.rows {
            for c in 0..patch.cols {
                grid.set(patch.row + r, patch.col + c, rng.chance(patch.density));
            }
        }
    }

    Ok(grid)
}

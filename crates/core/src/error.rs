//! Error types for grid construction, seeding and stepping.

use thiserror::Error;

/// Errors raised by the simulation core.
///
/// All of these are caller mistakes (malformed inputs), not conditions
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// The two generation buffers do not have the same dimensions.
    #[error("shape mismatch: current grid is {}x{}, next grid is {}x{}", current.0, current.1, next.0, next.1)]
    ShapeMismatch {
        current: (usize, usize),
        next: (usize, usize),
    },

    /// A pattern or random patch does not fit at the requested offset.
    #[error(
        "placement of {rows}x{cols} at ({row}, {col}) does not fit in a {grid_rows}x{grid_cols} grid"
    )]
    PlacementOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },

    /// A grid needs at least one row and one column.
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// The cell count does not fit in memory.
    #[error("grid of {rows}x{cols} cells is too large")]
    GridTooLarge { rows: usize, cols: usize },

    /// Pattern rows have different lengths.
    #[error("pattern row {row} has a different length than row 0")]
    RaggedPattern { row: usize },

    /// Density is not a probability.
    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),
}

/// Result type for core operations.
pub type LifeResult<T> = Result<T, LifeError>;

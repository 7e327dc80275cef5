//! Generation stepper - applies the B3/S23 rule to a whole grid
//!
//! The successor is written into a separate buffer. Reading and writing the
//! same grid would feed already-updated cells into the neighbor counts of
//! cells not yet visited.

use crate::error::{LifeError, LifeResult};
use crate::grid::{count_live_neighbors, Grid};

/// Next state of a single cell given its current state and live neighbor count.
///
/// - fewer than 2 or more than 3 neighbors: dies (under/overpopulation)
/// - exactly 3 neighbors and dead: born
/// - otherwise: unchanged (survival on 2 or 3, or staying dead)
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        0 | 1 => false,
        2 => alive,
        3 => true,
        _ => false,
    }
}

/// Write the generation following `current` into `next`.
///
/// `current` is only read and `next` is only written, so every cell of
/// `next` reflects the rule applied to the pre-call `current`. Grids of
/// different shapes are rejected before anything is written.
pub fn compute_next_generation(current: &Grid, next: &mut Grid) -> LifeResult<()> {
    if current.shape() != next.shape() {
        return Err(LifeError::ShapeMismatch {
            current: current.shape(),
            next: next.shape(),
        });
    }

    let (rows, cols) = current.shape();
    for row in 0..rows {
        for col in 0..cols {
            let n = count_live_neighbors(row as isize, col as isize, current);
            let alive = current.get(row, col).unwrap_or(false);
            next.set(row, col, next_state(alive, n));
        }
    }
    Ok(())
}

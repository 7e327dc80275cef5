//! Grid module - a toroidal board of live and dead cells
//!
//! Cells are stored in a flat vector in row-major order (`row * cols + col`)
//! for cache locality. Coordinates are `(row, col)` with `row` growing
//! downwards and `col` growing to the right.
//!
//! The board is a torus: stepping past the last row or column lands on the
//! first one. Wrapped lookups take signed coordinates and reduce them with
//! Euclidean remainder, so any integer pair addresses a valid cell.

use arrayvec::ArrayVec;

use crate::error::{LifeError, LifeResult};

/// Offsets of the eight neighbors, row-major, centre excluded.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size toroidal grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(LifeError::GridTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Build a grid from rows of `0`/`1` values (any non-zero value is alive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let blinker = Grid::from_rows(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
    /// assert_eq!(blinker.shape(), (3, 3));
    /// assert_eq!(blinker.population(), 3);
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> LifeResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Self::new(height, width)?;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LifeError::RaggedPattern { row: r });
            }
            for (c, &v) in row.iter().enumerate() {
                grid.cells[r * width + c] = v != 0;
            }
        }
        Ok(grid)
    }

    /// Build a grid from text rows where `O` (or `#`) marks a live cell and
    /// anything else is dead.
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let glider = Grid::from_art(&["O..", ".OO", "OO."]).unwrap();
    /// assert_eq!(glider.live_cells(), vec![(0, 0), (1, 1), (1, 2), (2, 0), (2, 1)]);
    /// ```
    pub fn from_art(lines: &[&str]) -> LifeResult<Self> {
        let rows: Vec<Vec<u8>> = lines
            .iter()
            .map(|line| line.chars().map(|ch| matches!(ch, 'O' | '#') as u8).collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at (row, col).
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Reduce signed coordinates onto the torus.
    #[inline]
    pub fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.cols as isize) as usize,
        )
    }

    /// The eight wrapped neighbor coordinates of (row, col), in
    /// [`NEIGHBOR_OFFSETS`] order.
    ///
    /// The centre is reduced before the offset is applied, so extreme
    /// inputs cannot overflow. On grids narrower than three cells the same
    /// coordinate can appear more than once.
    pub fn neighbor_positions(&self, row: isize, col: isize) -> ArrayVec<(usize, usize), 8> {
        let (r, c) = self.wrap(row, col);
        let (r, c) = (r as isize, c as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| self.wrap(r + dr, c + dc))
            .collect()
    }

    /// Number of live neighbors of (row, col), in `0..=8`.
    #[inline]
    pub fn count_live_neighbors(&self, row: isize, col: isize) -> u8 {
        count_live_neighbors(row, col, self)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    /// Borrow one row of cells.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Copy of this grid flipped left to right.
    pub fn mirrored(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_exact_mut(self.cols) {
            row.reverse();
        }
        out
    }

    /// Copy `pattern` into this grid with its top-left corner at (row, col).
    ///
    /// Both live and dead pattern cells are written. The pattern must fit
    /// without wrapping; otherwise nothing is written and
    /// [`LifeError::PlacementOutOfBounds`] is returned.
    pub fn place(&mut self, pattern: &Grid, row: usize, col: usize) -> LifeResult<()> {
        self.check_fits(row, col, pattern.rows, pattern.cols)?;

        for (dr, src) in pattern.iter_rows().enumerate() {
            let start = (row + dr) * self.cols + col;
            self.cells[start..start + pattern.cols].copy_from_slice(src);
        }
        Ok(())
    }

    /// Verify that a `rows` x `cols` block at (row, col) lies inside the grid.
    pub fn check_fits(&self, row: usize, col: usize, rows: usize, cols: usize) -> LifeResult<()> {
        let fits_rows = row.checked_add(rows).is_some_and(|end| end <= self.rows);
        let fits_cols = col.checked_add(cols).is_some_and(|end| end <= self.cols);
        if fits_rows && fits_cols {
            Ok(())
        } else {
            Err(LifeError::PlacementOutOfBounds {
                row,
                col,
                rows,
                cols,
                grid_rows: self.rows,
                grid_cols: self.cols,
            })
        }
    }
}

/// Count the live cells among the eight toroidal neighbors of (row, col).
///
/// Any integer coordinates are accepted; they are reduced modulo the grid
/// dimensions.
pub fn count_live_neighbors(row: isize, col: isize, grid: &Grid) -> u8 {
    grid.neighbor_positions(row, col)
        .iter()
        .filter(|&&(r, c)| grid.cells[r * grid.cols + c])
        .count() as u8
}

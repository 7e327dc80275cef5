//! Double-buffered generations
//!
//! Two grids of identical shape alternate between the "current" and "next"
//! roles. A step writes the successor into the non-current buffer and then
//! flips an index; nothing is copied or reallocated between steps.

use crate::error::LifeResult;
use crate::grid::Grid;
use crate::step::compute_next_generation;

/// A pair of grid buffers plus the index of the authoritative one.
#[derive(Debug, Clone)]
pub struct Generations {
    buffers: [Grid; 2],
    /// Index into `buffers` of the current generation
    current: usize,
    /// Completed steps since the seed
    generation: u64,
}

impl Generations {
    /// Take ownership of a seed grid and allocate its partner buffer.
    pub fn new(seed: Grid) -> Self {
        let mut spare = seed.clone();
        spare.clear();
        Self {
            buffers: [seed, spare],
            current: 0,
            generation: 0,
        }
    }

    /// The authoritative grid.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// Which buffer currently holds the authoritative grid (0 or 1).
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn shape(&self) -> (usize, usize) {
        self.current().shape()
    }

    pub fn population(&self) -> usize {
        self.current().population()
    }

    /// Advance one generation.
    pub fn step(&mut self) -> LifeResult<()> {
        let (front, back) = self.buffers.split_at_mut(1);
        let (current, next) = if self.current == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        compute_next_generation(current, next)?;

        self.current ^= 1;
        self.generation += 1;
        Ok(())
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: u64) -> LifeResult<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Give back the current grid, dropping the spare buffer.
    pub fn into_current(self) -> Grid {
        let [a, b] = self.buffers;
        if self.current == 0 {
            a
        } else {
            b
        }
    }
}

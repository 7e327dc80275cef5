//! Driver - the render / step / pause loop.
//!
//! The driver owns the double-buffered generations. For each iteration it
//! draws the current grid, advances one generation and lets the pacer wait.
//! It never touches a terminal directly; everything goes through a
//! [`DisplayDriver`].

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use tui_life_core::{Generations, Grid};
use tui_life_term::{render_row_into, DisplayDriver, Glyphs};
use tui_life_types::{DEFAULT_ITERATIONS, TICK_MS};

use crate::pacer::{Control, Pacer};

/// Run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of frames to show (each followed by one step).
    pub iterations: u32,
    /// Delay handed to the pacer after each step.
    pub delay: Duration,
    pub glyphs: Glyphs,
    /// Ask the display to fit the grid before the first frame.
    pub resize: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            delay: Duration::from_millis(TICK_MS),
            glyphs: Glyphs::default(),
            resize: true,
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames drawn.
    pub frames: u32,
    /// Generations computed since the seed.
    pub generation: u64,
    /// Live cells in the last frame drawn (the seed if none was).
    pub population: usize,
    /// The pacer ended the run before the iteration count was reached.
    pub stopped_early: bool,
}

pub struct Driver {
    config: DriverConfig,
    generations: Generations,
    /// Reused line buffer
    line: String,
}

impl Driver {
    pub fn new(seed: Grid, config: DriverConfig) -> Self {
        let cols = seed.cols();
        Self {
            config,
            generations: Generations::new(seed),
            line: String::with_capacity(cols * 4),
        }
    }

    /// Draw the current generation under an `Iteration N` header.
    pub fn render_frame<D: DisplayDriver>(&mut self, display: &mut D, iteration: u32) -> Result<()> {
        display.clear()?;
        display.write_line(&format!("Iteration {iteration}"))?;
        for row in self.generations.current().iter_rows() {
            self.line.clear();
            render_row_into(row, self.config.glyphs, &mut self.line);
            display.write_line(&self.line)?;
        }
        display.flush()
    }

    /// Show `iterations` frames, stepping after each one.
    pub fn run<D, P>(&mut self, display: &mut D, pacer: &mut P) -> Result<RunSummary>
    where
        D: DisplayDriver,
        P: Pacer,
    {
        let (rows, cols) = self.generations.shape();
        info!(
            rows,
            cols,
            iterations = self.config.iterations,
            delay_ms = self.config.delay.as_millis() as u64,
            population = self.generations.population(),
            "starting run"
        );

        if self.config.resize {
            display.resize(rows, cols)?;
        }

        let mut frames = 0;
        let mut shown_population = self.generations.population();
        let mut stopped_early = false;
        for iteration in 1..=self.config.iterations {
            self.render_frame(display, iteration)
                .with_context(|| format!("drawing iteration {iteration}"))?;
            frames = iteration;
            shown_population = self.generations.population();

            self.generations.step()?;
            debug!(
                generation = self.generations.generation(),
                population = self.generations.population(),
                "stepped"
            );

            if pacer.wait(self.config.delay)? == Control::Quit {
                stopped_early = iteration < self.config.iterations;
                break;
            }
        }

        let summary = RunSummary {
            frames,
            generation: self.generations.generation(),
            population: shown_population,
            stopped_early,
        };
        info!(
            frames = summary.frames,
            generation = summary.generation,
            population = summary.population,
            stopped_early = summary.stopped_early,
            "run finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacer::InstantPacer;
    use tui_life_term::PlainDisplay;

    fn config(iterations: u32) -> DriverConfig {
        DriverConfig {
            iterations,
            delay: Duration::ZERO,
            glyphs: Glyphs::ascii(),
            resize: true,
        }
    }

    #[test]
    fn renders_header_and_rows() {
        let grid = Grid::from_rows(&[[1, 0], [0, 0]]).unwrap();
        let mut driver = Driver::new(grid, config(1));
        let mut display = PlainDisplay::new(Vec::new());
        driver.render_frame(&mut display, 7).unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(text, "Iteration 7\n# . \n. . \n");
    }

    #[test]
    fn zero_iterations_draws_nothing() {
        let grid = Grid::new(3, 3).unwrap();
        let mut driver = Driver::new(grid, config(0));
        let mut display = PlainDisplay::new(Vec::new());
        let summary = driver.run(&mut display, &mut InstantPacer).unwrap();

        assert_eq!(summary.frames, 0);
        assert_eq!(summary.generation, 0);
        assert!(!summary.stopped_early);
        assert!(display.into_inner().is_empty());
    }
}

//! Display driver abstraction.
//!
//! The simulation never talks to a terminal directly. It draws through a
//! [`DisplayDriver`], which a real terminal, a plain writer or a test
//! buffer can implement.

use std::io::Write;

use anyhow::{Context, Result};

use tui_life_types::{CELL_WIDTH, MIN_RESIZE_COLS, RESIZE_EXTRA_ROWS};

/// Minimal set of screen operations needed to show generations.
pub trait DisplayDriver {
    /// Blank the screen and move to the top-left corner.
    fn clear(&mut self) -> Result<()>;

    /// Fit the screen to a grid of `rows` x `cols` cells.
    fn resize(&mut self, rows: usize, cols: usize) -> Result<()>;

    /// Print one line of text followed by a line break.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Push buffered output to the device.
    fn flush(&mut self) -> Result<()>;
}

/// Terminal size `(columns, rows)` that fits a grid of `rows` x `cols` cells.
///
/// Narrow grids still get a window wide enough for the header line, and a
/// few spare rows are kept for the header and shell prompt.
pub fn terminal_size_for(rows: usize, cols: usize) -> (u16, u16) {
    let cols = u16::try_from(cols).unwrap_or(u16::MAX).max(MIN_RESIZE_COLS);
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    (
        cols.saturating_mul(CELL_WIDTH),
        rows.saturating_add(RESIZE_EXTRA_ROWS),
    )
}

/// Writes frames as plain lines to any writer.
///
/// Clearing and resizing are no-ops, so consecutive frames follow each other.
/// Useful for piping output and for tests (`PlainDisplay<Vec<u8>>`).
pub struct PlainDisplay<W: Write> {
    out: W,
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayDriver for PlainDisplay<W> {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn resize(&mut self, _rows: usize, _cols: usize) -> Result<()> {
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.out
            .write_all(line.as_bytes())
            .and_then(|_| self.out.write_all(b"\n"))
            .context("writing frame line")
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flushing output")
    }
}

//! Text rendering of a grid.
//!
//! Each cell becomes two characters (glyph + separator), which roughly
//! compensates for the tall aspect ratio of terminal glyphs. This module is
//! pure (no I/O).

use tui_life_core::Grid;
use tui_life_types::{ALIVE_GLYPH, CELL_SEPARATOR, DEAD_GLYPH};

/// Characters used to draw cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
    pub separator: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: ALIVE_GLYPH,
            dead: DEAD_GLYPH,
            separator: CELL_SEPARATOR,
        }
    }
}

impl Glyphs {
    /// Plain ASCII glyphs (`#` for live cells), for terminals without
    /// unicode fonts.
    pub fn ascii() -> Self {
        Self {
            alive: '#',
            ..Self::default()
        }
    }
}

/// Append one row of cells to `out`, without a line terminator.
pub fn render_row_into(row: &[bool], glyphs: Glyphs, out: &mut String) {
    for &alive in row {
        out.push(if alive { glyphs.alive } else { glyphs.dead });
        out.push(glyphs.separator);
    }
}

/// Render a grid into an existing string, replacing its contents.
///
/// Callers can reuse the same `String` every frame.
pub fn render_into(grid: &Grid, glyphs: Glyphs, out: &mut String) {
    out.clear();
    for row in grid.iter_rows() {
        render_row_into(row, glyphs, out);
        out.push('\n');
    }
}

/// Render a grid as one `\n`-terminated line per row.
///
/// # Examples
///
/// ```
/// use tui_life_core::Grid;
/// use tui_life_term::{render_text, Glyphs};
///
/// let grid = Grid::from_rows(&[[1, 0], [0, 0]]).unwrap();
/// assert_eq!(render_text(&grid, Glyphs::ascii()), "# . \n. . \n");
/// ```
pub fn render_text(grid: &Grid, glyphs: Glyphs) -> String {
    let (rows, cols) = grid.shape();
    // Glyphs may be multi-byte; size for the common case.
    let mut out = String::with_capacity(rows * (cols * 4 + 1));
    render_into(grid, glyphs, &mut out);
    out
}

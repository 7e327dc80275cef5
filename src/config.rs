//! Run configuration: layout files and seed selection.
//!
//! Board layouts can be kept in TOML files:
//!
//! ```toml
//! rows = 40
//! cols = 60
//!
//! [[placements]]
//! pattern = "glider-gun"
//! row = 2
//! col = 2
//!
//! [[patches]]
//! row = 20
//! col = 20
//! rows = 10
//! cols = 10
//! density = 0.3
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::Layout;
use crate::engine::SeedSpec;
use crate::types::SeedMode;

/// Parse a layout from TOML text.
pub fn parse_layout(text: &str) -> Result<Layout> {
    let layout: Layout = toml::from_str(text)?;
    Ok(layout)
}

/// Read and parse a layout file.
pub fn load_layout(path: &Path) -> Result<Layout> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading layout file {}", path.display()))?;
    parse_layout(&text).with_context(|| format!("parsing layout file {}", path.display()))
}

/// Decide how the first generation is built.
///
/// A layout file wins over the seed mode. `density` overrides the random
/// board density, or the density of every random patch of a layout.
pub fn seed_spec(
    mode: SeedMode,
    rows: usize,
    cols: usize,
    density: Option<f64>,
    layout: Option<Layout>,
) -> SeedSpec {
    let spec = match layout {
        Some(layout) => SeedSpec::Layout(layout),
        None => SeedSpec::for_mode(mode, rows, cols),
    };

    let Some(density) = density else {
        return spec;
    };

    match spec {
        SeedSpec::Random { rows, cols, .. } => SeedSpec::Random {
            rows,
            cols,
            density,
        },
        SeedSpec::Layout(mut layout) => {
            for patch in &mut layout.patches {
                patch.density = density;
            }
            SeedSpec::Layout(layout)
        }
    }
}

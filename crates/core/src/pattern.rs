//! Named seed patterns
//!
//! Small sub-grids with well-known behavior, used to build curated boards and
//! as test fixtures:
//!
//! - **Glider**: translates one cell diagonally every 4 generations
//! - **Reverse glider**: the glider mirrored left to right
//! - **Simple**: a plus-shaped figure that blooms into a larger ring
//! - **Spaceship**: a lightweight spaceship heading sideways
//! - **Glider gun**: Gosper's gun, emits a glider every 30 generations
//! - **Blinker**: period-2 oscillator

use serde::Deserialize;

use crate::error::LifeResult;
use crate::grid::Grid;

const GLIDER: [&str; 3] = [
    "O..",
    ".OO",
    "OO.",
];

const SIMPLE: [&str; 3] = [
    ".O.",
    "OOO",
    ".O.",
];

const SPACESHIP: [&str; 4] = [
    "..OO.",
    "OO.OO",
    "OOOO.",
    ".OO..",
];

const GLIDER_GUN: [&str; 9] = [
    "........................O...........",
    "......................O.O...........",
    "............OO......OO............OO",
    "...........O...O....OO............OO",
    "OO........O.....O...OO..............",
    "OO........O...O.OO....O.O...........",
    "..........O.....O.......O...........",
    "...........O...O....................",
    "............OO......................",
];

const BLINKER: [&str; 1] = ["OOO"];

/// Built-in pattern names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Glider,
    ReverseGlider,
    Simple,
    Spaceship,
    GliderGun,
    Blinker,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Glider,
        PatternKind::ReverseGlider,
        PatternKind::Simple,
        PatternKind::Spaceship,
        PatternKind::GliderGun,
        PatternKind::Blinker,
    ];

    /// Build a fresh grid holding exactly this pattern.
    pub fn grid(&self) -> LifeResult<Grid> {
        match self {
            PatternKind::Glider => Grid::from_art(&GLIDER),
            PatternKind::ReverseGlider => Grid::from_art(&GLIDER).map(|g| g.mirrored()),
            PatternKind::Simple => Grid::from_art(&SIMPLE),
            PatternKind::Spaceship => Grid::from_art(&SPACESHIP),
            PatternKind::GliderGun => Grid::from_art(&GLIDER_GUN),
            PatternKind::Blinker => Grid::from_art(&BLINKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_build() {
        for kind in PatternKind::ALL {
            let grid = kind.grid().unwrap();
            assert!(grid.population() > 0, "{kind:?} is empty");
        }
    }

    #[test]
    fn test_pattern_shapes() {
        assert_eq!(PatternKind::Glider.grid().unwrap().shape(), (3, 3));
        assert_eq!(PatternKind::Simple.grid().unwrap().shape(), (3, 3));
        assert_eq!(PatternKind::Spaceship.grid().unwrap().shape(), (4, 5));
        assert_eq!(PatternKind::GliderGun.grid().unwrap().shape(), (9, 36));
        assert_eq!(PatternKind::Blinker.grid().unwrap().shape(), (1, 3));
    }

    #[test]
    fn test_glider_matches_rows() {
        let expected = Grid::from_rows(&[[1, 0, 0], [0, 1, 1], [1, 1, 0]]).unwrap();
        assert_eq!(PatternKind::Glider.grid().unwrap(), expected);
    }

    #[test]
    fn test_reverse_glider_is_mirror() {
        let expected = Grid::from_rows(&[[0, 0, 1], [1, 1, 0], [0, 1, 1]]).unwrap();
        assert_eq!(PatternKind::ReverseGlider.grid().unwrap(), expected);
    }

    #[test]
    fn test_glider_gun_population() {
        assert_eq!(PatternKind::GliderGun.grid().unwrap().population(), 36);
    }
}

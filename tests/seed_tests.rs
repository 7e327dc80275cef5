//! Seeding tests - random boards, curated layout and layout files

use tui_life::config::{parse_layout, seed_spec};
use tui_life::core::{seed_layout, Grid, Layout, LifeError, PatternKind, SimpleRng};
use tui_life::engine::SeedSpec;
use tui_life::types::{SeedMode, DEFAULT_COLS, DEFAULT_ROWS};

fn pattern_present(board: &Grid, kind: PatternKind, row: usize, col: usize) -> bool {
    let pattern = kind.grid().unwrap();
    pattern.live_cells().into_iter().all(|(r, c)| board.get(row + r, col + c) == Some(true))
}

#[test]
fn test_curated_places_every_pattern() {
    let board = seed_layout(&Layout::curated(), &mut SimpleRng::new(5)).unwrap();
    assert_eq!(board.shape(), (DEFAULT_ROWS, DEFAULT_COLS));

    assert!(pattern_present(&board, PatternKind::GliderGun, 40, 5));
    assert!(pattern_present(&board, PatternKind::Glider, 1, 1));
    assert!(pattern_present(&board, PatternKind::ReverseGlider, 5, 51));
    assert!(pattern_present(&board, PatternKind::Simple, 23, 15));
}

#[test]
fn test_curated_random_patch_stays_in_its_rectangle() {
    let with_patch = seed_layout(&Layout::curated(), &mut SimpleRng::new(11)).unwrap();
    let mut without = Layout::curated();
    without.patches.clear();
    let base = seed_layout(&without, &mut SimpleRng::new(11)).unwrap();

    for r in 0..DEFAULT_ROWS {
        for c in 0..DEFAULT_COLS {
            let in_patch = (20..30).contains(&r) && (30..50).contains(&c);
            if !in_patch {
                assert_eq!(with_patch.get(r, c), base.get(r, c), "({r}, {c})");
            }
        }
    }
}

#[test]
fn test_same_seed_same_board() {
    for mode in [SeedMode::Random, SeedMode::Curated] {
        let spec = SeedSpec::for_mode(mode, DEFAULT_ROWS, DEFAULT_COLS);
        let a = spec.build(&mut SimpleRng::new(1234)).unwrap();
        let b = spec.build(&mut SimpleRng::new(1234)).unwrap();
        assert_eq!(a, b, "{mode:?}");
    }
}

#[test]
fn test_random_board_is_sparse() {
    let spec = SeedSpec::for_mode(SeedMode::Random, 100, 100);
    let board = spec.build(&mut SimpleRng::new(77)).unwrap();
    let population = board.population();
    // Density 1/8 of 10_000 cells
    assert!((800..1700).contains(&population), "population {population}");
}

#[test]
fn test_curated_on_small_board_fails() {
    let spec = SeedSpec::for_mode(SeedMode::Curated, 20, 20);
    let err = spec.build(&mut SimpleRng::new(1)).unwrap_err();
    assert!(matches!(err, LifeError::PlacementOutOfBounds { .. }), "{err:?}");
}

#[test]
fn test_empty_dimensions_rejected() {
    let spec = SeedSpec::for_mode(SeedMode::Random, 0, 10);
    assert_eq!(
        spec.build(&mut SimpleRng::new(1)),
        Err(LifeError::EmptyGrid { rows: 0, cols: 10 })
    );
}

#[test]
fn test_oversized_dimensions_rejected() {
    let spec = SeedSpec::for_mode(SeedMode::Random, usize::MAX / 2, 3);
    assert!(matches!(
        spec.build(&mut SimpleRng::new(1)),
        Err(LifeError::GridTooLarge { .. })
    ));
}

#[test]
fn test_layout_file_and_density_override() {
    let layout = parse_layout(
        r#"
        rows = 12
        cols = 12

        [[placements]]
        pattern = "blinker"
        row = 1
        col = 1

        [[patches]]
        row = 6
        col = 0
        rows = 6
        cols = 12
        "#,
    )
    .unwrap();

    let spec = seed_spec(SeedMode::Random, 99, 99, Some(0.0), Some(layout));
    assert_eq!(spec.shape(), (12, 12));

    let board = spec.build(&mut SimpleRng::new(3)).unwrap();
    assert_eq!(board.live_cells(), vec![(1, 1), (1, 2), (1, 3)]);
}

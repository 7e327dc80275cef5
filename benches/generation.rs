use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{compute_next_generation, count_live_neighbors, Generations, Grid, SimpleRng};
use tui_life::engine::SeedSpec;
use tui_life::term::{render_text, Glyphs};

fn curated_board() -> Grid {
    SeedSpec::default().build(&mut SimpleRng::new(12345)).unwrap()
}

fn bench_step(c: &mut Criterion) {
    let mut gens = Generations::new(curated_board());

    c.bench_function("step_curated_55x55", |b| {
        b.iter(|| {
            gens.step().unwrap();
        })
    });
}

fn bench_compute_into(c: &mut Criterion) {
    let board = curated_board();
    let mut next = Grid::new(board.rows(), board.cols()).unwrap();

    c.bench_function("compute_next_generation_55x55", |b| {
        b.iter(|| {
            compute_next_generation(black_box(&board), &mut next).unwrap();
        })
    });
}

fn bench_neighbor_count(c: &mut Criterion) {
    let board = curated_board();

    c.bench_function("count_live_neighbors_corner", |b| {
        b.iter(|| count_live_neighbors(black_box(0), black_box(0), &board))
    });
}

fn bench_render(c: &mut Criterion) {
    let board = curated_board();

    c.bench_function("render_text_55x55", |b| {
        b.iter(|| render_text(black_box(&board), Glyphs::default()))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_compute_into,
    bench_neighbor_count,
    bench_render
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_match::core::{
    clear_and_refill, find_matches, initialize_board, resolve_cascade, Board, SimpleRng,
};
use tile_match::engine::{CellCoord, Controller};
use tile_match::types::{GameConfig, PointerOffset, Position, MAX_CASCADE_STEPS};

fn full_board() -> Board {
    let config = GameConfig {
        width: 32,
        height: 32,
        ..GameConfig::default()
    };
    initialize_board(&config, &mut SimpleRng::new(12345))
}

fn bench_find_matches(c: &mut Criterion) {
    let board = full_board();
    c.bench_function("find_matches_32x32", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });
}

fn bench_clear_and_refill(c: &mut Criterion) {
    let board = full_board();
    let matches = find_matches(&board);
    let mut rng = SimpleRng::new(7);
    c.bench_function("clear_and_refill_32x32", |b| {
        b.iter(|| clear_and_refill(black_box(&board), black_box(&matches), &mut rng))
    });
}

fn bench_resolve_cascade(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(99);
    c.bench_function("deal_and_resolve_6x5", |b| {
        b.iter(|| {
            let board = initialize_board(&config, &mut rng);
            resolve_cascade(board, &mut rng, MAX_CASCADE_STEPS)
        })
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut game = Controller::new(GameConfig {
        seed: Some(1),
        ..GameConfig::default()
    });
    game.settle();

    c.bench_function("grab_swap_release_settle", |b| {
        b.iter(|| {
            game.grab(Position::new(2, 2), PointerOffset::default());
            game.drag_to(black_box(CellCoord::new(2, 3)));
            game.release();
            game.settle();
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_clear_and_refill,
    bench_resolve_cascade,
    bench_drag_gesture
);
criterion_main!(benches);

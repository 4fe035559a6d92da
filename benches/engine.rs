use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gauss_cards::{Puzzle, PuzzleConfig};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| {
        b.iter(|| Puzzle::new(PuzzleConfig::default(), black_box(42)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let puzzle = Puzzle::new(PuzzleConfig::default(), 42).unwrap();

    c.bench_function("legal_moves", |b| b.iter(|| black_box(puzzle.legal_moves())));
}

fn bench_hint(c: &mut Criterion) {
    let puzzle = Puzzle::new(PuzzleConfig::default(), 42).unwrap();

    c.bench_function("hint", |b| b.iter(|| black_box(puzzle.hint())));
}

fn bench_apply_hint(c: &mut Criterion) {
    let mut puzzle = Puzzle::new(PuzzleConfig::default(), 42).unwrap();

    c.bench_function("apply_hinted_move", |b| {
        b.iter(|| {
            let mut fork = puzzle.fork();
            if let Some(mv) = fork.hint() {
                for id in mv.clicks() {
                    fork.select_card(id);
                }
            }
            black_box(fork.moves())
        })
    });
}

fn bench_fork(c: &mut Criterion) {
    let mut puzzle = Puzzle::new(PuzzleConfig::default(), 42).unwrap();

    c.bench_function("fork", |b| b.iter(|| black_box(puzzle.fork())));
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves,
    bench_hint,
    bench_apply_hint,
    bench_fork
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Game};
use blockfall::types::{PieceKind, Rgb};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.new_game();
    let mut now = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            if game.is_game_over() {
                game.new_game();
            }
            game.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Rgb::from_hex(0x00f0f0);
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set_cell(row, col, color);
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_soft_drop(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.new_game();

    c.bench_function("soft_drop", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.new_game();
            }
            game.soft_drop();
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let game = Game::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| game.spawn_piece(black_box(PieceKind::I)))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.new_game();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            game.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.new_game();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_soft_drop,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);

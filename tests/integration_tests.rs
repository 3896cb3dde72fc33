//! Integration tests for the game controller: full runs through the public API

use blockfall::core::{tetromino, ActivePiece, Game, GravityCurve, Phase};
use blockfall::types::{Command, PieceKind, Rgb, BOARD_WIDTH, DIFFICULTY_THRESHOLDS_MS};

const GRAY: Rgb = Rgb::new(128, 128, 128);

fn running(seed: u32) -> Game {
    let mut game = Game::new(seed);
    game.new_game();
    game
}

fn fill_rows_except(game: &mut Game, rows: std::ops::Range<i8>, gaps: &[i8]) {
    for row in rows {
        for col in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&col) {
                game.board_mut().set_cell(row, col, GRAY);
            }
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(12345);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.active().is_none());

    game.new_game();
    assert_eq!(game.phase(), Phase::Running);
    assert!(game.active().is_some());
    assert!(!game.is_game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 0);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = running(99);
    let mut b = running(99);

    for _ in 0..200 {
        assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
        assert_eq!(a.next_piece_kind(), b.next_piece_kind());
        a.soft_drop();
        b.soft_drop();
    }
    assert_eq!(a.board_snapshot(), b.board_snapshot());
}

// Scenario A: an O on an empty board falls twenty rows, then locks.
#[test]
fn test_o_piece_drops_twenty_rows_then_locks() {
    let mut game = running(1);
    game.set_next_kind(PieceKind::T);
    game.set_active(game.spawn_piece(PieceKind::O));

    for _ in 0..20 {
        assert!(game.soft_drop());
        assert_eq!(game.active().unwrap().kind, PieceKind::O);
    }
    assert_eq!(game.active().unwrap().row, 18);

    // 21st step locks and promotes the next piece.
    assert!(game.soft_drop());
    let color = tetromino(PieceKind::O).color();
    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(game.board().get(row, col), Some(Some(color)));
    }
    assert_eq!(game.board().filled_count(), 4);
    assert_eq!(game.active().unwrap(), game.spawn_piece(PieceKind::T));
    assert_eq!(game.score(), 0);
}

// Scenario B: locking into a near-full row clears it for ten points.
#[test]
fn test_completing_a_row_scores_ten() {
    let mut game = running(2);
    fill_rows_except(&mut game, 19..20, &[4, 5]);
    game.set_next_kind(PieceKind::S);
    game.set_active(game.spawn_piece(PieceKind::O));

    while game.active().map(|p| p.kind) == Some(PieceKind::O) {
        game.soft_drop();
    }

    assert_eq!(game.score(), 10);
    assert_eq!(game.lines_cleared(), 1);
    // Only the upper half of the O remains, now on the floor.
    assert_eq!(game.board().filled_count(), 2);
    assert!(game.board().get(19, 4).unwrap().is_some());
    assert!(game.board().get(19, 0).unwrap().is_none());
}

#[test]
fn test_score_is_ten_per_row_in_one_lock() {
    for k in 1..=4i8 {
        let mut game = running(4);
        fill_rows_except(&mut game, (20 - k)..20, &[0]);
        // Vertical I in column 0, bottom cell on the floor.
        game.set_active(ActivePiece {
            kind: PieceKind::I,
            rotation: 1,
            row: 16,
            col: -2,
        });

        assert!(game.soft_drop());
        assert_eq!(game.score(), 10 * k as u32, "k = {}", k);
        assert_eq!(game.lines_cleared(), k as u32);
        assert_eq!(game.board().filled_count(), 4 - k as usize);
    }
}

#[test]
fn test_score_is_always_a_multiple_of_ten() {
    let mut game = running(2024);
    let mut now = 0;
    while !game.is_game_over() && now < 2_000_000 {
        match (now / 7) % 4 {
            0 => game.move_left(),
            1 => game.rotate(),
            2 => game.move_right(),
            _ => game.soft_drop(),
        };
        game.tick(now);
        assert_eq!(game.score() % 10, 0);
        now += 50;
    }
}

// Scenario C: rotation against the left wall.
#[test]
fn test_rotation_against_left_wall() {
    let mut game = running(5);
    game.set_active(ActivePiece {
        kind: PieceKind::T,
        rotation: 3,
        row: 5,
        col: -1,
    });
    assert!(game.rotate());
    let piece = game.active().unwrap();
    assert_eq!((piece.rotation, piece.col), (0, 0));

    let stuck = ActivePiece {
        kind: PieceKind::I,
        rotation: 1,
        row: 5,
        col: -2,
    };
    game.set_active(stuck);
    assert!(!game.rotate());
    assert_eq!(game.active().unwrap(), stuck);
}

// Scenario D: a piece that locks with cells above the grid ends the game.
#[test]
fn test_top_out_freezes_game_until_new_game() {
    let mut game = running(6);
    // Tower under the spawn columns, no complete rows.
    for row in 0..20 {
        game.board_mut().set_cell(row, 4, GRAY);
        game.board_mut().set_cell(row, 5, GRAY);
    }
    game.set_active(game.spawn_piece(PieceKind::O));

    assert!(game.soft_drop());
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.active().is_none());

    let board = game.board_snapshot();
    game.tick(0);
    game.tick(1_000_000);
    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::Rotate,
        Command::SoftDrop,
    ] {
        assert!(!game.apply(command));
    }
    assert_eq!(game.board_snapshot(), board);
    assert_eq!(game.score(), 0);
    assert!(game.is_game_over());

    assert!(game.apply(Command::NewGame));
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.board().filled_count(), 0);
}

// Scenario E: gravity speeds up at every threshold, then holds.
#[test]
fn test_gravity_speeds_up_across_thresholds() {
    let curve = GravityCurve::default();
    let mut last = curve.interval_at(0);
    assert_eq!(last, 1000);

    for &t in DIFFICULTY_THRESHOLDS_MS.iter() {
        assert_eq!(curve.interval_at(t), last, "on threshold {}", t);
        let next = curve.interval_at(t + 1);
        assert!(next < last, "after threshold {}", t);
        last = next;
    }

    assert_eq!(last, 100);
    assert_eq!(curve.interval_at(110_000), 100);
    assert_eq!(curve.interval_at(u64::MAX), 100);
}

#[test]
fn test_game_interval_follows_run_time() {
    let mut game = running(8);
    // Three gravity steps from mid-board cannot lock or top out.
    game.set_next_kind(PieceKind::T);
    game.set_active(ActivePiece::new(PieceKind::O, 5, 4));
    game.tick(1_000);
    assert_eq!(game.gravity_interval_ms(), 1000);

    // Elapsed time is measured from the first tick.
    game.tick(11_000);
    assert_eq!(game.gravity_interval_ms(), 1000);
    game.tick(11_001);
    assert_eq!(game.gravity_interval_ms(), 900);
    assert_eq!(game.level(), 1);

    assert!(game.tick(111_000).stepped);
    assert!(!game.is_game_over());
    assert_eq!(game.active().unwrap().row, 7);
    assert_eq!(game.gravity_interval_ms(), 100);
    assert_eq!(game.level(), 9);
}

#[test]
fn test_new_game_resets_clock_and_score() {
    let mut game = running(10);
    fill_rows_except(&mut game, 19..20, &[4, 5]);
    game.set_active(game.spawn_piece(PieceKind::O));
    while game.score() == 0 {
        game.soft_drop();
    }
    game.tick(0);
    game.tick(50_000);
    assert!(game.gravity_interval_ms() < 1000);

    game.new_game();
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines_cleared(), 0);
    assert_eq!(game.gravity_interval_ms(), 1000);
    // First tick after a reset only restarts the clock.
    assert!(!game.tick(60_000).stepped);
    assert_eq!(game.gravity_interval_ms(), 1000);
}

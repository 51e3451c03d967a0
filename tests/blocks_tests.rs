//! Block-stacking game through the public API.

use std::time::Instant;

use tui_arcade::blocks::{BlocksAction, BlocksGame, GRID_COLS, GRID_ROWS};

#[test]
fn fresh_game_has_one_active_piece_near_the_top() {
    let game = BlocksGame::new(42);
    let snap = game.snapshot();
    let filled: Vec<(usize, usize)> = (0..GRID_ROWS as usize)
        .flat_map(|y| (0..GRID_COLS as usize).map(move |x| (x, y)))
        .filter(|&(x, y)| snap.cells[y][x].is_some())
        .collect();
    // Every spawn shape has exactly four cells, all within the top two rows.
    assert_eq!(filled.len(), 4);
    assert!(filled.iter().all(|&(_, y)| y < 2));
    assert!(!snap.game_over);
    assert!(!snap.paused);
}

#[test]
fn same_seed_replays_the_same_session() {
    let mut a = BlocksGame::new(7);
    let mut b = BlocksGame::new(7);
    for _ in 0..2000 {
        a.apply(BlocksAction::SoftDrop);
        b.apply(BlocksAction::SoftDrop);
    }
    assert_eq!(a.score(), b.score());
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.active(), b.active());
}

#[test]
fn gravity_is_time_based_not_frame_based() {
    let mut game = BlocksGame::new(3);
    let y0 = game.active().y;
    // 999ms of tiny frames: no drop.
    for _ in 0..111 {
        game.step(9);
    }
    assert_eq!(game.active().y, y0);
    // One 1ms step crosses the 1000ms interval.
    game.step(1);
    assert_eq!(game.active().y, y0 + 1);
}

#[test]
fn pause_freezes_everything_until_resumed() {
    let mut game = BlocksGame::new(5);
    let before = game.active();
    game.apply(BlocksAction::Pause);
    game.step(10_000);
    game.apply(BlocksAction::SoftDrop);
    game.apply(BlocksAction::Rotate);
    assert_eq!(game.active(), before);
    assert!(game.snapshot().paused);

    game.apply(BlocksAction::Pause);
    game.apply(BlocksAction::SoftDrop);
    assert_eq!(game.active().y, before.y + 1);
}

#[test]
fn walls_never_let_the_piece_escape() {
    let mut game = BlocksGame::new(9);
    for _ in 0..GRID_COLS + 5 {
        game.apply(BlocksAction::MoveLeft);
    }
    assert!(game.active().x >= 0);
    for _ in 0..2 * GRID_COLS {
        game.apply(BlocksAction::MoveRight);
    }
    let piece = game.active();
    assert!(piece.x + piece.shape.cols() as i8 <= GRID_COLS as i8);
}

#[test]
fn restart_starts_a_clean_clocked_session() {
    let mut game = BlocksGame::new(11);
    game.start(Instant::now());
    for _ in 0..500 {
        game.apply(BlocksAction::SoftDrop);
    }
    game.restart(12, Instant::now());
    assert_eq!(game.score(), 0);
    assert_eq!(game.grid().occupied_rows(), 0);
    assert!(game.clock().is_running());
    assert!(!game.game_over());
}

#[test]
fn long_session_keeps_invariants() {
    let mut game = BlocksGame::new(1234);
    let mut locked_before = 0;
    for i in 0..5000 {
        match i % 5 {
            0 => game.apply(BlocksAction::MoveLeft),
            1 => game.apply(BlocksAction::Rotate),
            2 => game.apply(BlocksAction::MoveRight),
            _ => game.apply(BlocksAction::SoftDrop),
        }
        if game.game_over() {
            break;
        }
        let rows = game.grid().occupied_rows();
        // Settled rows only change at a lock or sweep, never exceed the grid.
        assert!(rows <= GRID_ROWS as usize);
        locked_before = locked_before.max(rows);
    }
    // Score only comes in 100-point multiples.
    assert_eq!(game.score() % 100, 0);
}

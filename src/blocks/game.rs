//! Block-stacking game state and per-frame rules.
//!
//! `Playing -> (line clear | piece lock) -> Playing`, with the terminal
//! `GameOver` reached when a freshly spawned piece immediately overlaps the
//! settled geometry. Gravity is driven by elapsed milliseconds rather than
//! frame count, so drop speed is independent of the host's frame rate.

use std::time::Instant;

use crate::clock::FrameClock;
use crate::rng::GameRng;

use super::grid::{Cell, Grid, GRID_COLS, GRID_ROWS};
use super::piece::{Piece, PieceKind, PIECE_KINDS};

/// Base gravity interval at score 0.
pub const BASE_DROP_MS: u32 = 1000;
/// Gravity never drops below this.
pub const DROP_FLOOR_MS: u32 = 100;
/// Interval tightens by this much per `SPEEDUP_SCORE` points.
pub const DROP_STEP_MS: u32 = 100;
pub const SPEEDUP_SCORE: u32 = 500;
/// Points per cleared row; simultaneous clears multiply.
pub const LINE_SCORE: u32 = 100;

/// Input-driven actions. Invalid attempts are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlocksAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Pause,
}

/// Read-only view for the render pass: the grid with the active piece
/// already composited in.
#[derive(Debug, Clone)]
pub struct BlocksSnapshot {
    pub cells: [[Cell; GRID_COLS as usize]; GRID_ROWS as usize],
    pub score: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct BlocksGame {
    grid: Grid,
    active: Piece,
    score: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    rng: GameRng,
    clock: FrameClock,
}

impl BlocksGame {
    pub fn new(seed: u32) -> Self {
        let mut rng = GameRng::new(seed);
        let active = Self::random_piece(&mut rng);
        Self {
            grid: Grid::new(),
            active,
            score: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            rng,
            clock: FrameClock::new(),
        }
    }

    fn random_piece(rng: &mut GameRng) -> Piece {
        let kind: PieceKind = PIECE_KINDS[rng.next_range(PIECE_KINDS.len() as u32) as usize];
        Piece::spawn(kind, GRID_COLS)
    }

    /// Arm the frame clock. Called by the host on mount.
    pub fn start(&mut self, now: Instant) {
        self.clock.start(now);
    }

    /// Cancel the frame clock. Called by the host on unmount; also invoked
    /// internally when the game reaches its terminal state.
    pub fn close(&mut self) {
        self.clock.cancel();
    }

    /// Discard all state and reinitialize with a fresh seed.
    pub fn restart(&mut self, seed: u32, now: Instant) {
        *self = Self::new(seed);
        self.start(now);
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval, derived from cumulative score.
    pub fn drop_interval_ms(&self) -> u32 {
        BASE_DROP_MS
            .saturating_sub((self.score / SPEEDUP_SCORE) * DROP_STEP_MS)
            .max(DROP_FLOOR_MS)
    }

    /// Handle one input action. Everything but `Pause` is ignored while
    /// paused or after game over.
    pub fn apply(&mut self, action: BlocksAction) {
        if self.game_over {
            return;
        }
        if let BlocksAction::Pause = action {
            self.paused = !self.paused;
            return;
        }
        if self.paused {
            return;
        }

        match action {
            BlocksAction::MoveLeft => self.try_shift(-1),
            BlocksAction::MoveRight => self.try_shift(1),
            BlocksAction::SoftDrop => self.gravity_step(),
            BlocksAction::Rotate => self.try_rotate(),
            BlocksAction::Pause => unreachable!(),
        }
    }

    fn try_shift(&mut self, dx: i8) {
        let mut moved = self.active;
        moved.x += dx;
        if self.grid.fits(&moved) {
            self.active = moved;
        }
    }

    /// Attempt a clockwise rotation; on any overlap the piece is left
    /// entirely unchanged (shape and position).
    fn try_rotate(&mut self) {
        let mut turned = self.active;
        turned.shape = turned.shape.rotated();
        if self.grid.fits(&turned) {
            self.active = turned;
        }
    }

    /// Advance the gravity timer by wall-clock milliseconds.
    pub fn step(&mut self, elapsed_ms: u32) {
        if self.paused || self.game_over {
            return;
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms >= self.drop_interval_ms() {
            self.gravity_step();
        }
    }

    /// Move the active piece down one row, locking it when blocked.
    fn gravity_step(&mut self) {
        let mut dropped = self.active;
        dropped.y += 1;

        if self.grid.fits(&dropped) {
            self.active = dropped;
        } else {
            self.lock_active();
        }
        self.drop_timer_ms = 0;
    }

    /// Merge the active piece into the grid, sweep full rows, and spawn the
    /// next piece. An immediately blocked spawn is game over.
    fn lock_active(&mut self) {
        self.grid.merge(&self.active);

        let cleared = self.grid.sweep();
        if cleared > 0 {
            self.score += cleared * LINE_SCORE;
        }

        self.active = Self::random_piece(&mut self.rng);
        if !self.grid.fits(&self.active) {
            self.game_over = true;
            self.clock.cancel();
        }
    }

    pub fn snapshot(&self) -> BlocksSnapshot {
        let mut cells = [[None; GRID_COLS as usize]; GRID_ROWS as usize];
        for y in 0..GRID_ROWS as usize {
            for x in 0..GRID_COLS as usize {
                cells[y][x] = self.grid.get(x as i8, y as i8).flatten();
            }
        }
        if !self.game_over {
            let color = self.active.kind.color();
            for (dx, dy) in self.active.shape.iter_filled() {
                let (x, y) = (self.active.x + dx, self.active.y + dy);
                if (0..GRID_COLS as i8).contains(&x) && (0..GRID_ROWS as i8).contains(&y) {
                    cells[y as usize][x as usize] = Some(color);
                }
            }
        }
        BlocksSnapshot {
            cells,
            score: self.score,
            drop_interval_ms: self.drop_interval_ms(),
            paused: self.paused,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::piece::BlockColor;
    use super::*;

    /// Replace the active piece with `kind` at the spawn position.
    fn force_piece(game: &mut BlocksGame, kind: PieceKind) {
        game.active = Piece::spawn(kind, GRID_COLS);
    }

    /// Soft-drop until the forced piece locks (a fresh spawn resets y to 0).
    fn drop_to_bottom(game: &mut BlocksGame) {
        for _ in 0..=GRID_ROWS {
            game.apply(BlocksAction::SoftDrop);
        }
    }

    fn shift_to(game: &mut BlocksGame, target_x: i8) {
        while game.active.x > target_x {
            game.apply(BlocksAction::MoveLeft);
        }
        while game.active.x < target_x {
            game.apply(BlocksAction::MoveRight);
        }
    }

    #[test]
    fn score_is_100_per_row_cleared_in_one_sweep() {
        let mut game = BlocksGame::new(1);
        // Fill two rows except the rightmost two columns, then drop an O
        // piece into the gap to complete both at once.
        for y in [18, 19] {
            for x in 0..8 {
                game.grid.set(x, y, Some(BlockColor::Green));
            }
        }
        force_piece(&mut game, PieceKind::O);
        shift_to(&mut game, 8);
        drop_to_bottom(&mut game);

        assert_eq!(game.score(), 200);
        assert_eq!(game.grid.occupied_rows(), 0);
    }

    #[test]
    fn blocked_rotation_leaves_shape_and_position_unchanged() {
        let mut game = BlocksGame::new(1);
        force_piece(&mut game, PieceKind::I);
        // Box the I piece in so a vertical rotation cannot fit.
        for x in 0..GRID_COLS as i8 {
            game.grid.set(x, 1, Some(BlockColor::Red));
        }
        let before = game.active;
        game.apply(BlocksAction::Rotate);
        assert_eq!(game.active, before);
    }

    #[test]
    fn wall_blocks_horizontal_movement_silently() {
        let mut game = BlocksGame::new(1);
        force_piece(&mut game, PieceKind::O);
        shift_to(&mut game, 0);
        game.apply(BlocksAction::MoveLeft);
        assert_eq!(game.active.x, 0);
    }

    #[test]
    fn drop_interval_tightens_with_score_and_floors() {
        let mut game = BlocksGame::new(1);
        assert_eq!(game.drop_interval_ms(), 1000);
        game.score = 500;
        assert_eq!(game.drop_interval_ms(), 900);
        game.score = 4500;
        assert_eq!(game.drop_interval_ms(), 100);
        game.score = 99_900;
        assert_eq!(game.drop_interval_ms(), 100);
    }

    #[test]
    fn gravity_uses_elapsed_time_not_frames() {
        let mut game = BlocksGame::new(1);
        let y0 = game.active.y;
        // Many tiny steps below the interval: no drop yet.
        for _ in 0..62 {
            game.step(16);
        }
        assert_eq!(game.active.y, y0);
        // One more pushes the accumulator past 1000ms.
        game.step(16);
        assert_eq!(game.active.y, y0 + 1);
    }

    #[test]
    fn pause_freezes_gravity_and_input_then_resumes() {
        let mut game = BlocksGame::new(1);
        let before = game.active;
        game.apply(BlocksAction::Pause);
        assert!(game.paused());

        game.step(5000);
        game.apply(BlocksAction::MoveLeft);
        assert_eq!(game.active, before);

        game.apply(BlocksAction::Pause);
        assert!(!game.paused());
        game.apply(BlocksAction::MoveLeft);
        assert_eq!(game.active.x, before.x - 1);
    }

    #[test]
    fn blocked_spawn_ends_game_and_cancels_clock() {
        let mut game = BlocksGame::new(1);
        game.start(Instant::now());
        // Wall off the spawn area (rows 0-1, columns 2-8) so no kind can
        // spawn, leaving the outer columns open so no row sweeps.
        for y in 0..2 {
            for x in 2..9 {
                game.grid.set(x, y, Some(BlockColor::Cyan));
            }
        }
        force_piece(&mut game, PieceKind::O);
        game.apply(BlocksAction::SoftDrop);

        assert!(game.game_over());
        assert!(!game.clock().is_running());
    }

    #[test]
    fn end_to_end_four_pieces_complete_one_row() {
        let mut game = BlocksGame::new(1);
        game.start(Instant::now());

        // O at columns 0-1, O at 2-3, J at 4-6, L at 7-9: the bottom row
        // fills exactly on the fourth lock, the row above stays partial.
        for (kind, x) in [
            (PieceKind::O, 0),
            (PieceKind::O, 2),
            (PieceKind::J, 4),
            (PieceKind::L, 7),
        ] {
            force_piece(&mut game, kind);
            shift_to(&mut game, x);
            drop_to_bottom(&mut game);
        }

        assert_eq!(game.score(), 100);
        // Row 0 is empty, and only the leftover top-row cells of the O/J/L
        // pieces survive, now settled on the bottom row.
        for x in 0..GRID_COLS as i8 {
            assert!(game.grid.is_open(x, 0));
        }
        assert_eq!(game.grid.occupied_rows(), 1);
        assert!(!game.grid.is_open(0, 19));
        assert!(!game.game_over());
    }

    #[test]
    fn restart_discards_state() {
        let mut game = BlocksGame::new(1);
        game.start(Instant::now());
        game.score = 700;
        game.grid.set(0, 19, Some(BlockColor::Red));

        game.restart(2, Instant::now());
        assert_eq!(game.score(), 0);
        assert_eq!(game.grid.occupied_rows(), 0);
        assert!(game.clock().is_running());
    }
}

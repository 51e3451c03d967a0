//! The settled-geometry grid for the block-stacking game.
//!
//! A fixed 10x20 field of cells, each empty or holding a color tag. The grid
//! is only mutated by the merge-and-sweep path that runs when a piece locks.
//! Flat row-major storage, (x, y) with y growing downward.

use super::piece::{BlockColor, Piece};

pub const GRID_COLS: u8 = 10;
pub const GRID_ROWS: u8 = 20;

const GRID_SIZE: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// A cell is empty or carries the color of the piece that settled there.
pub type Cell = Option<BlockColor>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_COLS as i8 || y < 0 || y >= GRID_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (GRID_COLS as usize) + (x as usize))
    }

    /// Cell at (x, y), or `None` out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Set a cell. Returns false out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True when every filled cell of `piece`'s shape, placed at (x, y),
    /// lands on an open grid cell.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .shape
            .iter_filled()
            .all(|(dx, dy)| self.is_open(piece.x + dx, piece.y + dy))
    }

    /// Copy a landed piece's cells into the grid. The piece value is dead
    /// after this; the caller replaces it with a fresh spawn.
    pub fn merge(&mut self, piece: &Piece) {
        let color = piece.kind.color();
        for (dx, dy) in piece.shape.iter_filled() {
            self.set(piece.x + dx, piece.y + dy, Some(color));
        }
    }

    pub fn row_full(&self, y: usize) -> bool {
        if y >= GRID_ROWS as usize {
            return false;
        }
        let start = y * GRID_COLS as usize;
        self.cells[start..start + GRID_COLS as usize]
            .iter()
            .all(|c| c.is_some())
    }

    /// Remove every fully-filled row, shifting everything above down and
    /// inserting empty rows at the top. Returns the number of rows cleared.
    pub fn sweep(&mut self) -> u32 {
        let width = GRID_COLS as usize;
        let mut cleared = 0;
        let mut y = GRID_ROWS as usize - 1;

        loop {
            if self.row_full(y) {
                // Drop every row above by one and blank row 0, then
                // re-examine the same y: a new row just moved into it.
                for row in (1..=y).rev() {
                    let src = (row - 1) * width;
                    let dst = row * width;
                    self.cells.copy_within(src..src + width, dst);
                }
                for cell in &mut self.cells[0..width] {
                    *cell = None;
                }
                cleared += 1;
            } else if y == 0 {
                break;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Number of rows containing at least one settled cell.
    pub fn occupied_rows(&self) -> usize {
        (0..GRID_ROWS as usize)
            .filter(|&y| {
                let start = y * GRID_COLS as usize;
                self.cells[start..start + GRID_COLS as usize]
                    .iter()
                    .any(|c| c.is_some())
            })
            .count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

//! Block-stacking puzzle: a 10x20 grid, seven falling piece kinds, and
//! score-driven gravity.

pub mod game;
pub mod grid;
pub mod piece;

pub use game::{BlocksAction, BlocksGame, BlocksSnapshot};
pub use grid::{Cell, Grid, GRID_COLS, GRID_ROWS};
pub use piece::{BlockColor, Piece, PieceKind, Shape, PIECE_KINDS};

//! Piece shapes for the block-stacking game.
//!
//! Unlike guideline Tetris there is no rotation-state table: a piece carries
//! its shape matrix and a rotation is computed on the fly by transposing the
//! matrix and reversing its rows (a 90° clockwise turn). A rotation that
//! would not fit is simply discarded.

/// Color tag for a settled or falling block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Green,
    Red,
}

impl BlockColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BlockColor::Cyan => (0x00, 0xf0, 0xf0),
            BlockColor::Yellow => (0xf0, 0xf0, 0x00),
            BlockColor::Purple => (0xa0, 0x00, 0xf0),
            BlockColor::Orange => (0xf0, 0xa0, 0x00),
            BlockColor::Blue => (0x00, 0x00, 0xf0),
            BlockColor::Green => (0x00, 0xf0, 0x00),
            BlockColor::Red => (0xf0, 0x00, 0x00),
        }
    }
}

/// The seven piece kinds, in shape-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::L,
    PieceKind::J,
    PieceKind::S,
    PieceKind::Z,
];

impl PieceKind {
    pub fn color(self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::Cyan,
            PieceKind::O => BlockColor::Yellow,
            PieceKind::T => BlockColor::Purple,
            PieceKind::L => BlockColor::Orange,
            PieceKind::J => BlockColor::Blue,
            PieceKind::S => BlockColor::Green,
            PieceKind::Z => BlockColor::Red,
        }
    }

    /// Spawn-orientation shape matrix.
    pub fn spawn_shape(self) -> Shape {
        match self {
            PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::L => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::J => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }
}

/// A small boolean matrix, at most 4x4, describing the occupied cells of a
/// piece in its current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; 4]; 4],
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= 4);
        let mut cells = [[false; 4]; 4];
        for (y, row) in rows.iter().enumerate() {
            debug_assert!(!row.is_empty() && row.len() <= 4);
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// 90° clockwise turn: transpose, then reverse each row.
    pub fn rotated(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            cells: [[false; 4]; 4],
        };
        for y in 0..self.rows as usize {
            for x in 0..self.cols as usize {
                out.cells[x][self.rows as usize - 1 - y] = self.cells[y][x];
            }
        }
        out
    }

    /// Iterate the (x, y) offsets of every filled cell.
    pub fn iter_filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.filled(x, y))
                .map(move |x| (x as i8, y as i8))
        })
    }
}

/// The single active falling piece. Ownership transfers to the grid when it
/// lands: its cells are copied in and the piece value is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn horizontally centered at the top row.
    pub fn spawn(kind: PieceKind, grid_cols: u8) -> Self {
        let shape = kind.spawn_shape();
        Self {
            kind,
            shape,
            x: (grid_cols / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }
}

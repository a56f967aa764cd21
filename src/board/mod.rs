//! Board representation for Gomoku

pub mod board;
pub mod history;


use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;
pub use history::{Move, MoveHistory};

/// Smallest supported board (2x2)
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest supported board (25x25)
pub const MAX_BOARD_SIZE: usize = 25;
/// Standard Gomoku board (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stone colors. Black is player one, White is player two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for Black and White
    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "Empty",
            Stone::Black => "Black",
            Stone::White => "White",
        };
        f.write_str(name)
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_BOARD_SIZE && (y as usize) < MAX_BOARD_SIZE);
        Self { x, y }
    }

    /// Flat index into a `size x size` grid
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx % size) as u8,
            y: (idx / size) as u8,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

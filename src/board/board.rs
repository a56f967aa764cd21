//! Board structure with move history

use super::history::{Move, MoveHistory};
use super::{Pos, Stone};
use crate::error::EmptyHistoryError;

/// Square game board.
///
/// Cells are stored row-major in a flat vector. The move history lives
/// alongside the grid so that its length always matches the number of
/// occupied cells when moves go through [`Board::commit`] and
/// [`Board::undo_last`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    history: MoveHistory,
}

impl Board {
    /// Create an empty board. Size limits are enforced by `GameConfig`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            history: MoveHistory::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `0 <= x < size` and `0 <= y < size`
    #[inline]
    pub fn is_valid_coordinate(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Convert raw input coordinates into a board position
    #[inline]
    pub fn to_pos(&self, x: i32, y: i32) -> Option<Pos> {
        if self.is_valid_coordinate(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Neighbour of `pos` offset by `(dx, dy)`, if on the board
    #[inline]
    pub fn step(&self, pos: Pos, dx: i32, dy: i32) -> Option<Pos> {
        self.to_pos(pos.x as i32 + dx, pos.y as i32 + dy)
    }

    /// Stone at raw coordinates. Off-board reads return `Empty`.
    #[inline]
    pub fn occupant(&self, x: i32, y: i32) -> Stone {
        self.to_pos(x, y).map_or(Stone::Empty, |pos| self.get(pos))
    }

    /// Get stone at position. Off-board reads return `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Set a cell without touching the history.
    /// Use `commit` for game moves.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board, the cell is occupied, or `stone`
    /// is `Empty`.
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        assert!(self.contains(pos), "place at {pos} is off a {size}x{size} board", size = self.size);
        assert!(stone.is_player(), "cannot place an Empty stone at {pos}");
        let idx = pos.to_index(self.size);
        assert!(
            self.cells[idx] == Stone::Empty,
            "place at {pos} would overwrite {occupant}",
            occupant = self.cells[idx]
        );
        self.cells[idx] = stone;
    }

    /// Reset a cell to `Empty` without touching the history
    pub fn clear(&mut self, pos: Pos) {
        if self.contains(pos) {
            let idx = pos.to_index(self.size);
            self.cells[idx] = Stone::Empty;
        }
    }

    /// Place a stone and record it in the history
    pub fn commit(&mut self, pos: Pos, stone: Stone) -> Move {
        self.place(pos, stone);
        self.history.append(pos, stone)
    }

    /// Pop the last move and empty its cell
    pub fn undo_last(&mut self) -> Result<Move, EmptyHistoryError> {
        let mv = self.history.undo_last()?;
        self.clear(mv.pos);
        Ok(mv)
    }

    /// Empty every cell and forget all moves
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
    }

    /// True when no moves have been committed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when every cell holds a committed move
    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() >= self.cells.len()
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Occupied cells, by scanning the grid
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Iterate over occupied positions in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_player())
            .map(move |(idx, &s)| (Pos::from_index(idx, self.size), s))
    }
}

//! Append-only move record

use serde::{Deserialize, Serialize};

use super::{Pos, Stone};
use crate::error::EmptyHistoryError;

/// A committed move. `index` is its position in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
    pub index: usize,
}

/// Ordered list of committed moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Record a move. Its index is the length before the push.
    pub fn append(&mut self, pos: Pos, stone: Stone) -> Move {
        let mv = Move {
            pos,
            stone,
            index: self.moves.len(),
        };
        self.moves.push(mv);
        mv
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Result<Move, EmptyHistoryError> {
        self.moves.last().copied().ok_or(EmptyHistoryError)
    }

    /// Remove and return the most recent move.
    ///
    /// The caller is responsible for clearing the board cell.
    pub fn undo_last(&mut self) -> Result<Move, EmptyHistoryError> {
        self.moves.pop().ok_or(EmptyHistoryError)
    }

    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index).copied()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_sequential_indices() {
        let mut history = MoveHistory::new();
        let first = history.append(Pos::new(0, 0), Stone::Black);
        let second = history.append(Pos::new(1, 0), Stone::White);
        assert_eq!(first.index, 0);
        assert_eq!(second.index, 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_last_on_empty_history() {
        let history = MoveHistory::new();
        assert_eq!(history.last(), Err(EmptyHistoryError));
    }

    #[test]
    fn test_undo_last_pops_in_reverse_order() {
        let mut history = MoveHistory::new();
        history.append(Pos::new(3, 4), Stone::Black);
        history.append(Pos::new(5, 6), Stone::White);

        let undone = history.undo_last().unwrap();
        assert_eq!(undone.pos, Pos::new(5, 6));
        assert_eq!(undone.stone, Stone::White);
        assert_eq!(history.last().unwrap().pos, Pos::new(3, 4));

        history.undo_last().unwrap();
        assert!(history.is_empty());
        assert_eq!(history.undo_last(), Err(EmptyHistoryError));
    }

    #[test]
    fn test_index_reused_after_undo() {
        let mut history = MoveHistory::new();
        history.append(Pos::new(0, 0), Stone::Black);
        history.append(Pos::new(1, 1), Stone::White);
        history.undo_last().unwrap();
        let replacement = history.append(Pos::new(2, 2), Stone::White);
        assert_eq!(replacement.index, 1);
    }

    #[test]
    fn test_get_and_clear() {
        let mut history = MoveHistory::new();
        history.append(Pos::new(7, 7), Stone::Black);
        assert_eq!(history.get(0).map(|m| m.pos), Some(Pos::new(7, 7)));
        assert_eq!(history.get(1), None);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.get(0), None);
    }
}

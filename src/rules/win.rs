//! Win condition checking
//!
//! A player wins by forming an unbroken line of at least `pieces_to_win`
//! stones through the stone they just placed. Overlines count as wins.
//! Only lines through the last move are scanned, so the check costs
//! O(K) per direction regardless of board size.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::error::InvalidWinCheck;

/// Standard Gomoku run length
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Line directions, scanned in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(dx, dy)` in the forward sense
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Rules for what counts as a win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinCondition {
    pub pieces_to_win: usize,
    pub check_horizontal: bool,
    pub check_vertical: bool,
    pub check_diagonal: bool,
    pub check_anti_diagonal: bool,
    pub name: String,
}

impl Default for WinCondition {
    fn default() -> Self {
        Self {
            pieces_to_win: DEFAULT_WIN_LENGTH,
            check_horizontal: true,
            check_vertical: true,
            check_diagonal: true,
            check_anti_diagonal: true,
            name: "Standard Gomoku".to_string(),
        }
    }
}

impl WinCondition {
    /// All four directions with a custom run length
    pub fn with_length(pieces_to_win: usize) -> Self {
        Self {
            pieces_to_win,
            name: format!("{pieces_to_win} in a row"),
            ..Self::default()
        }
    }

    pub fn checks(&self, direction: Direction) -> bool {
        match direction {
            Direction::Horizontal => self.check_horizontal,
            Direction::Vertical => self.check_vertical,
            Direction::Diagonal => self.check_diagonal,
            Direction::AntiDiagonal => self.check_anti_diagonal,
        }
    }

    pub fn enabled_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&d| self.checks(d))
    }
}

/// The full run that satisfied the win condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub direction: Direction,
    /// Contiguous cells from the backward end to the forward end
    pub cells: Vec<Pos>,
}

impl WinLine {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub winner: Stone,
    pub line: WinLine,
}

/// Collect the run of `stone` through `pos` along `direction`
pub fn run_through(board: &Board, pos: Pos, stone: Stone, direction: Direction) -> Vec<Pos> {
    let (dx, dy) = direction.delta();
    let mut backward = Vec::new();
    let mut cur = pos;
    while let Some(prev) = board.step(cur, -dx, -dy) {
        if board.get(prev) != stone {
            break;
        }
        backward.push(prev);
        cur = prev;
    }

    let mut line: Vec<Pos> = backward.into_iter().rev().collect();
    line.push(pos);

    cur = pos;
    while let Some(next) = board.step(cur, dx, dy) {
        if board.get(next) != stone {
            break;
        }
        line.push(next);
        cur = next;
    }
    line
}

/// Find a winning line through `pos` for whoever occupies it
pub fn find_win_at(
    board: &Board,
    pos: Pos,
    condition: &WinCondition,
) -> Result<Option<WinResult>, InvalidWinCheck> {
    if !board.contains(pos) {
        return Err(InvalidWinCheck::OutOfBounds {
            pos,
            size: board.size(),
        });
    }
    let stone = board.get(pos);
    if !stone.is_player() {
        return Err(InvalidWinCheck::Unoccupied { pos });
    }

    for direction in condition.enabled_directions() {
        let cells = run_through(board, pos, stone, direction);
        if cells.len() >= condition.pieces_to_win {
            return Ok(Some(WinResult {
                winner: stone,
                line: WinLine { direction, cells },
            }));
        }
    }
    Ok(None)
}

/// Evaluates the win condition after each move and remembers the last winner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinDetector {
    condition: WinCondition,
    last_result: Option<WinResult>,
}

impl WinDetector {
    pub fn new(condition: WinCondition) -> Self {
        Self {
            condition,
            last_result: None,
        }
    }

    #[inline]
    pub fn condition(&self) -> &WinCondition {
        &self.condition
    }

    /// True if the stone at `last_placed` completes a winning line
    pub fn check_for_win(&mut self, board: &Board, last_placed: Pos) -> Result<bool, InvalidWinCheck> {
        Ok(self.evaluate(board, last_placed)?.is_some())
    }

    /// Like `check_for_win`, but hands back the winning line
    pub fn evaluate(
        &mut self,
        board: &Board,
        last_placed: Pos,
    ) -> Result<Option<WinResult>, InvalidWinCheck> {
        let result = find_win_at(board, last_placed, &self.condition)?;
        if let Some(result) = &result {
            tracing::debug!(
                winner = %result.winner,
                direction = ?result.line.direction,
                run = result.line.len(),
                "winning line found"
            );
            self.last_result = Some(result.clone());
        }
        Ok(result)
    }

    /// Winner of the last positive check, `Empty` if none
    pub fn winner(&self) -> Stone {
        self.last_result.as_ref().map_or(Stone::Empty, |r| r.winner)
    }

    pub fn last_result(&self) -> Option<&WinResult> {
        self.last_result.as_ref()
    }

    pub fn reset(&mut self) {
        self.last_result = None;
    }
}

//! Error types for the rules core

use std::path::PathBuf;

use crate::board::{Pos, Stone};
use crate::lifecycle::LifecycleState;

/// Why a placement was rejected. None of these change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: Stone, actual: Stone },

    #[error("{pos} is already occupied by {occupant}")]
    CellOccupied { pos: Pos, occupant: Stone },

    #[error("placements are not accepted while {state}")]
    GameNotActive { state: LifecycleState },

    #[error("a placement needs a Black or White stone")]
    NoPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("no moves to undo")]
    NothingToUndo,

    #[error("undo is not available while {state}")]
    GameNotActive { state: LifecycleState },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("illegal lifecycle transition {from} -> {to}")]
    IllegalTransition {
        from: LifecycleState,
        to: LifecycleState,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("move history is empty")]
pub struct EmptyHistoryError;

/// A win check was asked about a cell that cannot hold the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWinCheck {
    #[error("win check at {pos} is off a {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("win check at {pos} found no stone")]
    Unoccupied { pos: Pos },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    BoardSize { size: usize, min: usize, max: usize },

    #[error("win length must be at least 1")]
    WinLength,

    #[error("starting player must be Black or White")]
    StartingPlayer,

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to access snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("move {index} cannot be replayed: {reason}")]
    InvalidMove { index: usize, reason: String },

    #[error("current player must be Black or White")]
    InvalidTurn,

    #[error("snapshot lifecycle {state} does not match its board")]
    Lifecycle { state: LifecycleState },
}

//! Outbound notifications for presentation layers
//!
//! The session queues events as state changes and the host drains them
//! once per frame (or after each call). Each transition is queued exactly
//! once, in the order it happened.

use serde::{Deserialize, Serialize};

use crate::board::{Pos, Stone};
use crate::lifecycle::{LifecycleChange, LifecycleState};
use crate::rules::WinLine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MoveCommitted {
        pos: Pos,
        stone: Stone,
        move_count: usize,
    },
    TurnChanged {
        player: Stone,
    },
    WinDetected {
        winner: Stone,
        line: WinLine,
    },
    /// Board filled without a winner
    DrawDetected,
    LifecycleChanged {
        from: LifecycleState,
        to: LifecycleState,
    },
    MoveUndone {
        pos: Pos,
        stone: Stone,
        move_count: usize,
    },
    GameReset,
}

impl From<LifecycleChange> for GameEvent {
    fn from(change: LifecycleChange) -> Self {
        GameEvent::LifecycleChanged {
            from: change.from,
            to: change.to,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: impl Into<GameEvent>) {
        self.pending.push(event.into());
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn peek(&self) -> &[GameEvent] {
        &self.pending
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

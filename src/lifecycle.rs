//! Coarse game-session state machine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

impl LifecycleState {
    /// Whether `self -> to` is a legal transition.
    ///
    /// Paused only ever returns to Playing. GameOver leaves only through a
    /// reset or undo (to Playing) or by going back to the menu.
    pub fn can_transition_to(self, to: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, to),
            (MainMenu, Playing)
                | (Playing, Paused)
                | (Paused, Playing)
                | (Playing, GameOver)
                | (GameOver, Playing)
                | (Playing | Paused | GameOver, MainMenu)
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::MainMenu => "MainMenu",
            LifecycleState::Playing => "Playing",
            LifecycleState::Paused => "Paused",
            LifecycleState::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// A transition that actually happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleChange {
    pub from: LifecycleState,
    pub to: LifecycleState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new(state: LifecycleState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == LifecycleState::Playing
    }

    /// Move to `to`. Staying in the current state is a no-op and yields `None`.
    pub fn transition(
        &mut self,
        to: LifecycleState,
    ) -> Result<Option<LifecycleChange>, LifecycleError> {
        let from = self.state;
        if from == to {
            return Ok(None);
        }
        if !from.can_transition_to(to) {
            return Err(LifecycleError::IllegalTransition { from, to });
        }
        self.state = to;
        tracing::info!(%from, %to, "lifecycle changed");
        Ok(Some(LifecycleChange { from, to }))
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(LifecycleState::MainMenu)
    }
}

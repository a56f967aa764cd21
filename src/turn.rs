//! Turn alternation

use crate::board::Stone;

/// Tracks whose turn it is. The current player is never `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSequencer {
    current: Stone,
}

impl TurnSequencer {
    /// `None` if `starting` is `Empty`
    pub fn new(starting: Stone) -> Option<Self> {
        starting.is_player().then_some(Self { current: starting })
    }

    #[inline]
    pub fn current(&self) -> Stone {
        self.current
    }

    /// Begin a game with `starting` to move. `Empty` is ignored.
    pub fn start(&mut self, starting: Stone) -> Stone {
        self.set_current(starting);
        self.current
    }

    /// Hand the turn to the other player and return them
    pub fn advance(&mut self) -> Stone {
        let previous = self.current;
        self.current = Self::opponent(previous);
        tracing::debug!(from = %previous, to = %self.current, "turn advanced");
        self.current
    }

    /// Returns false and leaves the turn unchanged for `Empty`
    pub fn set_current(&mut self, player: Stone) -> bool {
        if !player.is_player() {
            tracing::warn!("ignoring attempt to give the turn to Empty");
            return false;
        }
        self.current = player;
        true
    }

    #[inline]
    pub fn opponent(player: Stone) -> Stone {
        player.opponent()
    }

    #[inline]
    pub fn is_current(&self, player: Stone) -> bool {
        self.current == player
    }
}

impl Default for TurnSequencer {
    /// Black moves first
    fn default() -> Self {
        Self {
            current: Stone::Black,
        }
    }
}

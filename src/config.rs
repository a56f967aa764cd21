//! Session configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;
use crate::rules::WinCondition;

/// Fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_condition: WinCondition,
    pub starting_player: Stone,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_condition: WinCondition::default(),
            starting_player: Stone::Black,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn with_win_length(mut self, pieces_to_win: usize) -> Self {
        self.win_condition.pieces_to_win = pieces_to_win;
        self
    }

    pub fn with_win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = win_condition;
        self
    }

    pub fn with_starting_player(mut self, starting_player: Stone) -> Self {
        self.starting_player = starting_player;
        self
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_condition.pieces_to_win
    }

    /// Reject configurations a session cannot run with.
    ///
    /// Legal but odd settings (short runs, runs longer than the board, no
    /// directions enabled) are only logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        let k = self.win_length();
        if k < 1 {
            return Err(ConfigError::WinLength);
        }
        if !self.starting_player.is_player() {
            return Err(ConfigError::StartingPlayer);
        }

        if k < 3 {
            tracing::warn!(k, "win length below 3 makes for a trivial game");
        }
        if k > self.board_size {
            tracing::warn!(k, size = self.board_size, "win length exceeds board size; no one can win");
        }
        if self.win_condition.enabled_directions().next().is_none() {
            tracing::warn!("every win direction is disabled; no one can win");
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), size = config.board_size, k = config.win_length(), "loaded config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

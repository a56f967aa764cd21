//! Save and resume a session as JSON
//!
//! A snapshot holds the config, the move list, whose turn it is and the
//! lifecycle state. The grid itself is rebuilt by replaying the moves,
//! which also re-validates them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Move, Stone};
use crate::config::GameConfig;
use crate::error::SnapshotError;
use crate::lifecycle::LifecycleState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub moves: Vec<Move>,
    pub current_player: Stone,
    pub lifecycle: LifecycleState,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), moves = self.moves.len(), "snapshot saved");
        Ok(())
    }

    /// Load from JSON file. The moves are not replayed until
    /// `GameSession::restore`.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::session::GameSession;

    fn played_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::new(9)).unwrap();
        session.try_place(4, 4, Stone::Black).unwrap();
        session.try_place(5, 4, Stone::White).unwrap();
        session.try_place(4, 5, Stone::Black).unwrap();
        session
    }

    #[test]
    fn test_snapshot_restores_board_and_turn() {
        let session = played_session();
        let json = session.snapshot().to_json().unwrap();

        let restored = GameSession::restore(GameSnapshot::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored.board(), session.board());
        assert_eq!(restored.current_player(), Stone::White);
        assert_eq!(restored.lifecycle(), LifecycleState::Playing);
        assert_eq!(restored.move_count(), 3);
    }

    #[test]
    fn test_snapshot_of_won_game_keeps_winner() {
        let mut session = GameSession::new(GameConfig::new(9).with_win_length(3)).unwrap();
        for (x, y) in [(0, 0), (1, 0), (2, 0)] {
            session.force_place(x, y, Stone::Black).unwrap();
        }
        assert_eq!(session.lifecycle(), LifecycleState::GameOver);

        let restored = GameSession::restore(session.snapshot()).unwrap();
        assert_eq!(restored.lifecycle(), LifecycleState::GameOver);
        assert_eq!(restored.winner(), Stone::Black);
        assert_eq!(restored.winning_line().map(|l| l.len()), Some(3));
    }

    #[test]
    fn test_snapshot_rejects_double_occupancy() {
        let mut snapshot = played_session().snapshot();
        snapshot.moves[2].pos = Pos::new(4, 4);
        let err = GameSession::restore(snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidMove { index: 2, .. }));
    }

    #[test]
    fn test_snapshot_rejects_out_of_sequence_index() {
        let mut snapshot = played_session().snapshot();
        snapshot.moves[1].index = 7;
        let err = GameSession::restore(snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidMove { index: 1, .. }));
    }

    #[test]
    fn test_snapshot_rejects_empty_turn() {
        let mut snapshot = played_session().snapshot();
        snapshot.current_player = Stone::Empty;
        assert!(matches!(
            GameSession::restore(snapshot),
            Err(SnapshotError::InvalidTurn)
        ));
    }

    #[test]
    fn test_snapshot_rejects_game_over_without_win() {
        let mut snapshot = played_session().snapshot();
        snapshot.lifecycle = LifecycleState::GameOver;
        assert!(matches!(
            GameSession::restore(snapshot),
            Err(SnapshotError::Lifecycle { state: LifecycleState::GameOver })
        ));
    }

    #[test]
    fn test_snapshot_rejects_moves_after_a_win() {
        let mut moves: Vec<Move> = (0..5)
            .map(|x| Move { pos: Pos::new(x, 0), stone: Stone::Black, index: x as usize })
            .collect();
        moves.push(Move { pos: Pos::new(9, 9), stone: Stone::White, index: 5 });

        for lifecycle in [LifecycleState::Playing, LifecycleState::GameOver] {
            let snapshot = GameSnapshot {
                config: GameConfig::default(),
                moves: moves.clone(),
                current_player: Stone::Black,
                lifecycle,
            };
            assert!(matches!(
                GameSession::restore(snapshot),
                Err(SnapshotError::Lifecycle { state }) if state == lifecycle
            ));
        }
    }

    #[test]
    fn test_snapshot_of_drawn_game() {
        let mut session = GameSession::new(GameConfig::new(2).with_win_length(3)).unwrap();
        for (x, y, stone) in [
            (0, 0, Stone::Black),
            (1, 0, Stone::White),
            (0, 1, Stone::Black),
            (1, 1, Stone::White),
        ] {
            session.try_place(x, y, stone).unwrap();
        }
        assert_eq!(session.lifecycle(), LifecycleState::GameOver);

        let restored = GameSession::restore(session.snapshot()).unwrap();
        assert_eq!(restored.lifecycle(), LifecycleState::GameOver);
        assert_eq!(restored.winner(), Stone::Empty);
        assert!(restored.board().is_full());

        let mut snapshot = session.snapshot();
        snapshot.lifecycle = LifecycleState::Playing;
        assert!(matches!(
            GameSession::restore(snapshot),
            Err(SnapshotError::Lifecycle { state: LifecycleState::Playing })
        ));
    }

    #[test]
    fn test_snapshot_rejects_bad_config() {
        let mut snapshot = played_session().snapshot();
        snapshot.config.board_size = 30;
        assert!(matches!(
            GameSession::restore(snapshot),
            Err(SnapshotError::Config(_))
        ));
    }

    #[test]
    fn test_snapshot_file_round_trip() {
        let path = std::env::temp_dir().join(format!("gomoku-snapshot-{}.json", std::process::id()));
        let snapshot = played_session().snapshot();
        snapshot.save(&path).unwrap();
        let loaded = GameSnapshot::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, snapshot);
    }
}

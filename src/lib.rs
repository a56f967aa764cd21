//! Gomoku rules core
//!
//! Board state, move legality, turn order, win detection and the game
//! lifecycle for free-style Gomoku (five-in-a-row):
//! - Square board, 15x15 by default, anywhere from 2x2 to 25x25
//! - K-in-a-row to win, K = 5 by default (overlines allowed)
//! - Black moves first unless configured otherwise
//!
//! Rendering, input mapping and audio are left to the host. The host drives
//! a [`GameSession`] and reacts to the [`GameEvent`]s it queues.
//!
//! # Architecture
//!
//! - [`board`]: Board grid and move history
//! - [`rules`]: Win detection
//! - [`turn`]: Turn alternation
//! - [`lifecycle`]: MainMenu / Playing / Paused / GameOver state machine
//! - [`session`]: Placement coordinator tying the above together
//! - [`events`]: Outbound notifications
//! - [`config`], [`snapshot`]: Session setup and save/resume
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameSession, PlaceOutcome, Stone};
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//!
//! match session.try_place(7, 7, Stone::Black) {
//!     Ok(PlaceOutcome::Continue { next, .. }) => assert_eq!(next, Stone::White),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! // Occupied cells are rejected without changing the turn
//! assert!(session.try_place(7, 7, Stone::White).is_err());
//! assert_eq!(session.current_player(), Stone::White);
//!
//! for event in session.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod turn;

// Re-export commonly used types for convenience
pub use board::{Board, Move, MoveHistory, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::GameConfig;
pub use error::{
    ConfigError, EmptyHistoryError, InvalidWinCheck, LifecycleError, PlaceError, SnapshotError,
    UndoError,
};
pub use events::GameEvent;
pub use lifecycle::LifecycleState;
pub use rules::{Direction, WinCondition, WinDetector, WinLine, WinResult, DEFAULT_WIN_LENGTH};
pub use session::{GameSession, PlaceOutcome};
pub use snapshot::GameSnapshot;
pub use turn::TurnSequencer;

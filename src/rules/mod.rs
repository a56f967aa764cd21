//! Game rules for Gomoku
//!
//! Free-style rules: any line of K or more stones wins. There are no
//! captures, forbidden moves or swap openings.

pub mod win;

// Re-exports for convenient access
pub use win::{
    find_win_at, run_through, Direction, WinCondition, WinDetector, WinLine, WinResult,
    DEFAULT_WIN_LENGTH,
};

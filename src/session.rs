//! Placement coordinator: one game session
//!
//! `GameSession` ties the board, turn order, win detector and lifecycle
//! together. Every public operation either fully commits or fully rejects,
//! and every state change is queued as a [`GameEvent`].

use crate::board::{Board, Move, MoveHistory, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{ConfigError, InvalidWinCheck, LifecycleError, PlaceError, SnapshotError, UndoError};
use crate::events::{EventQueue, GameEvent};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::rules::{find_win_at, WinDetector, WinLine, WinResult};
use crate::snapshot::GameSnapshot;
use crate::turn::TurnSequencer;

/// What a successful placement led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Game goes on; `next` is to move
    Continue { mv: Move, next: Stone },
    Win { mv: Move, result: WinResult },
    /// Board filled without a winner
    Draw { mv: Move },
}

impl PlaceOutcome {
    pub fn mv(&self) -> Move {
        match self {
            PlaceOutcome::Continue { mv, .. }
            | PlaceOutcome::Win { mv, .. }
            | PlaceOutcome::Draw { mv } => *mv,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, PlaceOutcome::Continue { .. })
    }
}

/// A single game of Gomoku
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    turns: TurnSequencer,
    lifecycle: Lifecycle,
    detector: WinDetector,
    events: EventQueue,
}

impl GameSession {
    /// Build a session ready to play: empty board, starting player to move.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let turns = TurnSequencer::new(config.starting_player).ok_or(ConfigError::StartingPlayer)?;
        tracing::info!(
            size = config.board_size,
            k = config.win_length(),
            rules = %config.win_condition.name,
            starting = %config.starting_player,
            "new game session"
        );
        Ok(Self {
            board: Board::new(config.board_size),
            turns,
            lifecycle: Lifecycle::new(LifecycleState::Playing),
            detector: WinDetector::new(config.win_condition.clone()),
            events: EventQueue::new(),
            config,
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        self.board.history()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.board.history().last().ok()
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.turns.current()
    }

    #[inline]
    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Winner of the current game, `Empty` while undecided
    pub fn winner(&self) -> Stone {
        self.detector.winner()
    }

    pub fn winning_line(&self) -> Option<&WinLine> {
        self.detector.last_result().map(|r| &r.line)
    }

    /// Re-run win detection for the stone at `pos`.
    ///
    /// Pure query: `winner()` and `winning_line()` only change when a move
    /// is committed.
    pub fn check_for_win(&self, pos: Pos) -> Result<bool, InvalidWinCheck> {
        Ok(find_win_at(&self.board, pos, self.detector.condition())?.is_some())
    }

    /// Take all events queued since the last drain.
    ///
    /// The queue is unbounded. Hosts must drain it regularly (once per
    /// frame, or after each call) or it grows with every move.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.peek()
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Interactive placement by `player` at `(x, y)`.
    ///
    /// Checks, in order: bounds, turn, occupancy, lifecycle. On success the
    /// move is committed and either ends the game or passes the turn.
    pub fn try_place(&mut self, x: i32, y: i32, player: Stone) -> Result<PlaceOutcome, PlaceError> {
        let pos = self.validate_placement(x, y, player, true)?;
        Ok(self.commit(pos, player, true))
    }

    /// Seed a stone without turn discipline.
    ///
    /// Bounds, occupancy and lifecycle are still enforced and win detection
    /// still runs, but the turn never changes.
    pub fn force_place(&mut self, x: i32, y: i32, player: Stone) -> Result<PlaceOutcome, PlaceError> {
        let pos = self.validate_placement(x, y, player, false)?;
        Ok(self.commit(pos, player, false))
    }

    fn validate_placement(
        &self,
        x: i32,
        y: i32,
        player: Stone,
        enforce_turn: bool,
    ) -> Result<Pos, PlaceError> {
        let check = || -> Result<Pos, PlaceError> {
            let pos = self.board.to_pos(x, y).ok_or(PlaceError::OutOfBounds {
                x,
                y,
                size: self.board.size(),
            })?;
            if enforce_turn && !self.turns.is_current(player) {
                return Err(PlaceError::NotPlayersTurn {
                    expected: self.turns.current(),
                    actual: player,
                });
            }
            if !player.is_player() {
                return Err(PlaceError::NoPlayer);
            }
            let occupant = self.board.get(pos);
            if occupant.is_player() {
                return Err(PlaceError::CellOccupied { pos, occupant });
            }
            if !self.lifecycle.is_playing() {
                return Err(PlaceError::GameNotActive {
                    state: self.lifecycle.state(),
                });
            }
            Ok(pos)
        };
        check().inspect_err(|err| tracing::debug!(x, y, %player, %err, "placement rejected"))
    }

    fn commit(&mut self, pos: Pos, player: Stone, advance_turn: bool) -> PlaceOutcome {
        let mv = self.board.commit(pos, player);
        let move_count = self.board.move_count();
        tracing::debug!(%pos, stone = %player, move_count, "move committed");
        self.events.push(GameEvent::MoveCommitted {
            pos,
            stone: player,
            move_count,
        });

        let win = match self.detector.evaluate(&self.board, pos) {
            Ok(win) => win,
            Err(err) => panic!("win check on committed move {pos} failed: {err}"),
        };

        if let Some(result) = win {
            self.enter(LifecycleState::GameOver);
            tracing::info!(winner = %result.winner, move_count, "game won");
            self.events.push(GameEvent::WinDetected {
                winner: result.winner,
                line: result.line.clone(),
            });
            return PlaceOutcome::Win { mv, result };
        }

        if self.board.is_full() {
            self.enter(LifecycleState::GameOver);
            tracing::info!(move_count, "board full, game drawn");
            self.events.push(GameEvent::DrawDetected);
            return PlaceOutcome::Draw { mv };
        }

        if advance_turn {
            let next = self.turns.advance();
            self.events.push(GameEvent::TurnChanged { player: next });
        }
        PlaceOutcome::Continue {
            mv,
            next: self.turns.current(),
        }
    }

    // ------------------------------------------------------------------
    // Undo / reset
    // ------------------------------------------------------------------

    /// Take back the last move.
    ///
    /// The undone move's player gets the turn back, and a game that ended
    /// on that move resumes.
    pub fn undo(&mut self) -> Result<Move, UndoError> {
        let state = self.lifecycle.state();
        if matches!(state, LifecycleState::Paused | LifecycleState::MainMenu) {
            return Err(UndoError::GameNotActive { state });
        }
        let mv = self.board.undo_last().map_err(|_| UndoError::NothingToUndo)?;
        let move_count = self.board.move_count();
        tracing::debug!(pos = %mv.pos, stone = %mv.stone, move_count, "move undone");
        self.events.push(GameEvent::MoveUndone {
            pos: mv.pos,
            stone: mv.stone,
            move_count,
        });

        if !self.turns.is_current(mv.stone) && self.turns.set_current(mv.stone) {
            self.events.push(GameEvent::TurnChanged { player: mv.stone });
        }
        if state == LifecycleState::GameOver {
            self.detector.reset();
            self.enter(LifecycleState::Playing);
        }
        Ok(mv)
    }

    /// Start over with the configured starting player
    pub fn reset(&mut self) {
        self.board.reset();
        self.detector.reset();
        let player = self.turns.start(self.config.starting_player);
        tracing::info!(starting = %player, "game reset");
        self.events.push(GameEvent::GameReset);
        self.events.push(GameEvent::TurnChanged { player });
        self.enter(LifecycleState::Playing);
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn pause(&mut self) -> Result<(), LifecycleError> {
        self.transition(LifecycleState::Paused)
    }

    /// Only a paused game can be resumed
    pub fn resume(&mut self) -> Result<(), LifecycleError> {
        let from = self.lifecycle.state();
        if !matches!(from, LifecycleState::Paused | LifecycleState::Playing) {
            return Err(LifecycleError::IllegalTransition {
                from,
                to: LifecycleState::Playing,
            });
        }
        self.transition(LifecycleState::Playing)
    }

    /// Leave the menu with a fresh game
    pub fn start_game(&mut self) -> Result<(), LifecycleError> {
        let from = self.lifecycle.state();
        if from != LifecycleState::MainMenu {
            return Err(LifecycleError::IllegalTransition {
                from,
                to: LifecycleState::Playing,
            });
        }
        self.reset();
        Ok(())
    }

    /// Abandon play. The board stays as is until the next `start_game`,
    /// but the winner is forgotten.
    pub fn return_to_menu(&mut self) {
        self.detector.reset();
        self.enter(LifecycleState::MainMenu);
    }

    fn transition(&mut self, to: LifecycleState) -> Result<(), LifecycleError> {
        if let Some(change) = self.lifecycle.transition(to)? {
            self.events.push(change);
        }
        Ok(())
    }

    /// Transition the coordinator itself has already proven legal
    fn enter(&mut self, to: LifecycleState) {
        if let Err(err) = self.transition(to) {
            panic!("lifecycle invariant broken: {err}");
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            moves: self.board.history().as_slice().to_vec(),
            current_player: self.turns.current(),
            lifecycle: self.lifecycle.state(),
        }
    }

    /// Rebuild a session by replaying a snapshot's moves.
    ///
    /// Each move is checked for a win or a full board as it is replayed, so
    /// only the final move may end the game. The restored session starts
    /// with an empty event queue.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let GameSnapshot {
            config,
            moves,
            current_player,
            lifecycle,
        } = snapshot;
        let mut session = Self::new(config)?;
        let mut ended = false;

        for (index, mv) in moves.iter().enumerate() {
            if ended {
                tracing::debug!(index, "snapshot continues past the end of its game");
                return Err(SnapshotError::Lifecycle { state: lifecycle });
            }
            let reason = if mv.index != index {
                Some(format!("recorded index {} is out of sequence", mv.index))
            } else if !mv.stone.is_player() {
                Some("stone is Empty".to_string())
            } else if !session.board.contains(mv.pos) {
                Some(format!("{} is off the board", mv.pos))
            } else if !session.board.is_empty_at(mv.pos) {
                Some(format!("{} is already occupied", mv.pos))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SnapshotError::InvalidMove { index, reason });
            }
            session.board.commit(mv.pos, mv.stone);
            let won = session
                .detector
                .evaluate(&session.board, mv.pos)
                .map_err(|err| SnapshotError::InvalidMove {
                    index,
                    reason: err.to_string(),
                })?
                .is_some();
            ended = won || session.board.is_full();
        }

        if !session.turns.set_current(current_player) {
            return Err(SnapshotError::InvalidTurn);
        }

        match (lifecycle, ended) {
            (LifecycleState::GameOver, true) | (LifecycleState::MainMenu, _) => {}
            (LifecycleState::Playing | LifecycleState::Paused, false) => {}
            _ => return Err(SnapshotError::Lifecycle { state: lifecycle }),
        }
        if lifecycle == LifecycleState::MainMenu {
            session.detector.reset();
        }
        session.lifecycle = Lifecycle::new(lifecycle);
        tracing::debug!(moves = session.move_count(), state = %lifecycle, "session restored");
        Ok(session)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            board: Board::new(crate::board::DEFAULT_BOARD_SIZE),
            turns: TurnSequencer::default(),
            lifecycle: Lifecycle::new(LifecycleState::Playing),
            detector: WinDetector::default(),
            events: EventQueue::new(),
            config: GameConfig::default(),
        }
    }
}

//! End-to-end game flows through the public API

use gomoku::{
    GameConfig, GameEvent, GameSession, LifecycleState, PlaceError, PlaceOutcome, Pos, Stone,
};

fn standard() -> GameSession {
    GameSession::new(GameConfig::default()).unwrap()
}

fn assert_history_matches_board(session: &GameSession) {
    assert_eq!(session.history().len(), session.board().stone_count());
}

#[test]
fn horizontal_win() {
    let mut session = standard();
    for x in 0..5 {
        session.force_place(x, 0, Stone::Black).unwrap();
    }

    assert!(session.check_for_win(Pos::new(4, 0)).unwrap());
    assert_eq!(session.winner(), Stone::Black);
    assert_eq!(session.lifecycle(), LifecycleState::GameOver);
}

#[test]
fn no_win_on_mixed_square() {
    let mut session = standard();
    session.force_place(0, 0, Stone::Black).unwrap();
    session.force_place(1, 0, Stone::White).unwrap();
    session.force_place(0, 1, Stone::White).unwrap();
    session.force_place(1, 1, Stone::Black).unwrap();

    assert!(!session.check_for_win(Pos::new(1, 1)).unwrap());
    assert_eq!(session.lifecycle(), LifecycleState::Playing);
}

#[test]
fn anti_diagonal_win() {
    let mut session = standard();
    for (x, y) in [(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)] {
        session.force_place(x, y, Stone::White).unwrap();
    }

    assert!(session.check_for_win(Pos::new(0, 4)).unwrap());
    assert_eq!(session.winner(), Stone::White);
}

#[test]
fn custom_threshold_win() {
    let mut session = GameSession::new(GameConfig::default().with_win_length(3)).unwrap();
    for x in 0..3 {
        session.force_place(x, 0, Stone::Black).unwrap();
    }

    assert!(session.check_for_win(Pos::new(2, 0)).unwrap());
    assert_eq!(session.lifecycle(), LifecycleState::GameOver);
}

#[test]
fn occupied_cell_rejected() {
    let mut session = standard();
    session.try_place(7, 7, Stone::Black).unwrap();

    let err = session.try_place(7, 7, Stone::White).unwrap_err();
    assert!(matches!(err, PlaceError::CellOccupied { .. }));
    assert_eq!(session.current_player(), Stone::White);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn out_of_bounds_for_every_size() {
    for size in 2..=25 {
        let mut session = GameSession::new(GameConfig::new(size)).unwrap();
        let edge = size as i32;
        assert_eq!(
            session.try_place(-1, 0, Stone::Black),
            Err(PlaceError::OutOfBounds { x: -1, y: 0, size })
        );
        assert_eq!(
            session.try_place(edge, 0, Stone::Black),
            Err(PlaceError::OutOfBounds { x: edge, y: 0, size })
        );
        assert!(session.board().is_empty());
    }
}

#[test]
fn interactive_game_alternates_and_keeps_invariants() {
    let mut session = standard();
    // Black builds a vertical five while White answers to the side
    let script = [
        (7, 3, Stone::Black),
        (8, 3, Stone::White),
        (7, 4, Stone::Black),
        (8, 4, Stone::White),
        (7, 5, Stone::Black),
        (8, 5, Stone::White),
        (7, 6, Stone::Black),
        (8, 6, Stone::White),
    ];

    let mut previous = Stone::Empty;
    for (x, y, stone) in script {
        assert_ne!(stone, previous);
        let outcome = session.try_place(x, y, stone).unwrap();
        assert!(!outcome.is_game_over());
        assert_history_matches_board(&session);
        previous = stone;
    }

    // A repeated player is refused
    assert!(matches!(
        session.try_place(0, 0, Stone::White),
        Err(PlaceError::NotPlayersTurn { .. })
    ));

    match session.try_place(7, 7, Stone::Black).unwrap() {
        PlaceOutcome::Win { result, .. } => {
            assert_eq!(result.winner, Stone::Black);
            assert_eq!(result.line.len(), 5);
        }
        other => panic!("expected a win, got {other:?}"),
    }
    assert_history_matches_board(&session);

    let committed: Vec<Stone> = session
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::MoveCommitted { stone, .. } => Some(stone),
            _ => None,
        })
        .collect();
    assert_eq!(committed.len(), 9);
    assert!(committed.windows(2).all(|pair| pair[0] != pair[1]));
}

#[test]
fn reset_is_idempotent() {
    let mut session = standard();
    session.try_place(3, 3, Stone::Black).unwrap();
    session.try_place(4, 4, Stone::White).unwrap();

    session.reset();
    let once = session.snapshot();
    session.reset();
    let twice = session.snapshot();

    assert_eq!(once, twice);
    assert!(session.board().is_empty());
    assert_eq!(session.current_player(), Stone::Black);
    assert_eq!(session.lifecycle(), LifecycleState::Playing);
}

#[test]
fn place_then_undo_round_trip() {
    let mut session = standard();
    session.try_place(6, 6, Stone::Black).unwrap();
    session.try_place(6, 7, Stone::White).unwrap();
    let before = session.snapshot();
    let board_before = session.board().clone();

    session.try_place(9, 2, Stone::Black).unwrap();
    session.undo().unwrap();

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.board(), &board_before);
    assert_history_matches_board(&session);
}

#[test]
fn undo_everything_then_replay() {
    let mut session = standard();
    for (x, y, stone) in [(0, 0, Stone::Black), (1, 1, Stone::White), (2, 2, Stone::Black)] {
        session.try_place(x, y, stone).unwrap();
    }
    while session.undo().is_ok() {
        assert_history_matches_board(&session);
    }
    assert!(session.board().is_empty());
    assert_eq!(session.current_player(), Stone::Black);
    assert!(session.try_place(0, 0, Stone::Black).is_ok());
}

#[test]
fn saved_game_resumes_mid_play() {
    let mut session = standard();
    session.try_place(7, 7, Stone::Black).unwrap();
    session.try_place(8, 8, Stone::White).unwrap();
    session.pause().unwrap();

    let json = session.snapshot().to_json().unwrap();
    let mut resumed = GameSession::restore(gomoku::GameSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(resumed.lifecycle(), LifecycleState::Paused);
    resumed.resume().unwrap();
    assert!(resumed.try_place(9, 9, Stone::Black).is_ok());
    assert_eq!(resumed.move_count(), 3);
}

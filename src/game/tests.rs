use crate::board::{Board, BoardBuilder, Color, Piece, PieceKind, Square};

use super::{Effect, GameSession, GameStatus, SessionConfig};

fn sq(name: &str) -> Square {
    name.parse().expect("test square")
}

fn click(game: &mut GameSession, name: &str) -> Vec<Effect> {
    game.on_square_selected(sq(name))
}

fn play(game: &mut GameSession, from: &str, to: &str) -> Vec<Effect> {
    let selected = click(game, from);
    assert!(
        matches!(selected.as_slice(), [Effect::Selected { .. }]),
        "selecting {from} gave {selected:?}"
    );
    click(game, to)
}

/// e4, f6, Qh5, a6: the white queen now sees the black king on e8.
fn queen_eyes_king() -> GameSession {
    let mut game = GameSession::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "f7", "f6");
    play(&mut game, "d1", "h5");
    play(&mut game, "a7", "a6");
    game
}

#[test]
fn test_new_session_state() {
    let game = GameSession::new();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), Color::White);
    assert!(game.selection().is_idle());
    assert!(game.valid_moves().is_empty());
    assert!(game.captured().is_empty());
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_selecting_own_piece() {
    let mut game = GameSession::new();
    let effects = click(&mut game, "g1");

    assert_eq!(effects.len(), 1);
    let Effect::Selected { origin, moves } = effects[0] else {
        panic!("expected selection, got {effects:?}");
    };
    assert_eq!(origin, sq("g1"));
    assert_eq!(moves.to_sorted_vec(), vec![sq("f3"), sq("h3")]);
    assert_eq!(game.selection().origin(), Some(sq("g1")));
    assert_eq!(game.valid_moves().len(), 2);
}

#[test]
fn test_idle_clicks_on_empty_or_enemy_are_noops() {
    let mut game = GameSession::new();
    assert!(click(&mut game, "e4").is_empty());
    assert!(click(&mut game, "e7").is_empty());
    assert!(game.selection().is_idle());
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_piece_with_no_moves_can_still_be_selected() {
    let mut game = GameSession::new();
    let effects = click(&mut game, "a1");
    assert!(matches!(
        effects.as_slice(),
        [Effect::Selected { moves, .. }] if moves.is_empty()
    ));
    assert_eq!(game.selection().origin(), Some(sq("a1")));
}

#[test]
fn test_reselect_other_own_piece() {
    let mut game = GameSession::new();
    click(&mut game, "e2");
    let effects = click(&mut game, "b1");
    assert!(matches!(
        effects.as_slice(),
        [Effect::Selected { origin, .. }] if *origin == sq("b1")
    ));
    assert_eq!(game.selection().origin(), Some(sq("b1")));
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_clicking_unreachable_square_deselects() {
    let mut game = GameSession::new();
    click(&mut game, "e2");
    assert_eq!(click(&mut game, "e5"), vec![Effect::Deselected]);
    assert!(game.selection().is_idle());
    assert_eq!(game.board(), &Board::new());

    click(&mut game, "e2");
    assert_eq!(click(&mut game, "e7"), vec![Effect::Deselected]);
    assert!(game.selection().is_idle());
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_commit_moves_piece_and_flips_turn() {
    let mut game = GameSession::new();
    click(&mut game, "e2");
    let effects = click(&mut game, "e4");

    assert_eq!(
        effects,
        vec![
            Effect::MoveCommitted {
                from: sq("e2"),
                to: sq("e4"),
                piece: Piece::new(PieceKind::Pawn, Color::White),
                captured: None,
            },
            Effect::TurnChanged(Color::Black),
        ]
    );
    assert!(game.board().is_empty(sq("e2")));
    assert_eq!(
        game.board().piece_at(sq("e4")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert!(game.selection().is_idle());
    assert!(game.valid_moves().is_empty());
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameSession::new();
    play(&mut game, "e2", "e4");

    // White may not move again.
    assert!(click(&mut game, "d2").is_empty());
    assert!(game.selection().is_idle());

    play(&mut game, "e7", "e5");
    assert_eq!(game.current_player(), Color::White);
    assert!(click(&mut game, "d7").is_empty());
    play(&mut game, "d2", "d4");
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn test_capture_is_recorded_for_mover() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a5"), Color::Black, PieceKind::Knight)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    let mut game = GameSession::with_position(board, Color::White);

    let effects = play(&mut game, "a1", "a5");
    let knight = Piece::new(PieceKind::Knight, Color::Black);
    assert!(matches!(
        effects[0],
        Effect::MoveCommitted { captured: Some(p), .. } if p == knight
    ));
    assert_eq!(game.captured().by(Color::White), &[knight]);
    assert!(game.captured().by(Color::Black).is_empty());
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.board().count(Color::Black), 1);
}

#[test]
fn test_king_capture_ends_game() {
    let mut game = queen_eyes_king();
    click(&mut game, "h5");
    assert!(game.valid_moves().contains(&sq("e8")));

    let effects = click(&mut game, "e8");
    let king = Piece::new(PieceKind::King, Color::Black);
    assert_eq!(
        effects,
        vec![
            Effect::MoveCommitted {
                from: sq("h5"),
                to: sq("e8"),
                piece: Piece::new(PieceKind::Queen, Color::White),
                captured: Some(king),
            },
            Effect::GameOver {
                winner: Color::White
            },
            Effect::TurnChanged(Color::Black),
        ]
    );
    assert_eq!(game.status(), GameStatus::Won(Color::White));
    assert_eq!(game.status().to_string(), "white wins");
    assert_eq!(game.captured().by(Color::White), &[king]);
    // The turn still flips after the winning move.
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn test_clicks_ignored_after_game_over() {
    let mut game = queen_eyes_king();
    play(&mut game, "h5", "e8");
    let frozen = game.board().clone();

    for name in ["d8", "d7", "e1", "e2", "e3", "a6", "a5"] {
        assert!(click(&mut game, name).is_empty(), "{name} was not ignored");
    }
    assert_eq!(game.board(), &frozen);
    assert!(game.selection().is_idle());
    assert_eq!(game.status(), GameStatus::Won(Color::White));
}

#[test]
fn test_no_flip_on_game_over_when_configured() {
    let mut game = GameSession::with_config(SessionConfig {
        flip_turn_on_game_over: false,
    });
    play(&mut game, "e2", "e4");
    play(&mut game, "f7", "f6");
    play(&mut game, "d1", "h5");
    play(&mut game, "a7", "a6");
    let effects = play(&mut game, "h5", "e8");

    assert!(!effects.iter().any(|e| matches!(e, Effect::TurnChanged(_))));
    assert_eq!(game.current_player(), Color::White);
    assert_eq!(game.status(), GameStatus::Won(Color::White));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = queen_eyes_king();
    play(&mut game, "h5", "e8");
    game.reset();

    assert_eq!(game.board(), &Board::new());
    assert!(game.captured().is_empty());
    assert_eq!(game.current_player(), Color::White);
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.selection().is_idle());

    // Play resumes normally.
    assert_eq!(play(&mut game, "e2", "e4").len(), 2);
}

#[test]
fn test_reset_mid_selection() {
    let mut game = GameSession::new();
    play(&mut game, "e2", "e4");
    click(&mut game, "g8");
    game.reset();
    assert!(game.selection().is_idle());
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_reset_from_custom_position_uses_standard_layout() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .build();
    let mut game = GameSession::with_position(board, Color::Black);
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_select_rejects_off_board_coordinates() {
    let mut game = GameSession::new();
    assert!(game.select(8, 0).is_err());
    assert!(game.select(0, 8).is_err());
    assert_eq!(game.board(), &Board::new());

    let effects = game.select(6, 4).unwrap();
    assert!(matches!(effects.as_slice(), [Effect::Selected { .. }]));
}

#[test]
fn test_snapshot_reflects_state() {
    let mut game = GameSession::new();
    click(&mut game, "e2");
    let snapshot = game.snapshot();

    assert_eq!(snapshot.selected, Some(sq("e2")));
    let mut moves = snapshot.valid_moves.clone();
    moves.sort_unstable();
    assert_eq!(moves, vec![sq("e4"), sq("e3")]);
    assert_eq!(snapshot.current_player, Color::White);
    assert_eq!(snapshot.status, GameStatus::Playing);
    assert_eq!(snapshot.board, Board::new());
}

#[test]
fn test_sessions_are_independent() {
    let mut first = GameSession::new();
    let second = GameSession::new();
    play(&mut first, "e2", "e4");

    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.current_player(), Color::White);
    assert_ne!(first.board(), second.board());
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_serde_roundtrip() {
    let mut game = queen_eyes_king();
    play(&mut game, "h5", "e8");
    let snapshot = game.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: super::GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

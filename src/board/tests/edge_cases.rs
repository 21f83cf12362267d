//! Edge case tests: board edges, fully blocked pieces, crowded boards.

use super::squares;
use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

#[test]
fn test_rays_never_wrap_around() {
    // A rook on the h-file must not continue onto the a-file of the next row.
    let board = BoardBuilder::new()
        .piece(Square(3, 7), Color::White, PieceKind::Rook)
        .build();
    let moves = board.moves_from(Square(3, 7));
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|sq| sq.row() == 3 || sq.col() == 7));
}

#[test]
fn test_pawn_on_last_row_has_no_moves() {
    // No promotion: a pawn that reached the far edge is simply stuck.
    let board = BoardBuilder::new()
        .piece(Square(0, 2), Color::White, PieceKind::Pawn)
        .piece(Square(7, 5), Color::Black, PieceKind::Pawn)
        .build();
    assert!(board.moves_from(Square(0, 2)).is_empty());
    assert!(board.moves_from(Square(7, 5)).is_empty());
}

#[test]
fn test_pawn_on_edge_file_checks_one_diagonal() {
    let board = BoardBuilder::new()
        .piece(Square(6, 0), Color::White, PieceKind::Pawn)
        .piece(Square(5, 1), Color::Black, PieceKind::Knight)
        .build();
    assert_eq!(
        board.moves_from(Square(6, 0)).to_sorted_vec(),
        squares(&["a3", "a4", "b3"])
    );
}

#[test]
fn test_surrounded_pieces_have_no_moves() {
    let mut builder = BoardBuilder::new();
    for sq in Square::all() {
        builder = builder.piece(sq, Color::White, PieceKind::Queen);
    }
    let board = builder.build();
    for sq in Square::all() {
        assert!(board.moves_from(sq).is_empty(), "{sq} should be stuck");
    }
}

#[test]
fn test_surrounded_by_enemies_captures_only_adjacent() {
    let board = BoardBuilder::new()
        .piece(Square(3, 3), Color::White, PieceKind::Queen)
        .piece(Square(2, 2), Color::Black, PieceKind::Pawn)
        .piece(Square(2, 3), Color::Black, PieceKind::Pawn)
        .piece(Square(2, 4), Color::Black, PieceKind::Pawn)
        .piece(Square(3, 2), Color::Black, PieceKind::Pawn)
        .piece(Square(3, 4), Color::Black, PieceKind::Pawn)
        .piece(Square(4, 2), Color::Black, PieceKind::Pawn)
        .piece(Square(4, 3), Color::Black, PieceKind::Pawn)
        .piece(Square(4, 4), Color::Black, PieceKind::Pawn)
        .build();
    assert_eq!(
        board.moves_from(Square(3, 3)).to_sorted_vec(),
        squares(&["c6", "d6", "e6", "c5", "e5", "c4", "d4", "e4"])
    );
}

#[test]
fn test_generation_does_not_mutate_board() {
    let board = Board::new();
    let before = board.clone();
    for sq in Square::all() {
        let _ = board.moves_from(sq);
    }
    assert_eq!(board, before);
}

#[test]
fn test_corner_pieces() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, PieceKind::King)
        .piece(Square(7, 7), Color::White, PieceKind::Bishop)
        .build();
    assert_eq!(
        board.moves_from(Square(0, 0)).to_sorted_vec(),
        squares(&["b8", "a7", "b7"])
    );
    // Long diagonal up to and including the enemy king.
    assert_eq!(board.moves_from(Square(7, 7)).len(), 7);
}

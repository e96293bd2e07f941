//! Feasible move generation tests.

use super::{board_with, piece};
use crate::board::{Board, BoardError, Move, MoveError, MoveWithTake, PieceType, Side, Square};

fn targets(moves: &[MoveWithTake]) -> Vec<Square> {
    let mut targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
    targets.sort();
    targets
}

#[test]
fn test_knight_single_steps() {
    let board = board_with(
        5,
        5,
        &[
            (Square(2, 1), "wN"),
            (Square(1, 3), "bR"),
            (Square(4, 2), "wQ"),
        ],
    );
    let moves = board.feasible_moves(Square(2, 1), None, Side::White).unwrap();
    assert_eq!(
        targets(&moves),
        vec![
            Square(0, 0),
            Square(0, 2),
            Square(1, 3),
            Square(3, 3),
            Square(4, 0)
        ]
    );

    let captures: Vec<&MoveWithTake> = moves.iter().filter(|m| m.is_capture()).collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to, Square(1, 3));
    let take = captures[0].take.unwrap();
    assert_eq!(take.square, Square(1, 3));
    assert_eq!(take.piece, piece(PieceType::Rook, Side::Black));
}

#[test]
fn test_queen_slides_until_blocked() {
    let board = board_with(
        5,
        5,
        &[
            (Square(2, 1), "wN"),
            (Square(3, 3), "bB"),
            (Square(4, 2), "wQ"),
        ],
    );
    let moves = board.feasible_moves(Square(4, 2), None, Side::White).unwrap();
    assert_eq!(
        targets(&moves),
        vec![
            Square(0, 2),
            Square(1, 2),
            Square(2, 0),
            Square(2, 2),
            Square(3, 1),
            Square(3, 2),
            Square(3, 3),
            Square(4, 0),
            Square(4, 1),
            Square(4, 3),
            Square(4, 4),
        ]
    );
    let capture = moves.iter().find(|m| m.is_capture()).unwrap();
    assert_eq!(capture.to, Square(3, 3));
}

#[test]
fn test_rook_stops_before_own_piece() {
    let board = board_with(4, 4, &[(Square(3, 0), "wR"), (Square(1, 0), "wP")]);
    let moves = board.feasible_moves(Square(3, 0), None, Side::White).unwrap();
    assert_eq!(
        targets(&moves),
        vec![Square(2, 0), Square(3, 1), Square(3, 2), Square(3, 3)]
    );
}

#[test]
fn test_bishop_diagonals_on_empty_board() {
    let board = board_with(3, 3, &[(Square(1, 1), "bB")]);
    let moves = board.feasible_moves(Square(1, 1), None, Side::Black).unwrap();
    assert_eq!(
        targets(&moves),
        vec![Square(0, 0), Square(0, 2), Square(2, 0), Square(2, 2)]
    );
}

#[test]
fn test_king_has_no_castling() {
    let board = Board::standard();
    assert!(board
        .feasible_moves(Square(7, 4), None, Side::White)
        .unwrap()
        .is_empty());

    let open = board_with(8, 8, &[(Square(7, 4), "wK"), (Square(7, 7), "wR")]);
    let moves = open.feasible_moves(Square(7, 4), None, Side::White).unwrap();
    assert_eq!(
        targets(&moves),
        vec![
            Square(6, 3),
            Square(6, 4),
            Square(6, 5),
            Square(7, 3),
            Square(7, 5)
        ]
    );
}

#[test]
fn test_pawn_step_and_jump() {
    let board = Board::standard();
    let white = board.feasible_moves(Square(6, 4), None, Side::White).unwrap();
    assert_eq!(targets(&white), vec![Square(4, 4), Square(5, 4)]);

    let black = board.feasible_moves(Square(1, 2), None, Side::Black).unwrap();
    assert_eq!(targets(&black), vec![Square(2, 2), Square(3, 2)]);
}

#[test]
fn test_pawn_jump_needs_both_squares_empty() {
    let blocked_far = board_with(8, 8, &[(Square(6, 4), "wP"), (Square(4, 4), "bN")]);
    let moves = blocked_far
        .feasible_moves(Square(6, 4), None, Side::White)
        .unwrap();
    assert_eq!(targets(&moves), vec![Square(5, 4)]);

    let blocked_near = board_with(8, 8, &[(Square(6, 4), "wP"), (Square(5, 4), "bN")]);
    assert!(blocked_near
        .feasible_moves(Square(6, 4), None, Side::White)
        .unwrap()
        .is_empty());
}

#[test]
fn test_pawn_jump_only_from_start_row() {
    let board = board_with(8, 8, &[(Square(5, 4), "wP")]);
    let moves = board.feasible_moves(Square(5, 4), None, Side::White).unwrap();
    assert_eq!(targets(&moves), vec![Square(4, 4)]);
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    let board = board_with(
        8,
        8,
        &[
            (Square(4, 4), "wP"),
            (Square(3, 3), "bN"),
            (Square(3, 5), "wN"),
            (Square(3, 4), "bP"),
        ],
    );
    let moves = board.feasible_moves(Square(4, 4), None, Side::White).unwrap();
    assert_eq!(targets(&moves), vec![Square(3, 3)]);
    assert!(moves[0].is_capture());
}

#[test]
fn test_pawns_on_short_board() {
    // 5 rows: white starts on row 3 and jumps to row 1
    let board = board_with(5, 3, &[(Square(3, 1), "wP"), (Square(1, 0), "bP")]);
    let white = board.feasible_moves(Square(3, 1), None, Side::White).unwrap();
    assert_eq!(targets(&white), vec![Square(1, 1), Square(2, 1)]);
    let black = board.feasible_moves(Square(1, 0), None, Side::Black).unwrap();
    assert_eq!(targets(&black), vec![Square(2, 0), Square(3, 0)]);
}

fn en_passant_board() -> Board {
    board_with(
        8,
        8,
        &[
            (Square(3, 4), "wP"),
            (Square(3, 3), "bP"),
            (Square(7, 4), "wK"),
            (Square(0, 4), "bK"),
        ],
    )
}

#[test]
fn test_en_passant_after_jump() {
    let board = en_passant_board();
    let jump = Move::new(Square(1, 3), Square(3, 3));
    let moves = board
        .feasible_moves(Square(3, 4), Some(jump), Side::White)
        .unwrap();
    assert_eq!(targets(&moves), vec![Square(2, 3), Square(2, 4)]);

    let en_passant = moves.iter().find(|m| m.to == Square(2, 3)).unwrap();
    assert!(en_passant.is_en_passant());
    let take = en_passant.take.unwrap();
    assert_eq!(take.square, Square(3, 3));
    assert_eq!(take.piece, piece(PieceType::Pawn, Side::Black));
}

#[test]
fn test_no_en_passant_without_jump() {
    let board = en_passant_board();
    let none = board.feasible_moves(Square(3, 4), None, Side::White).unwrap();
    assert_eq!(targets(&none), vec![Square(2, 4)]);

    let single_step = Move::new(Square(2, 3), Square(3, 3));
    let moves = board
        .feasible_moves(Square(3, 4), Some(single_step), Side::White)
        .unwrap();
    assert!(moves.iter().all(|m| !m.is_en_passant()));

    let other_piece = Move::new(Square(0, 4), Square(0, 5));
    let moves = board
        .feasible_moves(Square(3, 4), Some(other_piece), Side::White)
        .unwrap();
    assert!(moves.iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_preconditions_fail_fast() {
    let board = Board::standard();
    assert_eq!(
        board.feasible_moves(Square(4, 4), None, Side::White),
        Err(MoveError::NoPiece {
            square: Square(4, 4)
        })
    );
    assert_eq!(
        board.feasible_moves(Square(1, 0), None, Side::White),
        Err(MoveError::WrongSide {
            square: Square(1, 0),
            expected: Side::White
        })
    );
    assert!(matches!(
        board.feasible_moves(Square(8, 0), None, Side::White),
        Err(MoveError::Board(BoardError::OutOfRange { .. }))
    ));
}

#[test]
fn test_all_feasible_moves_from_start() {
    let board = Board::standard();
    assert_eq!(board.all_feasible_moves(None, Side::White).len(), 20);
    assert_eq!(board.all_feasible_moves(None, Side::Black).len(), 20);
    assert_eq!(
        board.is_feasible_move(Move::new(Square(7, 1), Square(5, 2)), None, Side::White),
        Ok(true)
    );
    assert_eq!(
        board.is_feasible_move(Move::new(Square(7, 1), Square(5, 1)), None, Side::White),
        Ok(false)
    );
}

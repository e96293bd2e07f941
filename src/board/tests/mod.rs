//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Feasible moves per piece type, en passant
//! - `legality.rs` - Check detection, valid moves, mate rules
//! - `execute.rs` - Move execution, captures, promotion
//! - `notation.rs` - Notation encode/decode on concrete positions
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use super::{Board, Piece, PieceType, Side, Square};

/// Build a board of the given size from (square, code) pairs such as
/// `(Square(0, 1), "bK")`.
pub(super) fn board_with(height: usize, width: usize, pieces: &[(Square, &str)]) -> Board {
    pieces
        .iter()
        .fold(
            super::BoardBuilder::new(height, width),
            |builder, (square, code)| {
                builder.piece(*square, Piece::from_code(code).expect("valid piece code"))
            },
        )
        .build()
        .expect("pieces fit on the board")
}

pub(super) fn piece(kind: PieceType, side: Side) -> Piece {
    Piece::new(kind, side)
}

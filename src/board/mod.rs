//! Board representation and chess rules.
//!
//! Boards are immutable rectangular grids of any size; every operation
//! that changes a position returns a new [`Board`]. Supports piece movement,
//! en passant and promotion, but no castling.
//!
//! # Example
//! ```
//! use chessy::board::{Board, Move, PieceType, Side, Square};
//!
//! let board = Board::standard();
//! let moves = board.all_valid_moves(None, Side::White);
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let outcome = board
//!     .execute_move(Move::new(Square(6, 4), Square(4, 4)), None, None, Side::White)
//!     .unwrap();
//! assert_eq!(outcome.board.piece_at(Square(4, 4)).map(|p| p.kind), Some(PieceType::Pawn));
//! ```

mod builder;
mod compressed;
mod error;
mod execute;
mod legality;
mod movegen;
mod san;
mod state;
mod text;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError, NotationError};
pub use execute::MoveOutcome;
pub use legality::MateDetection;
pub use state::{Board, Mutation};
pub use types::{
    CheckState, FullMove, HistoryMove, Move, MoveWithTake, Piece, PieceType, Side, Square, Take,
};

pub mod board;
pub mod game;

pub use board::{Board, CheckState, FullMove, Move, Piece, PieceType, Side, Square};
pub use game::{Game, Puzzle, PuzzleGame, SessionStore};

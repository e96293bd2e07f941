//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `Side`, `PieceType` and `Piece`
//! - `Square` - (row, col) board coordinate
//! - `Move`, `Take`, `MoveWithTake`, `FullMove`, `HistoryMove` - move records
//! - `CheckState` - position classification

mod moves;
mod piece;
mod square;

pub use moves::{CheckState, FullMove, HistoryMove, Move, MoveWithTake, Take};
pub use piece::{Piece, PieceType, Side};
pub use square::Square;

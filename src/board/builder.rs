//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing board text.
//!
//! # Example
//! ```
//! use chessy::board::{BoardBuilder, Piece, PieceType, Side, Square};
//!
//! let board = BoardBuilder::new(3, 5)
//!     .piece(Square(0, 1), Piece::new(PieceType::King, Side::Black))
//!     .piece(Square(2, 4), Piece::new(PieceType::King, Side::White))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.width(), 5);
//! ```

use once_cell::sync::Lazy;

use super::error::BoardError;
use super::state::Mutation;
use super::{Board, Piece, PieceType, Side, Square};

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

static STANDARD_BOARD: Lazy<Board> = Lazy::new(|| {
    BoardBuilder::standard()
        .build()
        .expect("standard layout fits an 8x8 board")
});

pub(crate) fn standard_board() -> &'static Board {
    &STANDARD_BOARD
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    height: usize,
    width: usize,
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a builder for an empty board of the given size.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        BoardBuilder {
            height,
            width,
            pieces: Vec::new(),
        }
    }

    /// Create a builder starting from the standard 8x8 initial position.
    #[must_use]
    pub fn standard() -> Self {
        let mut builder = Self::new(8, 8);
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            builder
                .pieces
                .push((Square(0, col), Piece::new(kind, Side::Black)));
            builder
                .pieces
                .push((Square(1, col), Piece::new(PieceType::Pawn, Side::Black)));
            builder
                .pieces
                .push((Square(6, col), Piece::new(PieceType::Pawn, Side::White)));
            builder
                .pieces
                .push((Square(7, col), Piece::new(kind, Side::White)));
        }
        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// Fails if either dimension is zero or a piece lies outside the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let board = Board::empty(self.height, self.width)?;
        let writes: Vec<Mutation> = self
            .pieces
            .into_iter()
            .map(|(square, piece)| Mutation::place(square, piece))
            .collect();
        board.mutate(&writes)
    }
}

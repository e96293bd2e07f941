//! Error types for board, move and notation operations.

use std::fmt;

use super::types::{Move, PieceType, Side, Square};

/// Error type for board construction, parsing and square access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board has no rows or zero-width rows
    EmptyBoard,
    /// A row's width differs from the first row's
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Boxed text ends before the closing divider
    Truncated { lines: usize },
    /// Divider line is not made of dashes of the right length
    BadDivider { line: usize },
    /// Row line is not framed by `|`
    BadRow { line: usize },
    /// Cell is not exactly two characters
    BadCell { line: usize, cell: String },
    /// Piece code or letter not recognized
    UnknownPiece { text: String },
    /// Empty-square run in compressed text is zero or unparseable
    BadRun { text: String },
    /// Square lies outside the board
    OutOfRange {
        square: Square,
        height: usize,
        width: usize,
    },
    /// Algebraic square name could not be read
    InvalidSquareName { name: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyBoard => write!(f, "Board must have at least one row and one column"),
            BoardError::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(f, "Row {row} has {found} squares, expected {expected}")
            }
            BoardError::Truncated { lines } => {
                write!(f, "Board text ends after {lines} lines without a closing divider")
            }
            BoardError::BadDivider { line } => {
                write!(f, "Invalid divider on line {line}")
            }
            BoardError::BadRow { line } => {
                write!(f, "Row on line {line} is not framed by '|'")
            }
            BoardError::BadCell { line, cell } => {
                write!(f, "Invalid cell '{cell}' on line {line}")
            }
            BoardError::UnknownPiece { text } => {
                write!(f, "Unknown piece '{text}'")
            }
            BoardError::BadRun { text } => {
                write!(f, "Invalid empty-square run '{text}'")
            }
            BoardError::OutOfRange {
                square,
                height,
                width,
            } => {
                write!(f, "Square {square} is not in a {height}x{width} board")
            }
            BoardError::InvalidSquareName { name } => {
                write!(f, "Invalid square name '{name}'")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for rejected moves. The board is never changed on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    NoPiece { square: Square },
    /// Piece on the source square belongs to the other side
    WrongSide { square: Square, expected: Side },
    /// Target is not reachable by the piece's movement rules
    NotFeasible { mv: Move },
    /// Move would leave the mover's own king attacked
    LeavesKingInCheck { mv: Move },
    /// Pawn reaches the last row without a promotion choice
    PromotionRequired { square: Square },
    /// Pawns can only promote to knight, bishop, rook or queen
    InvalidPromotion { piece: PieceType },
    /// Side has no king to classify checks against
    MissingKing { side: Side },
    /// Underlying board access failed
    Board(BoardError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { square } => write!(f, "No piece at {square} to move"),
            MoveError::WrongSide { square, expected } => {
                write!(f, "Piece at {square} does not belong to {expected}")
            }
            MoveError::NotFeasible { mv } => write!(f, "Move {mv} is not feasible"),
            MoveError::LeavesKingInCheck { mv } => {
                write!(f, "Move {mv} would leave the king in check")
            }
            MoveError::PromotionRequired { square } => {
                write!(f, "Pawn reaching {square} must be promoted")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            MoveError::MissingKing { side } => write!(f, "No {side} king on the board"),
            MoveError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

/// Error type for algebraic notation parsing and encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Target square missing or unreadable
    InvalidSquare { notation: String },
    /// Unknown piece letter
    InvalidPiece { char: char },
    /// Unknown or illegal promotion letter
    InvalidPromotion { notation: String },
    /// Characters left between piece letter and target that are not a file/rank
    InvalidDisambiguation { notation: String },
    /// Several source squares match the notation
    AmbiguousMove { notation: String, candidates: usize },
    /// No source square matches the notation
    NoMatchingMove { notation: String },
    /// Executing the move for check annotation failed
    Move(MoveError),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty notation string"),
            NotationError::InvalidSquare { notation } => {
                write!(f, "Invalid target square in '{notation}'")
            }
            NotationError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in notation")
            }
            NotationError::InvalidPromotion { notation } => {
                write!(f, "Invalid promotion in '{notation}'")
            }
            NotationError::InvalidDisambiguation { notation } => {
                write!(f, "Invalid disambiguation in '{notation}'")
            }
            NotationError::AmbiguousMove {
                notation,
                candidates,
            } => {
                write!(f, "Ambiguous move '{notation}' ({candidates} candidates)")
            }
            NotationError::NoMatchingMove { notation } => {
                write!(f, "No move matches '{notation}'")
            }
            NotationError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for NotationError {
    fn from(err: MoveError) -> Self {
        NotationError::Move(err)
    }
}

impl From<BoardError> for NotationError {
    fn from(err: BoardError) -> Self {
        NotationError::Move(MoveError::Board(err))
    }
}

//! The board value: a rectangular grid of optional pieces.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::{Piece, PieceType, Side, Square};

/// One square write of a batch mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub square: Square,
    pub piece: Option<Piece>,
}

impl Mutation {
    #[inline]
    #[must_use]
    pub const fn clear(square: Square) -> Self {
        Mutation {
            square,
            piece: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn place(square: Square, piece: Piece) -> Self {
        Mutation {
            square,
            piece: Some(piece),
        }
    }
}

/// A rectangular board stored as a flat row-major arena.
///
/// Boards are values: every mutation returns a new board and leaves the
/// original untouched, so earlier positions stay valid for replay.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Option<Piece>>>", into = "Vec<Vec<Option<Piece>>>")
)]
pub struct Board {
    height: usize,
    width: usize,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board. Both dimensions must be positive.
    pub fn empty(height: usize, width: usize) -> Result<Self, BoardError> {
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyBoard);
        }
        Ok(Board {
            height,
            width,
            squares: vec![None; height * width],
        })
    }

    /// The canonical 8x8 starting position.
    #[must_use]
    pub fn standard() -> Self {
        super::builder::standard_board().clone()
    }

    /// Build a board from rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Option<Piece>>>) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(BoardError::EmptyBoard);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        let height = rows.len();
        let squares = rows.into_iter().flatten().collect();
        Ok(Board {
            height,
            width,
            squares,
        })
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Iterate over the rows, top (row 0) first
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>]> {
        self.squares.chunks(self.width)
    }

    #[inline]
    #[must_use]
    pub const fn in_board(&self, square: Square) -> bool {
        square.0 < self.height && square.1 < self.width
    }

    #[inline]
    fn index(&self, square: Square) -> Result<usize, BoardError> {
        if self.in_board(square) {
            Ok(square.0 * self.width + square.1)
        } else {
            Err(BoardError::OutOfRange {
                square,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Piece on a square; fails for squares outside the board.
    pub fn at_square(&self, square: Square) -> Result<Option<Piece>, BoardError> {
        self.index(square).map(|idx| self.squares[idx])
    }

    /// Piece on a square, treating off-board squares as empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if self.in_board(square) {
            self.squares[square.0 * self.width + square.1]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Step from `square` by `delta`, keeping the result only if it is on the board
    #[inline]
    #[must_use]
    pub(crate) fn step(&self, square: Square, delta: (isize, isize)) -> Option<Square> {
        square.offset(delta).filter(|sq| self.in_board(*sq))
    }

    /// All squares in row-major order
    pub fn all_squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Square(row, col)))
    }

    /// Squares holding pieces that match the optional type and side filters,
    /// in row-major order.
    #[must_use]
    pub fn find_pieces(&self, kind: Option<PieceType>, side: Option<Side>) -> Vec<Square> {
        self.all_squares()
            .filter(|sq| match self.piece_at(*sq) {
                Some(piece) => {
                    kind.map_or(true, |k| piece.kind == k) && side.map_or(true, |s| piece.side == s)
                }
                None => false,
            })
            .collect()
    }

    /// Square of the given side's king, if it has one
    #[must_use]
    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.all_squares()
            .find(|sq| self.piece_at(*sq) == Some(Piece::new(PieceType::King, side)))
    }

    /// Apply a batch of square writes, returning the new board.
    ///
    /// Writes apply in order, so a later write to the same square wins. Any
    /// write outside the board rejects the whole batch.
    pub fn mutate(&self, mutations: &[Mutation]) -> Result<Board, BoardError> {
        let mut next = self.clone();
        for mutation in mutations {
            let idx = next.index(mutation.square)?;
            next.squares[idx] = mutation.piece;
        }
        debug_assert_eq!(next.squares.len(), next.height * next.width);
        Ok(next)
    }

    /// Copy of the board with the piece on `from` moved to `to` and nothing
    /// else touched. Both squares must be on the board.
    pub(crate) fn relocated(&self, from: Square, to: Square) -> Board {
        debug_assert!(self.in_board(from) && self.in_board(to));
        let mut next = self.clone();
        let from_idx = from.0 * self.width + from.1;
        let to_idx = to.0 * self.width + to.1;
        next.squares[to_idx] = next.squares[from_idx].take();
        next
    }

    /// Algebraic name of a square: file letter plus rank counted from the bottom.
    pub fn square_name(&self, square: Square) -> Result<String, BoardError> {
        self.index(square)?;
        let file = char::from_u32('a' as u32 + square.1 as u32)
            .filter(char::is_ascii_lowercase)
            .ok_or_else(|| BoardError::InvalidSquareName {
                name: square.to_string(),
            })?;
        let rank = self.height - square.0;
        Ok(format!("{file}{rank}"))
    }

    /// Inverse of `square_name`.
    pub fn parse_square_name(&self, name: &str) -> Result<Square, BoardError> {
        let invalid = || BoardError::InvalidSquareName {
            name: name.to_string(),
        };
        let mut chars = name.chars();
        let file = chars.next().filter(char::is_ascii_lowercase).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let rank: usize = digits.parse().map_err(|_| invalid())?;
        if rank == 0 || rank > self.height {
            return Err(invalid());
        }
        let square = Square(self.height - rank, file as usize - 'a' as usize);
        if !self.in_board(square) {
            return Err(invalid());
        }
        Ok(square)
    }
}

impl TryFrom<Vec<Vec<Option<Piece>>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Option<Piece>>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Option<Piece>>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[Option<Piece>]>::to_vec).collect()
    }
}

//! Move records, from a bare proposal up to an annotated history entry.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceType};
use super::square::Square;

/// A proposed relocation. Carries no claim of validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// The capture annex of a move.
///
/// `square` equals the move's target except for en passant, where it is
/// the square of the pawn that jumped past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Take {
    pub piece: Piece,
    pub square: Square,
}

/// A move as produced by the move generator: geometry plus capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveWithTake {
    pub from: Square,
    pub to: Square,
    pub take: Option<Take>,
}

impl MoveWithTake {
    #[inline]
    #[must_use]
    pub(crate) const fn quiet(from: Square, to: Square) -> Self {
        MoveWithTake {
            from,
            to,
            take: None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn capture(from: Square, to: Square, piece: Piece, square: Square) -> Self {
        MoveWithTake {
            from,
            to,
            take: Some(Take { piece, square }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
        }
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.take.is_some()
    }

    /// En passant is the only capture whose capture square is not the target
    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.take, Some(take) if take.square != self.to)
    }
}

/// A fully annotated, executed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FullMove {
    pub from: Square,
    pub to: Square,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub take: Option<Take>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub promotion: Option<PieceType>,
}

impl FullMove {
    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.take, Some(take) if take.square != self.to)
    }
}

impl From<FullMove> for Move {
    fn from(full: FullMove) -> Self {
        full.as_move()
    }
}

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CheckState {
    #[default]
    Safe,
    Check,
    Checkmate,
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckState::Safe => write!(f, "SAFE"),
            CheckState::Check => write!(f, "CHECK"),
            CheckState::Checkmate => write!(f, "CHECKMATE"),
        }
    }
}

/// One recorded ply.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryMove {
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub full_move: FullMove,
    pub notation: String,
    /// Check state of the opponent right after this ply
    #[cfg_attr(feature = "serde", serde(default))]
    pub result_check_state: CheckState,
}

impl HistoryMove {
    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        self.full_move.as_move()
    }
}

//! Piece and side types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kinds of chess pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Parse a piece type from its uppercase letter (B, N, R, K, Q, P)
    #[must_use]
    pub fn from_letter(c: char) -> Option<PieceType> {
        match c {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Uppercase letter used by both board formats and by notation
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Returns true if a pawn may be promoted to this type
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
        )
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        };
        f.write_str(name)
    }
}

/// Player sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, white first
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposing side
    #[inline]
    #[must_use]
    pub const fn enemy(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row step of a pawn of this side (black moves down the rows, white up)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Pawn starting row on a board of the given height
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self, height: usize) -> usize {
        match self {
            Side::White => height.saturating_sub(2),
            Side::Black => 1,
        }
    }

    /// Row a pawn of this side lands on after a two-square jump
    #[inline]
    #[must_use]
    pub const fn pawn_jump_row(self, height: usize) -> usize {
        match self {
            Side::White => height.saturating_sub(4),
            Side::Black => 3,
        }
    }

    /// Row on which a pawn of this side promotes
    #[inline]
    #[must_use]
    pub const fn last_row(self, height: usize) -> usize {
        match self {
            Side::White => 0,
            Side::Black => height.saturating_sub(1),
        }
    }

    /// Character used by the boxed board format
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// A piece standing on a square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PieceType,
    pub side: Side,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceType, side: Side) -> Self {
        Piece { kind, side }
    }

    /// Two-character code of the boxed format, side first (e.g. `wK`)
    #[must_use]
    pub fn code(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.side.to_char());
        s.push(self.kind.letter());
        s
    }

    /// Parse a two-character boxed-format code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Piece> {
        let mut chars = code.chars();
        let side = Side::from_char(chars.next()?)?;
        let kind = PieceType::from_letter(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece { kind, side })
    }

    /// Single letter of the compressed format, uppercase for white
    #[inline]
    #[must_use]
    pub fn compressed_char(self) -> char {
        let c = self.kind.letter();
        if self.side == Side::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    #[must_use]
    pub fn from_compressed_char(c: char) -> Option<Piece> {
        let kind = PieceType::from_letter(c.to_ascii_uppercase())?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece { kind, side })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

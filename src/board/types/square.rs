//! Square coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the board, represented as (row, col).
///
/// Row 0 is the top of the board (black's home side in the standard
/// orientation); column 0 is file `a`. Whether a square lies inside a
/// particular board is a property of that board, see `Board::in_board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Square(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Shift by a (row, col) delta. Returns `None` when either coordinate
    /// would become negative; the upper bound is left to the board.
    #[inline]
    #[must_use]
    pub fn offset(self, (dr, dc): (isize, isize)) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Some(Square(row, col))
    }

    /// Signed (row, col) difference from `self` to `other`
    #[inline]
    #[must_use]
    pub const fn diff(self, other: Square) -> (isize, isize) {
        (
            other.0 as isize - self.0 as isize,
            other.1 as isize - self.1 as isize,
        )
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Square(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

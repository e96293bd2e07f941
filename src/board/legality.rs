//! Check detection and legal move filtering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::{Board, CheckState, Move, MoveWithTake, Side, Square};

/// Rule used to tell checkmate from check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MateDetection {
    /// Mate when in check and the king itself has no valid move. Blocking
    /// or capturing with another piece is not considered.
    #[default]
    KingMoves,
    /// Mate when in check and no piece of the side has a valid move.
    AnyMove,
}

impl Board {
    /// True iff some feasible move of the opposing side targets `side`'s king.
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_check(&self, previous: Option<Move>, side: Side) -> bool {
        match self.find_king(side) {
            Some(king) => self.is_attacked(king, previous, side.enemy()),
            None => false,
        }
    }

    pub(crate) fn is_attacked(&self, square: Square, previous: Option<Move>, by: Side) -> bool {
        self.all_feasible_moves(previous, by)
            .iter()
            .any(|mv| mv.to == square)
    }

    /// Feasible moves of the piece on `from` that do not leave `side`'s king
    /// in check. An empty square has no valid moves.
    pub fn valid_moves(
        &self,
        from: Square,
        previous: Option<Move>,
        side: Side,
    ) -> Result<Vec<MoveWithTake>, MoveError> {
        if self.at_square(from)?.is_none() {
            return Ok(Vec::new());
        }
        let feasible = self.feasible_moves(from, previous, side)?;
        Ok(feasible
            .into_iter()
            .filter(|mv| !self.leaves_king_in_check(mv, previous, side))
            .collect())
    }

    /// Simulate the relocation only and test the mover's king.
    pub(crate) fn leaves_king_in_check(
        &self,
        mv: &MoveWithTake,
        previous: Option<Move>,
        side: Side,
    ) -> bool {
        self.relocated(mv.from, mv.to).is_check(previous, side)
    }

    /// Returns true if `mv` is a valid move for `side`. Empty, enemy-held or
    /// off-board source squares simply yield `false`.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move, previous: Option<Move>, side: Side) -> bool {
        self.valid_moves(mv.from, previous, side)
            .map(|moves| moves.iter().any(|m| m.to == mv.to))
            .unwrap_or(false)
    }

    /// Valid moves of every piece of `side`.
    #[must_use]
    pub fn all_valid_moves(&self, previous: Option<Move>, side: Side) -> Vec<MoveWithTake> {
        self.all_feasible_moves(previous, side)
            .into_iter()
            .filter(|mv| !self.leaves_king_in_check(mv, previous, side))
            .collect()
    }

    /// Classify the position for `side` using the default mate rule.
    pub fn check_state(&self, previous: Option<Move>, side: Side) -> Result<CheckState, MoveError> {
        self.check_state_with(previous, side, MateDetection::default())
    }

    /// Classify the position for `side`. Fails if `side` has no king.
    pub fn check_state_with(
        &self,
        previous: Option<Move>,
        side: Side,
        rule: MateDetection,
    ) -> Result<CheckState, MoveError> {
        let king = self.find_king(side).ok_or(MoveError::MissingKing { side })?;
        if !self.is_check(previous, side) {
            return Ok(CheckState::Safe);
        }
        let can_escape = match rule {
            MateDetection::KingMoves => !self.valid_moves(king, previous, side)?.is_empty(),
            MateDetection::AnyMove => !self.all_valid_moves(previous, side).is_empty(),
        };
        Ok(if can_escape {
            CheckState::Check
        } else {
            CheckState::Checkmate
        })
    }
}

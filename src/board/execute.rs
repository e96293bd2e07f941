//! Move execution: validate one move and produce the next board.

use super::error::MoveError;
use super::state::Mutation;
use super::{Board, FullMove, Move, Piece, PieceType, Side};

/// The annotated move and the board it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub full_move: FullMove,
    pub board: Board,
}

impl Board {
    /// Returns true if `mv` takes a pawn of `side` onto its last row.
    #[must_use]
    pub fn can_promote(&self, mv: Move, side: Side) -> bool {
        matches!(
            self.piece_at(mv.from),
            Some(piece) if piece.side == side && piece.kind == PieceType::Pawn
        ) && mv.to.row() == side.last_row(self.height())
    }

    /// Validate and apply `mv` for `side`, returning the new board.
    ///
    /// `promotion` is required when a pawn reaches its last row and ignored
    /// otherwise. The capture comes from the move generator's annotation, so
    /// an en passant move also clears the jumped pawn's square. `self` is
    /// never modified.
    pub fn execute_move(
        &self,
        mv: Move,
        previous: Option<Move>,
        promotion: Option<PieceType>,
        side: Side,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = self
            .at_square(mv.from)?
            .ok_or(MoveError::NoPiece { square: mv.from })?;
        if piece.side != side {
            return Err(MoveError::WrongSide {
                square: mv.from,
                expected: side,
            });
        }
        self.at_square(mv.to)?;

        let annotated = self
            .feasible_moves(mv.from, previous, side)?
            .into_iter()
            .find(|m| m.to == mv.to)
            .ok_or(MoveError::NotFeasible { mv })?;
        if self.leaves_king_in_check(&annotated, previous, side) {
            return Err(MoveError::LeavesKingInCheck { mv });
        }

        let promotion = if self.can_promote(mv, side) {
            let kind = promotion.ok_or(MoveError::PromotionRequired { square: mv.to })?;
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotion { piece: kind });
            }
            Some(kind)
        } else {
            None
        };

        let placed = Piece::new(promotion.unwrap_or(piece.kind), side);
        let mut writes = vec![Mutation::clear(mv.from), Mutation::place(mv.to, placed)];
        if let Some(take) = annotated.take {
            if take.square != mv.to {
                writes.push(Mutation::clear(take.square));
            }
        }
        let board = self.mutate(&writes)?;

        Ok(MoveOutcome {
            full_move: FullMove {
                from: mv.from,
                to: mv.to,
                take: annotated.take,
                promotion,
            },
            board,
        })
    }
}

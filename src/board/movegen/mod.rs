//! Feasible move generation.
//!
//! A feasible move obeys the piece's movement shape, the board bounds and
//! blocking/capture rules, but may still leave the mover's own king in
//! check. Filtering down to valid moves happens in `legality`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::MoveError;
use super::{Board, Move, MoveWithTake, PieceType, Side, Square};

pub(crate) use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

impl Board {
    /// Feasible moves of the piece on `from`.
    ///
    /// `previous` is the opponent's last move, needed for en passant. Fails
    /// if `from` is off the board, empty, or holds a piece of the other side.
    pub fn feasible_moves(
        &self,
        from: Square,
        previous: Option<Move>,
        side: Side,
    ) -> Result<Vec<MoveWithTake>, MoveError> {
        let piece = self
            .at_square(from)?
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.side != side {
            return Err(MoveError::WrongSide {
                square: from,
                expected: side,
            });
        }
        Ok(self.piece_moves(from, piece.kind, previous, side))
    }

    /// Returns true if `mv` is among the feasible moves of its source piece.
    pub fn is_feasible_move(
        &self,
        mv: Move,
        previous: Option<Move>,
        side: Side,
    ) -> Result<bool, MoveError> {
        Ok(self
            .feasible_moves(mv.from, previous, side)?
            .iter()
            .any(|m| m.to == mv.to))
    }

    /// Feasible moves of every piece of `side`, in row-major source order.
    #[must_use]
    pub fn all_feasible_moves(&self, previous: Option<Move>, side: Side) -> Vec<MoveWithTake> {
        let mut moves = Vec::new();
        for from in self.find_pieces(None, Some(side)) {
            if let Some(piece) = self.piece_at(from) {
                moves.extend(self.piece_moves(from, piece.kind, previous, side));
            }
        }
        moves
    }

    /// Dispatch on piece type. Callers guarantee a `side` piece of `kind` on `from`.
    pub(crate) fn piece_moves(
        &self,
        from: Square,
        kind: PieceType,
        previous: Option<Move>,
        side: Side,
    ) -> Vec<MoveWithTake> {
        match kind {
            PieceType::Pawn => self.generate_pawn_moves(from, previous, side),
            PieceType::Knight => self.generate_knight_moves(from, side),
            PieceType::Bishop => self.generate_sliding_moves(from, side, &BISHOP_DIRECTIONS),
            PieceType::Rook => self.generate_sliding_moves(from, side, &ROOK_DIRECTIONS),
            PieceType::Queen => self.generate_sliding_moves(from, side, &QUEEN_DIRECTIONS),
            PieceType::King => self.generate_king_moves(from, side),
        }
    }

    /// Single-step test of each offset: empty square, enemy capture, or nothing.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        side: Side,
        offsets: &[(isize, isize)],
    ) -> Vec<MoveWithTake> {
        let mut moves = Vec::with_capacity(offsets.len());
        for &delta in offsets {
            let Some(to) = self.step(from, delta) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(MoveWithTake::quiet(from, to)),
                Some(target) if target.side != side => {
                    moves.push(MoveWithTake::capture(from, to, target, to));
                }
                Some(_) => {}
            }
        }
        moves
    }
}

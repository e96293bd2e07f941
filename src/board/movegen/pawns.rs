use super::super::{Board, Move, MoveWithTake, Piece, PieceType, Side, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        previous: Option<Move>,
        side: Side,
    ) -> Vec<MoveWithTake> {
        let mut moves = Vec::new();
        let dir = side.pawn_direction();

        if let Some(forward) = self.step(from, (dir, 0)) {
            if self.is_empty(forward) {
                moves.push(MoveWithTake::quiet(from, forward));
                if from.row() == side.pawn_start_row(self.height()) {
                    if let Some(jump) = self.step(from, (2 * dir, 0)) {
                        if self.is_empty(jump) {
                            moves.push(MoveWithTake::quiet(from, jump));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = self.step(from, (dir, dc)) {
                if let Some(victim) = self.piece_at(target) {
                    if victim.side != side {
                        moves.push(MoveWithTake::capture(from, target, victim, target));
                    }
                }
            }
        }

        if let Some(en_passant) = self.en_passant_move(from, previous, side) {
            moves.push(en_passant);
        }

        moves
    }

    /// En passant capture available to the pawn on `from`, if the opponent's
    /// last move was a two-square pawn jump landing right beside it.
    fn en_passant_move(
        &self,
        from: Square,
        previous: Option<Move>,
        side: Side,
    ) -> Option<MoveWithTake> {
        let previous = previous?;
        let enemy = side.enemy();
        let jumped = self.piece_at(previous.to)?;
        if jumped != Piece::new(PieceType::Pawn, enemy) {
            return None;
        }

        let height = self.height();
        let was_jump = previous.from.row() == enemy.pawn_start_row(height)
            && previous.to.row() == enemy.pawn_jump_row(height)
            && previous.from.col() == previous.to.col();
        if !was_jump {
            return None;
        }

        let (dr, dc) = from.diff(previous.to);
        if dr != 0 || dc.abs() != 1 {
            return None;
        }

        let to = self.step(from, (side.pawn_direction(), dc))?;
        if !self.is_empty(to) {
            return None;
        }
        Some(MoveWithTake::capture(from, to, jumped, previous.to))
    }
}

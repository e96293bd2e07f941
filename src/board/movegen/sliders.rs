use super::super::{Board, MoveWithTake, Side, Square};

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (0, -1), (1, 0)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 0),
];

impl Board {
    /// Walk each direction until the edge or the first occupied square,
    /// which is included only if it holds an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        side: Side,
        directions: &[(isize, isize)],
    ) -> Vec<MoveWithTake> {
        let mut moves = Vec::new();
        for &dir in directions {
            let mut current = self.step(from, dir);
            while let Some(to) = current {
                match self.piece_at(to) {
                    None => {
                        moves.push(MoveWithTake::quiet(from, to));
                        current = self.step(to, dir);
                    }
                    Some(blocker) => {
                        if blocker.side != side {
                            moves.push(MoveWithTake::capture(from, to, blocker, to));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}

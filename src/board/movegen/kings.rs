use super::super::{Board, MoveWithTake, Side, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    // No castling: kings only ever step one square.
    pub(crate) fn generate_king_moves(&self, from: Square, side: Side) -> Vec<MoveWithTake> {
        self.generate_step_moves(from, side, &KING_OFFSETS)
    }
}

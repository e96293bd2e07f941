use super::super::{Board, MoveWithTake, Side, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Side) -> Vec<MoveWithTake> {
        self.generate_step_moves(from, side, &KNIGHT_OFFSETS)
    }
}

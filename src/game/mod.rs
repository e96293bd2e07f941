//! Game sessions built on the board rules.
//!
//! A [`Game`] is free play with history browsing, a [`PuzzleGame`] checks
//! each move against a scripted [`Puzzle`] and answers with the scripted
//! reply. Sessions own their boards; a [`SessionStore`] keeps many of them
//! side by side.
//!
//! Accepted moves, puzzle mismatches and session changes are reported
//! through the `log` facade. Nothing is printed unless the host installs a
//! logger.

mod error;
mod player;
mod puzzle;
mod registry;

pub use error::GameError;
pub use player::{Game, GameOptions, ViewState};
pub use puzzle::{MoveStatus, Progress, Puzzle, PuzzleGame, PuzzleMoveResult};
pub use registry::{SessionId, SessionStore};

use crate::board::{Board, HistoryMove, MateDetection, Move, PieceType, Side};

/// Execute, notate and classify one ply. Nothing is committed here; the
/// caller stores the returned board and history entry.
pub(crate) fn play_move(
    board: &Board,
    previous: Option<Move>,
    mv: Move,
    promotion: Option<PieceType>,
    side: Side,
    rule: MateDetection,
) -> Result<(Board, HistoryMove), GameError> {
    let outcome = board.execute_move(mv, previous, promotion, side)?;
    let notation = board.notate_with(&outcome.full_move, previous, side, rule)?;
    let result_check_state = outcome
        .board
        .check_state_with(Some(mv), side.enemy(), rule)?;
    Ok((
        outcome.board,
        HistoryMove {
            full_move: outcome.full_move,
            notation,
            result_check_state,
        },
    ))
}

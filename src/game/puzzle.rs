//! Scripted puzzles and the game that checks moves against them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, CheckState, HistoryMove, Move, PieceType, Side, Square};

use super::{play_move, GameError, GameOptions};

/// A starting position and the moves that solve it. Entries alternate
/// between the solver and the scripted replies, solver first.
///
/// `previous_move` is the ply that led to `start_board`, if known. It
/// decides whether an en passant capture is open on the first move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Puzzle {
    pub id: String,
    pub start_board: Board,
    pub side_to_move: Side,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub previous_move: Option<Move>,
    pub correct_moves: Vec<HistoryMove>,
}

impl Puzzle {
    /// Build a puzzle from a position that precedes a blunder.
    ///
    /// `position` is `"<compressed board> <w|b> ..."`; trailing fields are
    /// ignored. The blunder is played first, then `forced_line` is replayed
    /// in notation from the resulting board. The side that answers the
    /// blunder solves the puzzle. Any unreadable field or rejected move
    /// aborts the import.
    pub fn from_forced_line<S: AsRef<str>>(
        id: impl Into<String>,
        position: &str,
        blunder: &str,
        forced_line: &[S],
    ) -> Result<Self, GameError> {
        let id = id.into();
        let invalid = || GameError::InvalidPosition {
            position: position.to_string(),
        };
        let mut fields = position.split_whitespace();
        let (Some(compressed), Some(side_field)) = (fields.next(), fields.next()) else {
            return Err(invalid());
        };
        let blunder_side = match side_field {
            "w" => Side::White,
            "b" => Side::Black,
            _ => return Err(invalid()),
        };

        let board = Board::try_from_compressed(compressed)?;
        let blunder_move = board.parse_move_notation(blunder, blunder_side)?;
        let start_board = board
            .execute_move(blunder_move.as_move(), None, blunder_move.promotion, blunder_side)?
            .board;
        let side_to_move = blunder_side.enemy();
        let previous_move = Some(blunder_move.as_move());

        let rule = GameOptions::default().mate_detection;
        let mut board = start_board.clone();
        let mut side = side_to_move;
        let mut previous = previous_move;
        let mut correct_moves = Vec::with_capacity(forced_line.len());
        for notation in forced_line {
            let parsed = board.parse_move_notation(notation.as_ref(), side)?;
            let mv = parsed.as_move();
            let (next, entry) = play_move(&board, previous, mv, parsed.promotion, side, rule)?;
            correct_moves.push(entry);
            board = next;
            side = side.enemy();
            previous = Some(mv);
        }

        log::info!(
            "imported puzzle {id}: {} to move, {} scripted plies",
            side_to_move,
            correct_moves.len()
        );
        Ok(Puzzle {
            id,
            start_board,
            side_to_move,
            previous_move,
            correct_moves,
        })
    }
}

/// Outcome of a single puzzle attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MoveStatus {
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Progress {
    #[default]
    Playing,
    Completed,
}

/// Result of [`PuzzleGame::try_move`]. A wrong move is a `Failure`, not an
/// error. `puzzle_move` is the scripted reply played in answer, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PuzzleMoveResult {
    pub status: MoveStatus,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub puzzle_move: Option<HistoryMove>,
}

impl PuzzleMoveResult {
    const FAILURE: PuzzleMoveResult = PuzzleMoveResult {
        status: MoveStatus::Failure,
        puzzle_move: None,
    };

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == MoveStatus::Success
    }
}

/// A puzzle being solved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PuzzleGame {
    puzzle: Puzzle,
    board: Board,
    side_to_move: Side,
    check_state: CheckState,
    history: Vec<HistoryMove>,
    progress: Progress,
    options: GameOptions,
}

impl PuzzleGame {
    pub fn from_puzzle(puzzle: Puzzle) -> Result<Self, GameError> {
        Self::with_options(puzzle, GameOptions::default())
    }

    pub fn with_options(puzzle: Puzzle, options: GameOptions) -> Result<Self, GameError> {
        let board = puzzle.start_board.clone();
        let side_to_move = puzzle.side_to_move;
        let check_state =
            board.check_state_with(puzzle.previous_move, side_to_move, options.mate_detection)?;
        let progress = if puzzle.correct_moves.is_empty() {
            Progress::Completed
        } else {
            Progress::Playing
        };
        Ok(PuzzleGame {
            puzzle,
            board,
            side_to_move,
            check_state,
            history: Vec::new(),
            progress,
            options,
        })
    }

    #[inline]
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn check_state(&self) -> CheckState {
        self.check_state
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryMove] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Last ply played, or the ply that led to the puzzle position
    #[must_use]
    pub fn previous_move(&self) -> Option<Move> {
        self.history
            .last()
            .map(HistoryMove::as_move)
            .or(self.puzzle.previous_move)
    }

    /// Check a move against the script and play it if it matches.
    ///
    /// A mismatch, or any move after completion, returns `Failure` and
    /// leaves the game untouched. When the scripted move promotes, the
    /// promotion must match too; otherwise `promotion` is ignored. On a match the move and the following
    /// scripted reply (if the script has one) are both played. Errors only
    /// come from a script that the rules reject.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<PuzzleMoveResult, GameError> {
        let ply = self.history.len();
        let Some(expected) = self.puzzle.correct_moves.get(ply) else {
            log::debug!("puzzle {}: move after completion", self.puzzle.id);
            return Ok(PuzzleMoveResult::FAILURE);
        };
        let wanted = expected.full_move;
        let promotion_matches = wanted.promotion.is_none() || promotion == wanted.promotion;
        if Move::new(from, to) != wanted.as_move() || !promotion_matches {
            log::debug!(
                "puzzle {}: ply {ply} expected {}, got {}",
                self.puzzle.id,
                expected.notation,
                Move::new(from, to)
            );
            return Ok(PuzzleMoveResult::FAILURE);
        }

        let rule = self.options.mate_detection;
        let mut side = self.side_to_move;
        let mut previous = self.previous_move();
        let (mut board, entry) = play_move(
            &self.board,
            previous,
            wanted.as_move(),
            wanted.promotion,
            side,
            rule,
        )?;
        let mut history = vec![entry];
        side = side.enemy();
        previous = Some(wanted.as_move());

        let mut puzzle_move = None;
        if let Some(reply) = self.puzzle.correct_moves.get(ply + 1) {
            let mv = reply.as_move();
            let (next, entry) =
                play_move(&board, previous, mv, reply.full_move.promotion, side, rule)?;
            board = next;
            puzzle_move = Some(entry.clone());
            history.push(entry);
            side = side.enemy();
            previous = Some(mv);
        }
        let check_state = board.check_state_with(previous, side, rule)?;

        self.board = board;
        self.side_to_move = side;
        self.check_state = check_state;
        self.history.extend(history);
        if self.history.len() >= self.puzzle.correct_moves.len() {
            self.progress = Progress::Completed;
            log::info!("puzzle {} completed", self.puzzle.id);
        }

        Ok(PuzzleMoveResult {
            status: MoveStatus::Success,
            puzzle_move,
        })
    }
}

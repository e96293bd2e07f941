//! Free-play game with history browsing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, CheckState, HistoryMove, MateDetection, Move, PieceType, Side, Square};

use super::{play_move, GameError};

/// Whether a game shows its latest position or an earlier one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ViewState {
    #[default]
    Current,
    Viewing,
}

/// Rules a session applies when it classifies positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    pub mate_detection: MateDetection,
}

/// A free-play game: sides alternate, every accepted ply is recorded.
///
/// `board`, `side_to_move` and `check_state` describe the position on
/// display. After [`Game::goto_move`] that can be an earlier position, and
/// new moves are refused until [`Game::goto_latest`].
///
/// A deserialized game is checked by replaying its history up to the
/// displayed ply; the stored position fields are recomputed from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GameRecord", into = "GameRecord"))]
pub struct Game {
    initial_board: Board,
    initial_side: Side,
    board: Board,
    side_to_move: Side,
    check_state: CheckState,
    history: Vec<HistoryMove>,
    shown: usize,
    options: GameOptions,
}

/// Stored form of a [`Game`], trusted only after replay
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GameRecord {
    initial_board: Board,
    initial_side: Side,
    board: Board,
    side_to_move: Side,
    check_state: CheckState,
    history: Vec<HistoryMove>,
    shown: usize,
    #[serde(default)]
    options: GameOptions,
}

#[cfg(feature = "serde")]
impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        if record.shown > record.history.len() {
            return Err(GameError::PlyOutOfRange {
                ply: record.shown,
                plies: record.history.len(),
            });
        }
        let mut game = Game {
            initial_board: record.initial_board.clone(),
            initial_side: record.initial_side,
            board: record.initial_board,
            side_to_move: record.initial_side,
            check_state: record.check_state,
            history: record.history,
            shown: 0,
            options: record.options,
        };
        game.show(record.shown)?;
        Ok(game)
    }
}

#[cfg(feature = "serde")]
impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        GameRecord {
            initial_board: game.initial_board,
            initial_side: game.initial_side,
            board: game.board,
            side_to_move: game.side_to_move,
            check_state: game.check_state,
            history: game.history,
            shown: game.shown,
            options: game.options,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard board, white to move
    #[must_use]
    pub fn new() -> Self {
        let board = Board::standard();
        Game {
            initial_board: board.clone(),
            initial_side: Side::White,
            board,
            side_to_move: Side::White,
            check_state: CheckState::Safe,
            history: Vec::new(),
            shown: 0,
            options: GameOptions::default(),
        }
    }

    /// Start from an arbitrary position. Fails if `side` has no king.
    pub fn from_position(board: Board, side: Side) -> Result<Self, GameError> {
        Self::with_options(board, side, GameOptions::default())
    }

    pub fn with_options(board: Board, side: Side, options: GameOptions) -> Result<Self, GameError> {
        let check_state = board.check_state_with(None, side, options.mate_detection)?;
        Ok(Game {
            initial_board: board.clone(),
            initial_side: side,
            board,
            side_to_move: side,
            check_state,
            history: Vec::new(),
            shown: 0,
            options,
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
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
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        if self.shown == self.history.len() {
            ViewState::Current
        } else {
            ViewState::Viewing
        }
    }

    /// Last ply leading to the displayed position
    #[must_use]
    pub fn previous_move(&self) -> Option<Move> {
        self.history[..self.shown].last().map(HistoryMove::as_move)
    }

    /// Valid targets for the piece on `from` in the displayed position
    pub fn valid_targets(&self, from: Square) -> Result<Vec<Square>, GameError> {
        let moves = self
            .board
            .valid_moves(from, self.previous_move(), self.side_to_move)?;
        Ok(moves.into_iter().map(|m| m.to).collect())
    }

    /// Play a move for the side to move.
    ///
    /// On success the side flips, the ply is appended to history and the
    /// check state is recomputed for the new side. On error nothing changes.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<&HistoryMove, GameError> {
        if self.view_state() == ViewState::Viewing {
            return Err(GameError::ViewingHistory);
        }

        let (board, entry) = play_move(
            &self.board,
            self.previous_move(),
            Move::new(from, to),
            promotion,
            self.side_to_move,
            self.options.mate_detection,
        )?;

        log::debug!(
            "ply {}: {} played {} ({})",
            self.history.len(),
            self.side_to_move,
            entry.notation,
            entry.result_check_state
        );
        self.board = board;
        self.side_to_move = self.side_to_move.enemy();
        self.check_state = entry.result_check_state;
        self.history.push(entry);
        self.shown = self.history.len();
        Ok(&self.history[self.shown - 1])
    }

    /// Show the position after ply `ply` (0-based) by replaying the history
    /// from the initial board. Any ply but the last switches to viewing.
    pub fn goto_move(&mut self, ply: usize) -> Result<(), GameError> {
        if ply >= self.history.len() {
            return Err(GameError::PlyOutOfRange {
                ply,
                plies: self.history.len(),
            });
        }
        self.show(ply + 1)
    }

    /// Return to the latest position
    pub fn goto_latest(&mut self) -> Result<(), GameError> {
        self.show(self.history.len())
    }

    fn show(&mut self, plies: usize) -> Result<(), GameError> {
        let mut board = self.initial_board.clone();
        let mut side = self.initial_side;
        let mut previous = None;
        for entry in &self.history[..plies] {
            let mv = entry.as_move();
            board = board
                .execute_move(mv, previous, entry.full_move.promotion, side)?
                .board;
            side = side.enemy();
            previous = Some(mv);
        }
        let check_state = board.check_state_with(previous, side, self.options.mate_detection)?;

        log::debug!("showing {plies} of {} plies", self.history.len());
        self.board = board;
        self.side_to_move = side;
        self.check_state = check_state;
        self.shown = plies;
        Ok(())
    }
}

//! Error types for game sessions.

use std::fmt;

use crate::board::{BoardError, MoveError, NotationError};

use super::SessionId;

/// Error type for game and puzzle state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was submitted while browsing history
    ViewingHistory,
    /// `goto_move` asked for a ply the game has not played
    PlyOutOfRange { ply: usize, plies: usize },
    /// No session is stored under this id
    SessionNotFound { id: SessionId },
    /// Puzzle position string is not `<board> <w|b> ...`
    InvalidPosition { position: String },
    /// The move was rejected by the rules
    Move(MoveError),
    /// A scripted move could not be parsed or notated
    Notation(NotationError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ViewingHistory => {
                write!(f, "Cannot make a move in a game when reviewing history")
            }
            GameError::PlyOutOfRange { ply, plies } => {
                write!(f, "Ply {ply} is out of range (game has {plies} plies)")
            }
            GameError::SessionNotFound { id } => write!(f, "Session {id} not found"),
            GameError::InvalidPosition { position } => {
                write!(f, "Invalid puzzle position '{position}'")
            }
            GameError::Move(err) => write!(f, "{err}"),
            GameError::Notation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            GameError::Notation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl From<NotationError> for GameError {
    fn from(err: NotationError) -> Self {
        GameError::Notation(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Move(MoveError::Board(err))
    }
}

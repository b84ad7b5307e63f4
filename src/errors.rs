//! Error types shared across the crate.
//!
//! Input and move errors are recoverable: the console reports them and asks
//! again. Engine errors mean the computer could not produce a move.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Malformed text from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The move line did not contain exactly two tokens.
    WrongTokenCount(usize),
    /// A coordinate token was not two characters long.
    InvalidSquare(String),
    InvalidFile(char),
    InvalidRank(char),
    /// Promotion choice outside `Q R B N`.
    InvalidPromotionPiece(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "expected two squares such as 'e2 e4', got {n} token(s)")
            }
            InputError::InvalidSquare(s) => write!(f, "invalid square '{s}'"),
            InputError::InvalidFile(c) => write!(f, "invalid file '{c}', expected a-h"),
            InputError::InvalidRank(c) => write!(f, "invalid rank '{c}', expected 1-8"),
            InputError::InvalidPromotionPiece(s) => {
                write!(f, "invalid promotion piece '{s}', expected Q, R, B or N")
            }
        }
    }
}

impl Error for InputError {}

/// A well-formed move the rules refuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    EmptySquare(Square),
    /// The origin holds a piece of the other color.
    NotYourPiece { square: Square, side: Color },
    Illegal { from: Square, to: Square },
    CastlingNotAllowed { from: Square, to: Square },
    InvalidPromotion,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare(sq) => write!(f, "there is no piece on {sq}"),
            MoveError::NotYourPiece { square, side } => {
                write!(f, "the piece on {square} does not belong to {side}")
            }
            MoveError::Illegal { from, to } => write!(f, "illegal move {from} {to}"),
            MoveError::CastlingNotAllowed { from, to } => {
                write!(f, "castling {from} {to} is not allowed here")
            }
            MoveError::InvalidPromotion => write!(f, "pawns can only promote to Q, R, B or N"),
        }
    }
}

impl Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine was asked to move for a side with no legal moves.
    NoLegalMoves(Color),
    InvalidMove(MoveError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoLegalMoves(side) => write!(f, "{side} has no legal moves"),
            EngineError::InvalidMove(err) => write!(f, "engine produced an invalid move: {err}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::InvalidMove(err) => Some(err),
            EngineError::NoLegalMoves(_) => None,
        }
    }
}

impl From<MoveError> for EngineError {
    fn from(value: MoveError) -> Self {
        EngineError::InvalidMove(value)
    }
}

/// Failure that ends a console session early.
#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Engine(EngineError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "console i/o failed: {err}"),
            SessionError::Engine(err) => write!(f, "computer move failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Engine(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        SessionError::Io(value)
    }
}

impl From<EngineError> for SessionError {
    fn from(value: EngineError) -> Self {
        SessionError::Engine(value)
    }
}

//! Errors used throughout the Othello engine.
//!
//! `OthelloError` is the single error type returned by rule application,
//! notation parsing, engines and the text protocol. Parsing and move variants
//! are recoverable and meant to be shown to a user or an external engine;
//! `IllegalPlayerIdentity` signals a caller bug and is not expected to be
//! recovered from.

use crate::game_state::othello_types::Color;

/// Unified error type for the Othello engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    /// The destination is not in the legal set of the side to move.
    ///
    /// Raised before any board mutation, so the position is unchanged.
    #[error("invalid move: {coord} is not a legal destination for {color}")]
    InvalidMove { coord: String, color: Color },

    /// A position string does not match `[-XO]{64} [XO];`.
    #[error("malformed position string: {0}")]
    MalformedPosition(String),

    /// A raw value was decoded as a player but names neither color.
    #[error("illegal player identity: {0}")]
    IllegalPlayerIdentity(String),

    /// A coordinate token is not `a1`..`h8` or `ps`.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A move was submitted after the game reached its terminal state.
    #[error("game is already over")]
    GameOver,

    /// The external engine stream ended or produced an unusable reply.
    #[error("engine protocol error: {0}")]
    EngineProtocol(String),

    /// A perft worker thread panicked before reporting its counts.
    #[error("worker thread panicked: {0}")]
    WorkerPanicked(String),

    /// Underlying stream failure, flattened so the enum stays comparable.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for OthelloError {
    fn from(err: std::io::Error) -> Self {
        OthelloError::Io(err.to_string())
    }
}

pub type OthelloResult<T> = Result<T, OthelloError>;

//! Error types for board, strategy and engine operations.

use crate::position::Position;
use crate::types::Mark;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A move that cannot be applied.
///
/// Recoverable: the engine rejects the move and leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The coordinates fall outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A winning line is already on the board.
    #[display("Board already has a winner")]
    BoardTerminal,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The mark does not belong to the active player.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}

/// A strategy could not produce a move.
///
/// Always a caller-side defect: the engine checks for terminal states before
/// asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StrategyError {
    /// There are no empty cells to choose from.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for StrategyError {}

/// Errors surfaced by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A submitted or computed move was illegal.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// A computer strategy failed.
    #[display("Strategy failed: {}", _0)]
    Strategy(StrategyError),

    /// Both players were given the same mark.
    #[display("Both players hold {}", _0)]
    #[from(skip)]
    #[error(ignore)]
    DuplicateMark(Mark),
}

impl GameError {
    /// Returns the move error if this is a rejected move.
    pub fn as_move_error(&self) -> Option<&MoveError> {
        match self {
            GameError::InvalidMove(err) => Some(err),
            GameError::Strategy(_) | GameError::DuplicateMark(_) => None,
        }
    }
}

/// A board literal could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", message, file, line)]
pub struct BoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Consistency checks over a running game.
//!
//! The engine asserts these after every committed move in debug builds.

use crate::board::Board;
use crate::engine::GameEngine;
use crate::types::Symbol;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: squares are written once and never change.
///
/// Replaying the move history onto an empty board must reproduce the live
/// board exactly.
pub struct MonotonicBoard;

impl Invariant<GameEngine> for MonotonicBoard {
    fn holds(game: &GameEngine) -> bool {
        let mut replayed = Board::new();
        for mov in game.history() {
            if replayed.apply_move(mov.position, mov.mark).is_err() {
                return false;
            }
        }

        game.board()
            .cells()
            .zip(replayed.cells())
            .all(|(live, replayed)| live.symbol() == replayed.symbol())
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

/// Invariant: consecutive moves alternate marks, and the filled squares
/// match the history length.
pub struct AlternatingTurn;

impl Invariant<GameEngine> for AlternatingTurn {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();
        let filled = game
            .board()
            .cells()
            .filter(|cell| cell.symbol() != Symbol::Empty)
            .count();

        filled == history.len() && history.windows(2).all(|pair| pair[0].mark != pair[1].mark)
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MonotonicBoard, AlternatingTurn);

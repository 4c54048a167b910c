//! Move selection for computer-controlled players.
//!
//! A human player has no strategy at all; the engine waits for
//! [`GameEngine::submit_move`](crate::GameEngine::submit_move) instead.

use crate::board::Board;
use crate::error::StrategyError;
use crate::minimax::MinimaxStrategy;
use crate::position::Position;
use crate::types::Mark;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chooses the next move for a computer player.
pub trait Strategy: std::fmt::Debug + Send {
    /// Picks a move for `mark` on `board`.
    ///
    /// `last_move` is the opponent's most recent move, or `None` at the start
    /// of the game.
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        last_move: Option<Position>,
    ) -> Result<Position, StrategyError>;
}

/// Computer difficulty levels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Full-depth minimax; never loses.
    Impossible,
}

impl Difficulty {
    /// Builds the strategy for this difficulty.
    #[instrument]
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Impossible => Box::new(MinimaxStrategy::new()),
        }
    }
}

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        _last_move: Option<Position>,
    ) -> Result<Position, StrategyError> {
        let choice = board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoMovesAvailable)?;
        debug!(position = %choice, "Random move chosen");
        Ok(choice)
    }
}

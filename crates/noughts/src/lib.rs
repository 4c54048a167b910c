//! Noughts - tic-tac-toe game logic with computer opponents
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells, win detection through the last move, terminal scoring
//! - **Strategy**: computer move selection, uniformly random or exhaustive minimax
//! - **GameEngine**: turn state machine; plays computer turns synchronously
//! - **Config**: plain-data player and session settings
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameConfig, GameEngine, GameState, Position};
//!
//! # fn example() -> Result<(), noughts::GameError> {
//! let config = GameConfig::against_computer("Ada", Difficulty::Impossible);
//! let mut game = GameEngine::new(config)?;
//!
//! // The computer replies before submit_move returns.
//! let state = game.submit_move(Position::CENTER)?;
//! assert!(matches!(state, GameState::AwaitingMove(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod cell;
mod config;
mod engine;
mod error;
mod invariants;
mod minimax;
mod player;
mod position;
mod strategy;
mod types;

// Crate-level exports - Board model
pub use board::{Board, DIMENSION, WIN_SCORE};
pub use cell::Cell;
pub use position::Position;
pub use types::{Mark, Symbol};

// Crate-level exports - Strategies
pub use minimax::{Evaluation, MinimaxStrategy};
pub use strategy::{Difficulty, RandomStrategy, Strategy};

// Crate-level exports - Engine
pub use action::Move;
pub use config::{Controller, FirstPlayer, GameConfig, PlayerConfig};
pub use engine::{GameEngine, GameState, Outcome};
pub use player::Player;

// Crate-level exports - Errors and invariants
pub use error::{BoardError, GameError, MoveError, StrategyError};
pub use invariants::{
    AlternatingTurn, EngineInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoard,
};

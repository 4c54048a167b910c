//! Turn state machine for one game session.

use crate::action::Move;
use crate::board::Board;
use crate::config::{FirstPlayer, GameConfig};
use crate::error::{GameError, MoveError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::player::Player;
use crate::position::Position;
use crate::types::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Win(Mark),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player holding this mark.
    AwaitingMove(Mark),
    /// The game is over.
    Finished(Outcome),
}

/// One game: a board, two players and whose turn it is.
///
/// Computer turns are played synchronously as soon as they come up, so
/// outside callers only ever see a human to move or a finished game.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    players: [Player; 2],
    active: usize,
    state: GameState,
    last_move: Option<Position>,
    history: Vec<Move>,
}

impl GameEngine {
    /// Starts a game from plain configuration.
    ///
    /// If the opening player is a computer its moves are made before this
    /// returns.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let players = [
            Player::new(
                Mark::First,
                config.first().display_name("Player 1"),
                *config.first().controller(),
            ),
            Player::new(
                Mark::Second,
                config.second().display_name("Player 2"),
                *config.second().controller(),
            ),
        ];
        Self::with_players(config, players)
    }

    /// Starts a game with prebuilt players, one per mark, in either order.
    ///
    /// Lets callers supply their own strategies (a seeded random player, for
    /// instance). Names and controllers in `config` are ignored.
    ///
    /// # Errors
    ///
    /// `GameError::DuplicateMark` if both players hold the same mark.
    #[instrument(skip_all)]
    pub fn with_players(config: GameConfig, mut players: [Player; 2]) -> Result<Self, GameError> {
        if players[0].mark() == players[1].mark() {
            return Err(GameError::DuplicateMark(players[0].mark()));
        }
        if players[0].mark() == Mark::Second {
            players.swap(0, 1);
        }

        let active = match config.first_player() {
            FirstPlayer::First => 0,
            FirstPlayer::Second => 1,
            FirstPlayer::Random => usize::from(rand::rng().random_bool(0.5)),
        };
        let mark = players[active].mark();

        info!(
            first = %players[0].name(),
            second = %players[1].name(),
            opening = %players[active].name(),
            "Starting game"
        );

        let mut engine = Self {
            config,
            board: Board::new(),
            players,
            active,
            state: GameState::AwaitingMove(mark),
            last_move: None,
            history: Vec::new(),
        };
        engine.advance_computers()?;
        Ok(engine)
    }

    /// Starts a fresh game with the same configuration.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> Result<Self, GameError> {
        Self::new(self.config.clone())
    }

    /// Plays `position` for the player whose turn it is.
    ///
    /// Any computer replies are made before this returns.
    ///
    /// # Errors
    ///
    /// A rejected move (`GameError::InvalidMove`) leaves the game untouched.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, position: Position) -> Result<GameState, GameError> {
        let mark = self.awaiting()?;
        self.play(Move::new(mark, position))
    }

    /// Plays a move, checking that `mov.mark` is the mark to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, mov: Move) -> Result<GameState, GameError> {
        let mark = self.awaiting()?;
        if mov.mark != mark {
            return Err(MoveError::NotYourTurn(mov.mark).into());
        }
        self.commit(mov)?;
        self.advance_computers()?;
        Ok(self.state)
    }

    fn awaiting(&self) -> Result<Mark, MoveError> {
        match self.state {
            GameState::AwaitingMove(mark) => Ok(mark),
            GameState::Finished(_) => Err(MoveError::GameOver),
        }
    }

    /// Applies one move and classifies the resulting board.
    fn commit(&mut self, mov: Move) -> Result<(), MoveError> {
        self.board.apply_move(mov.position, mov.mark)?;
        self.history.push(mov);
        self.last_move = Some(mov.position);
        debug!(mov = %mov, "Move committed");

        self.state = if let Some(winner) = self.board.winner_at(mov.position) {
            GameState::Finished(Outcome::Win(winner))
        } else if self.board.empty_positions().is_empty() {
            GameState::Finished(Outcome::Draw)
        } else {
            self.active = 1 - self.active;
            GameState::AwaitingMove(self.players[self.active].mark())
        };

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "Engine invariants violated after {}",
            mov
        );
        self.board.log_status();

        if let GameState::Finished(outcome) = self.state {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(())
    }

    /// Plays computer turns until a human is to move or the game ends.
    fn advance_computers(&mut self) -> Result<(), GameError> {
        while let GameState::AwaitingMove(mark) = self.state {
            let opening = self.history.is_empty() && *self.config.computer_opens_center();
            let last_move = self.last_move;

            let Some(strategy) = self.players[self.active].strategy_mut() else {
                break;
            };
            let position = if opening {
                Position::CENTER
            } else {
                strategy.choose_move(&self.board, mark, last_move)?
            };

            debug!(%mark, position = %position, opening, "Computer move");
            self.commit(Move::new(mark, position))?;
        }
        Ok(())
    }

    /// Current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The outcome, once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::AwaitingMove(_) => None,
        }
    }

    /// True once the game has ended.
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// The player to move, or `None` once finished.
    pub fn active_player(&self) -> Option<&Player> {
        match self.state {
            GameState::AwaitingMove(_) => Some(&self.players[self.active]),
            GameState::Finished(_) => None,
        }
    }

    /// The mark to preview when hovering `position`: the active player's
    /// mark for an empty square, otherwise `None`.
    pub fn hover_symbol(&self, position: Position) -> Option<Mark> {
        match self.state {
            GameState::AwaitingMove(mark) if self.board.is_empty(position) => Some(mark),
            _ => None,
        }
    }

    /// The winning player's name, if someone won.
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.outcome()?.winner()?;
        Some(self.player(winner).name())
    }

    /// End-of-game message, or `None` while in progress.
    pub fn result_message(&self) -> Option<String> {
        match self.outcome()? {
            Outcome::Win(mark) => Some(format!("{} wins!", self.player(mark).name())),
            Outcome::Draw => Some("It's a Tie!".to_string()),
        }
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::First => &self.players[0],
            Mark::Second => &self.players[1],
        }
    }

    /// Both players, `[First, Second]`.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent move's position.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// The configuration this game was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

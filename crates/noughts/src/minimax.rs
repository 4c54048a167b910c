//! Exhaustive minimax search.
//!
//! The search explores every line of play to the end of the game with no
//! pruning and no depth limit; a 3x3 board keeps the tree small enough.
//!
//! Ties are broken by iteration order: among equally valued moves the first
//! one in row-major order wins. The maximizing side is [`Mark::MAXIMIZER`].

use crate::board::Board;
use crate::error::StrategyError;
use crate::position::Position;
use crate::strategy::Strategy;
use crate::types::Mark;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Game-theoretic value: positive favours the maximizer.
    pub value: i32,
    /// Best move for the side to play, `None` at a finished position.
    pub best_move: Option<Position>,
}

impl Evaluation {
    fn leaf(value: i32) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Perfect-play computer opponent.
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    nodes: u64,
    last_evaluation: Option<Evaluation>,
}

impl MinimaxStrategy {
    /// Creates a new minimax strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Outcome of the most recent search.
    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }

    /// Searches `board` with `to_move` to play.
    ///
    /// A board that is already won evaluates to its score with no move,
    /// whether or not `last_move` is the winning move.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn evaluate(
        &mut self,
        board: &Board,
        to_move: Mark,
        last_move: Option<Position>,
    ) -> Evaluation {
        let mut root = board.clone();
        let won_through_last = last_move.is_some_and(|last| root.winner_at(last).is_some());
        let last_move = if won_through_last {
            last_move
        } else {
            root.record_winner();
            None
        };

        self.nodes = 0;
        let evaluation = self.search(&root, to_move, last_move);
        self.last_evaluation = Some(evaluation);

        debug!(
            nodes = self.nodes,
            value = evaluation.value,
            best_move = ?evaluation.best_move,
            "Minimax search complete"
        );
        evaluation
    }

    fn search(&mut self, board: &Board, to_move: Mark, last_move: Option<Position>) -> Evaluation {
        self.nodes += 1;

        if board.is_terminal() {
            return Evaluation::leaf(terminal_value(board, last_move));
        }

        let maximizing = to_move.is_maximizer();
        let mut best: Option<(i32, Position)> = None;

        for pos in board.empty_positions() {
            let child = match board.child(pos, to_move) {
                Ok(child) => child,
                Err(err) => {
                    warn!(%err, position = %pos, "Skipping unplayable square");
                    continue;
                }
            };
            let value = self.search(&child, to_move.opponent(), Some(pos)).value;

            let improves = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if improves {
                best = Some((value, pos));
            }
        }

        match best {
            Some((value, pos)) => Evaluation {
                value,
                best_move: Some(pos),
            },
            // Full board with no winner
            None => Evaluation::leaf(0),
        }
    }
}

fn terminal_value(board: &Board, last_move: Option<Position>) -> i32 {
    match last_move {
        Some(last) => board.score(last),
        None => match board.winner() {
            Some(mark) if mark.is_maximizer() => crate::board::WIN_SCORE,
            Some(_) => -crate::board::WIN_SCORE,
            None => 0,
        },
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        last_move: Option<Position>,
    ) -> Result<Position, StrategyError> {
        self.evaluate(board, mark, last_move)
            .best_move
            .ok_or(StrategyError::NoMovesAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_won_board_has_no_move() {
        let board = Board::from_rows([["O", "O", "O"], ["X", "X", " "], [" ", " ", " "]]).unwrap();
        let mut minimax = MinimaxStrategy::new();

        let eval = minimax.evaluate(&board, Mark::Second, Some(pos(0, 2)));
        assert_eq!(eval, Evaluation { value: 10, best_move: None });
        assert_eq!(minimax.nodes_searched(), 1);
        assert_eq!(
            minimax.choose_move(&board, Mark::Second, Some(pos(0, 2))),
            Err(StrategyError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_full_board_draw_is_zero() {
        let board = Board::from_rows([["X", "O", "X"], ["O", "X", "O"], ["O", "X", "O"]]).unwrap();
        let eval = MinimaxStrategy::new().evaluate(&board, Mark::First, Some(pos(2, 2)));
        assert_eq!(eval, Evaluation { value: 0, best_move: None });
    }

    #[test]
    fn test_last_square_is_forced() {
        let board = Board::from_rows([["X", "O", "X"], ["O", "X", "O"], ["O", "X", " "]]).unwrap();
        let mut minimax = MinimaxStrategy::new();
        assert_eq!(
            minimax.choose_move(&board, Mark::First, Some(pos(2, 1))),
            Ok(pos(2, 2))
        );
        assert_eq!(minimax.last_evaluation().map(|e| e.value), Some(0));
    }

    #[test]
    fn test_tie_break_prefers_first_in_row_major_order() {
        // X has two immediate wins, (0, 2) and (2, 0); both score -10.
        let board = Board::from_rows([["X", "X", " "], ["X", "O", "O"], [" ", "O", " "]]).unwrap();
        let mut minimax = MinimaxStrategy::new();
        assert_eq!(minimax.choose_move(&board, Mark::Second, None), Ok(pos(0, 2)));
    }
}

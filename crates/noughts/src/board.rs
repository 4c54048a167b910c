//! The 3x3 board, win detection and terminal scoring.

use crate::cell::Cell;
use crate::error::{BoardError, MoveError};
use crate::position::Position;
use crate::types::{Mark, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// Side length of the board.
pub const DIMENSION: usize = 3;

/// Score of a position won by the maximizing mark.
pub const WIN_SCORE: i32 = 10;

/// All eight winning lines, as row-major indices.
const LINES: [[usize; DIMENSION]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 tic-tac-toe board.
///
/// `Clone` produces a fully independent copy; search code clones a board
/// before trying a move on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; DIMENSION]; DIMENSION],
    /// Set once a winning line has been found.
    terminal: bool,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::new(Position::ALL[row * DIMENSION + col]))
        });
        Self {
            cells,
            terminal: false,
        }
    }

    /// Builds a board from symbol literals (`"O"`, `"X"` or `" "`), one
    /// array per row.
    ///
    /// If the literal already contains a winning line the board is marked
    /// terminal.
    #[instrument]
    pub fn from_rows(rows: [[&str; DIMENSION]; DIMENSION]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (row, literals) in rows.iter().enumerate() {
            for (col, literal) in literals.iter().enumerate() {
                let symbol = Symbol::from_literal(literal).ok_or_else(|| {
                    BoardError::new(format!(
                        "Unknown symbol {:?} at row {}, col {}",
                        literal, row, col
                    ))
                })?;
                board.cells[row][col] = Cell::with_symbol(board.cells[row][col].position(), symbol);
            }
        }
        board.terminal = board.winner().is_some();
        Ok(board)
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row()][pos.col()]
    }

    /// Returns the symbol at `pos`.
    pub fn symbol_at(&self, pos: Position) -> Symbol {
        self.cell(pos).symbol()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    /// True once a winning line has been recorded.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// `MoveError::Occupied` if the square is taken, `MoveError::BoardTerminal`
    /// if a win has already been recorded.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if self.terminal {
            return Err(MoveError::BoardTerminal);
        }
        self.cells[pos.row()][pos.col()].mark(mark)
    }

    /// Determines whether the move at `last_move` won the game.
    ///
    /// Only the lines through `last_move` are inspected: its row and column,
    /// plus each diagonal it lies on. A win marks the board terminal.
    pub fn winner_at(&mut self, last_move: Position) -> Option<Mark> {
        let winner = self.winner_through(last_move);
        if winner.is_some() {
            self.terminal = true;
        }
        winner
    }

    /// True when no win has been recorded and every square is filled.
    pub fn is_draw(&self) -> bool {
        !self.terminal && self.is_full()
    }

    /// Scores a finished position from the maximizer's point of view.
    ///
    /// Returns [`WIN_SCORE`] if [`Mark::MAXIMIZER`] won through `last_move`,
    /// its negation if the other mark did, and `0` for a full board without a
    /// winner.
    ///
    /// # Panics
    ///
    /// Panics if the position is still in play: there is no score for an
    /// unfinished game.
    pub fn score(&self, last_move: Position) -> i32 {
        match self.winner_through(last_move) {
            Some(mark) if mark.is_maximizer() => WIN_SCORE,
            Some(_) => -WIN_SCORE,
            None => {
                assert!(
                    self.is_full(),
                    "score requested for an unfinished board (last move {})",
                    last_move
                );
                0
            }
        }
    }

    /// Scans all eight lines for a winner.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|i| self.symbol_at(Position::ALL[i]));
            match a {
                Symbol::Marked(mark) if a == b && a == c => Some(mark),
                _ => None,
            }
        })
    }

    fn winner_through(&self, last_move: Position) -> Option<Mark> {
        let mark = self.symbol_at(last_move).mark()?;
        let (row, col) = (last_move.row(), last_move.col());

        let owns = |r: usize, c: usize| self.cells[r][c].symbol() == Symbol::Marked(mark);

        let won = (0..DIMENSION).all(|i| owns(row, i))
            || (0..DIMENSION).all(|i| owns(i, col))
            || (last_move.on_main_diagonal() && (0..DIMENSION).all(|i| owns(i, i)))
            || (last_move.on_anti_diagonal()
                && (0..DIMENSION).all(|i| owns(i, DIMENSION - 1 - i)));

        won.then_some(mark)
    }

    /// Clones the board and plays `mark` at `pos` on the copy, recording a
    /// win if the move makes one.
    pub(crate) fn child(&self, pos: Position, mark: Mark) -> Result<Board, MoveError> {
        let mut child = self.clone();
        child.apply_move(pos, mark)?;
        child.winner_at(pos);
        Ok(child)
    }

    /// Scans every line and marks the board terminal if one is complete.
    ///
    /// Needed when the board was built move by move without `winner_at`.
    pub(crate) fn record_winner(&mut self) -> Option<Mark> {
        let winner = self.winner();
        if winner.is_some() {
            self.terminal = true;
        }
        winner
    }

    /// Logs the board at debug level.
    pub(crate) fn log_status(&self) {
        debug!(board = %self, terminal = self.terminal, "Board status");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Empty squares show their keypad number (1-9).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell.symbol() {
                    Symbol::Empty => write!(f, "{}", cell.position().index() + 1)?,
                    Symbol::Marked(mark) => write!(f, "{}", mark)?,
                }
                if col < DIMENSION - 1 {
                    write!(f, "|")?;
                }
            }
            if row < DIMENSION - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

//! A single square of the board.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Mark, Symbol};
use serde::Serialize;

/// One grid position and what occupies it.
///
/// A cell is written at most once: from `Empty` to a mark, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    symbol: Symbol,
    position: Position,
}

impl Cell {
    /// Creates an empty cell at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            symbol: Symbol::Empty,
            position,
        }
    }

    pub(crate) fn with_symbol(position: Position, symbol: Symbol) -> Self {
        Self { symbol, position }
    }

    /// Current occupant.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Where this cell sits on the board.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Checks if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }

    /// Writes a mark into an empty cell.
    pub fn mark(&mut self, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty() {
            return Err(MoveError::Occupied(self.position));
        }
        self.symbol = Symbol::Marked(mark);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_once() {
        let mut cell = Cell::new(Position::CENTER);
        assert!(cell.is_empty());

        cell.mark(Mark::First).unwrap();
        assert_eq!(cell.symbol(), Symbol::Marked(Mark::First));

        assert_eq!(
            cell.mark(Mark::Second),
            Err(MoveError::Occupied(Position::CENTER))
        );
        assert_eq!(cell.symbol(), Symbol::Marked(Mark::First));
    }
}

//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
///
/// `First` is drawn as `O` and `Second` as `X`. In minimax search `First`
/// is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player one's mark (`O`).
    First,
    /// Player two's mark (`X`).
    Second,
}

impl Mark {
    /// The mark that minimax tries to maximize.
    pub const MAXIMIZER: Mark = Mark::First;

    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Returns true if this mark maximizes the board score.
    pub fn is_maximizer(self) -> bool {
        self == Self::MAXIMIZER
    }

    /// The character used to draw this mark.
    pub fn glyph(self) -> char {
        match self {
            Mark::First => 'O',
            Mark::Second => 'X',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Symbol {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a player's mark.
    Marked(Mark),
}

impl Symbol {
    /// Checks if the symbol is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Symbol::Empty)
    }

    /// Returns the mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Symbol::Empty => None,
            Symbol::Marked(mark) => Some(mark),
        }
    }

    /// Parses a board literal: `"O"`, `"X"`, or blank for empty.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal.trim() {
            "" => Some(Symbol::Empty),
            "O" | "o" => Some(Symbol::Marked(Mark::First)),
            "X" | "x" => Some(Symbol::Marked(Mark::Second)),
            _ => None,
        }
    }
}

impl From<Mark> for Symbol {
    fn from(mark: Mark) -> Self {
        Symbol::Marked(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Mark::First.opponent(), Mark::Second);
        assert_eq!(Mark::Second.opponent(), Mark::First);
    }

    #[test]
    fn test_first_is_maximizer() {
        assert!(Mark::First.is_maximizer());
        assert!(!Mark::Second.is_maximizer());
    }

    #[test]
    fn test_symbol_literals() {
        assert_eq!(Symbol::from_literal(" "), Some(Symbol::Empty));
        assert_eq!(Symbol::from_literal("O"), Some(Symbol::Marked(Mark::First)));
        assert_eq!(Symbol::from_literal("X"), Some(Symbol::Marked(Mark::Second)));
        assert_eq!(Symbol::from_literal("Z"), None);
    }
}

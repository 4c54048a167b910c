//! Board coordinates.

use crate::board::DIMENSION;
use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate on the 3x3 board.
///
/// Both `row` and `col` are always in `0..3`; the only way to build a
/// `Position` from raw numbers is [`Position::new`], which checks bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// The center square.
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// Creates a position, rejecting coordinates off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= DIMENSION || col >= DIMENSION {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts position to row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * DIMENSION + self.col
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True if the position lies on the main diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True if the position lies on the anti-diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == DIMENSION - 1
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }

    /// Parses user input.
    ///
    /// Accepts a keypad number `1`-`9` (row-major), a `row,col` pair, or a
    /// label such as `center` or `top-left` (case-insensitive). Returns
    /// `Ok(None)` for unrecognized input and an error only for a `row,col`
    /// pair off the board.
    #[instrument]
    pub fn parse(input: &str) -> Result<Option<Self>, MoveError> {
        let input = input.trim();

        if let Some((row, col)) = input.split_once(',') {
            return match (row.trim().parse::<usize>(), col.trim().parse::<usize>()) {
                (Ok(row), Ok(col)) => Self::new(row, col).map(Some),
                _ => Ok(None),
            };
        }

        if let Ok(num) = input.parse::<usize>() {
            return Ok(num.checked_sub(1).and_then(Self::from_index));
        }

        let lower = input.to_lowercase();
        Ok(Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.label().to_lowercase() == lower))
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

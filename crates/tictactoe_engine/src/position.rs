//! Board positions addressed in row-major order.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position on the board (index 0-8, row-major).
///
/// Rows are {0,1,2}, {3,4,5}, {6,7,8}. Players type the one-based
/// number (1-9) shown on the reference panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

/// Raw index that does not address a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell index {index} is outside 0-8")]
pub struct PositionError {
    /// The rejected index.
    pub index: usize,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from the one-based number a player types (1-9).
    #[instrument]
    pub fn from_cell_number(number: i64) -> Option<Self> {
        if (1..=9).contains(&number) {
            Self::from_index((number - 1) as usize)
        } else {
            None
        }
    }

    /// One-based number shown on the reference panel.
    pub fn cell_number(self) -> usize {
        self.to_index() + 1
    }

    /// Label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(PositionError { index })
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.cell_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_board() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
        }
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Position::try_from(8), Ok(Position::BottomRight));
        assert_eq!(Position::try_from(9), Err(PositionError { index: 9 }));
        assert!(Position::try_from(42).unwrap_err().to_string().contains("42"));
    }

    #[test]
    fn test_cell_number_is_one_based() {
        assert_eq!(Position::from_cell_number(1), Some(Position::TopLeft));
        assert_eq!(Position::from_cell_number(9), Some(Position::BottomRight));
        assert_eq!(Position::from_cell_number(0), None);
        assert_eq!(Position::from_cell_number(10), None);
        assert_eq!(Position::from_cell_number(-3), None);
        assert_eq!(Position::Center.cell_number(), 5);
    }
}

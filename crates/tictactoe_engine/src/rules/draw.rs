//! Full-board detection for tic-tac-toe.

use crate::Cell;

/// Checks if every cell holds a symbol.
///
/// A full board with no winner is a draw.
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

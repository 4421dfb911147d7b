//! Win detection logic for tic-tac-toe.

use crate::{Cell, Position, Symbol};

/// The 8 triples that win when uniformly occupied.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `symbol` holds every cell of some line.
pub fn check_win(cells: &[Cell; 9], symbol: Symbol) -> bool {
    let mark = Cell::Occupied(symbol);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| cells[pos.to_index()] == mark))
}

/// Returns the symbol holding a complete line, if any.
pub fn winner(cells: &[Cell; 9]) -> Option<Symbol> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|&symbol| check_win(cells, symbol))
}

//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Always moves first.
    X,
    /// Moves second.
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No symbol placed.
    #[default]
    Empty,
    /// Cell holds a symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns true if no symbol has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

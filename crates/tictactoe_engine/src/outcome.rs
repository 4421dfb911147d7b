//! Terminal result of a game.

use crate::Symbol;
use serde::{Deserialize, Serialize};

/// How a finished game ended. Never changes once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The symbol completed a line.
    WinBy(Symbol),
    /// The board filled with no line completed.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameOutcome::WinBy(symbol) => Some(*symbol),
            GameOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::WinBy(symbol) => write!(f, "{} wins", symbol),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

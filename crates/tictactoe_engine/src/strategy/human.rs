//! Human player answering at the console.

use super::{MoveStrategy, PlayerKind, StrategyError};
use crate::console::Console;
use crate::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// Shown when a move number falls outside 1-9.
pub const OUT_OF_RANGE: &str = "Invalid input! Please enter a number between 1-9.";

/// Human player typing cell numbers 1-9.
///
/// Only the range is checked here. An occupied cell is returned as typed
/// and rejected by the board.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveStrategy for HumanPlayer {
    #[instrument(skip(self, _board, console), fields(player = %self.name))]
    fn get_move(
        &mut self,
        _board: &mut Board,
        symbol: Symbol,
        console: &mut dyn Console,
    ) -> Result<Position, StrategyError> {
        let prompt = format!("{} ({}), enter your move (1-9): ", self.name, symbol);
        loop {
            let number = console.request_integer(&prompt)?;
            if let Some(position) = Position::from_cell_number(number) {
                debug!(position = position.to_index(), "Human chose position");
                return Ok(position);
            }
            debug!(number, "Move number out of range");
            console.say(OUT_OF_RANGE)?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

//! Shallow rule-based opponent.
//!
//! Rules are tried in order and each scans the board from index 0:
//! win now, block the opponent's win, take the center, take a corner,
//! take anything left. No lookahead beyond one move and no randomness.

use super::{MoveStrategy, PlayerKind, StrategyError};
use crate::console::Console;
use crate::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// Corner preference. The order is the tie-break and is not ascending.
pub const CORNER_ORDER: [Position; 4] = [
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopLeft,
];

/// Picks a move for `symbol`, or `None` when the board is full.
///
/// Probes are made through [`Board::speculate`], so the board is left
/// exactly as it was and no observer is notified.
#[instrument(skip(board))]
pub fn choose_move(board: &mut Board, symbol: Symbol) -> Option<Position> {
    if let Some(pos) = completing_move(board, symbol) {
        debug!(position = pos.to_index(), "Taking winning move");
        return Some(pos);
    }

    if let Some(pos) = completing_move(board, symbol.opponent()) {
        debug!(position = pos.to_index(), "Blocking opponent");
        return Some(pos);
    }

    if board.is_cell_empty(Position::Center) {
        return Some(Position::Center);
    }

    CORNER_ORDER
        .into_iter()
        .find(|&pos| board.is_cell_empty(pos))
        .or_else(|| board.empty_positions().next())
}

/// First empty position that would complete a line for `symbol`.
fn completing_move(board: &mut Board, symbol: Symbol) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| {
        board.is_cell_empty(pos) && board.speculate(pos, symbol).check_win(symbol)
    })
}

/// Computer player driven by [`choose_move`].
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    name: String,
}

impl HeuristicAi {
    /// Default display name.
    pub const DEFAULT_NAME: &'static str = "Computer";

    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl MoveStrategy for HeuristicAi {
    #[instrument(skip(self, board, _console), fields(ai = %self.name))]
    fn get_move(
        &mut self,
        board: &mut Board,
        symbol: Symbol,
        _console: &mut dyn Console,
    ) -> Result<Position, StrategyError> {
        choose_move(board, symbol).ok_or(StrategyError::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }
}

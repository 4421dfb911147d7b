//! Move strategies: who decides the next cell for a symbol.

mod factory;
mod heuristic;
mod human;

pub use factory::{FactoryError, PlayerFactory, PlayerKind};
pub use heuristic::{CORNER_ORDER, HeuristicAi, choose_move};
pub use human::{HumanPlayer, OUT_OF_RANGE};

use crate::console::{Console, ConsoleError};
use crate::{Board, Position, Symbol};

/// Anything that can pick a cell for the symbol it plays.
pub trait MoveStrategy {
    /// Chooses the next position for `symbol`.
    ///
    /// The board is lent mutably so strategies can probe speculative moves;
    /// it must come back unchanged. Occupancy of the returned position is
    /// not guaranteed: the caller validates it through [`Board::make_move`].
    fn get_move(
        &mut self,
        board: &mut Board,
        symbol: Symbol,
        console: &mut dyn Console,
    ) -> Result<Position, StrategyError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns which kind of player this is.
    fn kind(&self) -> PlayerKind;
}

/// Error raised while choosing a move.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StrategyError {
    /// No empty cell remains.
    #[display("No legal move available")]
    NoLegalMove,
    /// Input could not be obtained.
    #[display("{}", _0)]
    Console(ConsoleError),
}

impl From<ConsoleError> for StrategyError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

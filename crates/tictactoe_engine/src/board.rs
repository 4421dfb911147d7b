//! The 3x3 board, its single legal mutation path and speculative probes.

use crate::rules;
use crate::{Cell, Position, Symbol};
use std::ops::Deref;
use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// Receives the board after every committed move.
///
/// The board only knows this signature, never a concrete renderer.
pub trait BoardObserver {
    /// Called synchronously with the post-move board.
    fn update(&self, board: &Board);
}

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a symbol.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// 3x3 tic-tac-toe board.
///
/// Cells change only through [`Board::make_move`], [`Board::undo_move`] and
/// the guard returned by [`Board::speculate`].
#[derive(Clone, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Shared display handle, at most one.
    observer: Option<Rc<dyn BoardObserver>>,
}

impl Board {
    /// Creates a new empty board with no observer.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the observer, silently replacing any previous one.
    #[instrument(skip_all)]
    pub fn set_observer(&mut self, observer: Rc<dyn BoardObserver>) {
        debug!(replacing = self.observer.is_some(), "Attaching board observer");
        self.observer = Some(observer);
    }

    /// Pushes the current board to the observer without moving.
    pub fn render(&self) {
        if let Some(observer) = &self.observer {
            observer.update(self);
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if a cell holds no symbol.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Positions that hold no symbol, ascending.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_cell_empty(pos))
    }

    /// Places `symbol` at `pos` if the cell is empty.
    ///
    /// With `notify` set the observer sees the post-move board exactly once
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] and leaves the board untouched
    /// if the cell already holds a symbol.
    #[instrument(skip(self), fields(position = pos.to_index()))]
    pub fn make_move(
        &mut self,
        pos: Position,
        symbol: Symbol,
        notify: bool,
    ) -> Result<(), MoveError> {
        if !self.is_cell_empty(pos) {
            debug!("Rejected move onto occupied cell");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.cells[pos.to_index()] = Cell::Occupied(symbol);

        if notify {
            self.render();
        }
        Ok(())
    }

    /// Resets the cell to empty regardless of its content. Never notifies.
    pub fn undo_move(&mut self, pos: Position) {
        trace!(position = pos.to_index(), "Undoing move");
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Temporarily places `symbol` at `pos` for evaluation.
    ///
    /// The returned guard derefs to the board. Dropping it restores the
    /// previous content of that one cell. The observer is never called.
    pub fn speculate(&mut self, pos: Position, symbol: Symbol) -> SpeculativeMove<'_> {
        let index = pos.to_index();
        let previous = self.cells[index];
        self.cells[index] = Cell::Occupied(symbol);
        SpeculativeMove {
            board: self,
            index,
            previous,
        }
    }

    /// Returns true if `symbol` holds a complete line.
    pub fn check_win(&self, symbol: Symbol) -> bool {
        rules::check_win(&self.cells, symbol)
    }

    /// Returns the symbol holding a complete line, if any.
    pub fn winner(&self) -> Option<Symbol> {
        rules::winner(&self.cells)
    }

    /// Returns true if every cell holds a symbol.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("cells", &self.cells)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// A cell temporarily set by [`Board::speculate`].
pub struct SpeculativeMove<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Cell,
}

impl Deref for SpeculativeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = self.previous;
    }
}

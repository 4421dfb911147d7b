//! Two-panel board view: cell numbers on the left, marks on the right.

use std::cell::RefCell;
use std::io::{Stdout, Write};
use tictactoe_engine::{Board, BoardObserver, Cell, Symbol};
use tracing::warn;

const TOP: &str = "╔════════════════════════╦════════════════════════╗";
const TITLE: &str = "║   REFERENCE BOARD      ║     GAME BOARD         ║";
const SUBTITLE: &str = "║  (Cell Numbers 1-9)    ║  (Your Moves: X, O)    ║";
const DIVIDER: &str = "╠════════════════════════╬════════════════════════╣";
const ROW_RULE: &str = "║      ---+---+---       ║      ---+---+---       ║";
const BOTTOM: &str = "╚════════════════════════╩════════════════════════╝";

fn mark(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(Symbol::X) => 'X',
        Cell::Occupied(Symbol::O) => 'O',
    }
}

/// Renders the reference and game panels side by side.
pub fn render_board(board: &Board) -> String {
    let cells = board.cells();
    let mut lines = vec![String::new(), TOP.into(), TITLE.into(), SUBTITLE.into(), DIVIDER.into()];
    for row in 0..3 {
        let first = row * 3;
        lines.push(format!(
            "║       {} | {} | {}        ║       {} | {} | {}        ║",
            first + 1,
            first + 2,
            first + 3,
            mark(cells[first]),
            mark(cells[first + 1]),
            mark(cells[first + 2]),
        ));
        if row < 2 {
            lines.push(ROW_RULE.into());
        }
    }
    lines.push(BOTTOM.into());
    lines.push(String::new());
    lines.join("\n")
}

/// Prints the board after each committed move.
pub struct ConsoleDisplay<W: Write> {
    out: RefCell<W>,
}

impl ConsoleDisplay<Stdout> {
    /// Display on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleDisplay<W> {
    /// Display writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Releases the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> BoardObserver for ConsoleDisplay<W> {
    fn update(&self, board: &Board) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{}", render_board(board)).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to render board");
        }
    }
}

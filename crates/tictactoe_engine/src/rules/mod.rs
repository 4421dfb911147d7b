//! Game rules for tic-tac-toe.
//!
//! Pure functions over a cell grid. The board delegates to these so the
//! rules can be checked without an observer or a session.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_win, winner};

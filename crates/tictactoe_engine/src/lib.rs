//! Tic-tac-toe engine: board, rules, players and turn orchestration.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid, the only place moves are applied
//! - **Rules**: pure win and full-board checks
//! - **Strategies**: human console input or the rule-based computer
//! - **Session**: phase types that take a game from mode selection to
//!   its outcome, talking to the outside world through [`Console`] and
//!   [`BoardObserver`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{
//!     GameMode, GameOutcome, ScriptedConsole, SessionSettings, SessionSetup, Symbol,
//! };
//!
//! // The "3" lands on a cell the computer took, so X is asked again.
//! let console = ScriptedConsole::new(["Ada", "1", "2", "3", "7", "9"]);
//! let settings = SessionSettings::new().with_mode(GameMode::VsAi);
//! let finished = SessionSetup::new(console, settings).run()?;
//! assert_eq!(finished.outcome(), GameOutcome::WinBy(Symbol::O));
//! assert_eq!(finished.winner_name(), Some("Computer"));
//! # Ok::<(), tictactoe_engine::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod console;
mod outcome;
mod position;
pub mod rules;
mod session;
mod strategy;
mod types;

// Crate-level exports - Domain types
pub use outcome::GameOutcome;
pub use position::{Position, PositionError};
pub use types::{Cell, Symbol};

// Crate-level exports - Board
pub use board::{Board, BoardObserver, MoveError, SpeculativeMove};

// Crate-level exports - Console capability
pub use console::{Console, ConsoleError, NOT_A_NUMBER, ScriptedConsole};

// Crate-level exports - Strategies
pub use strategy::{
    CORNER_ORDER, FactoryError, HeuristicAi, HumanPlayer, MoveStrategy, OUT_OF_RANGE,
    PlayerFactory, PlayerKind, StrategyError, choose_move,
};

// Crate-level exports - Session phases
pub use session::{
    FinishedSession, GameMode, GameSession, INVALID_CHOICE, NameCollection, OCCUPIED_CELL,
    SessionError, SessionErrorKind, SessionPhase, SessionSettings, SessionSetup, TURN_SEPARATOR,
    TurnOutcome,
};

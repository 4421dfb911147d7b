//! Console front end for the tic-tac-toe engine.
//!
//! Supplies the engine's outside-world capabilities for a terminal:
//! line input and messages ([`TextConsole`]), the two-panel board view
//! ([`ConsoleDisplay`]), plus command-line and TOML configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod display;
mod text_console;

pub use cli::{Cli, ModeArg};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use display::{ConsoleDisplay, render_board};
pub use text_console::TextConsole;

//! Command-line interface for the console game.

use clap::{Parser, ValueEnum};
use tictactoe_engine::{GameMode, SessionSettings};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file [default: tictactoe.toml, if present]
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Skip the mode menu and play this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Display name of the computer player
    #[arg(long)]
    pub ai_name: Option<String>,

    /// Do not print the how-to-play block
    #[arg(long)]
    pub quiet_intro: bool,
}

/// Game mode as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Player 2 is the computer
    Ai,
    /// Player 2 is another human
    Human,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Ai => GameMode::VsAi,
            ModeArg::Human => GameMode::VsHuman,
        }
    }
}

impl Cli {
    /// Layers command-line overrides on top of configured settings.
    pub fn apply(&self, mut settings: SessionSettings) -> SessionSettings {
        if let Some(mode) = self.mode {
            settings = settings.with_mode(mode.into());
        }
        if let Some(name) = &self.ai_name {
            settings = settings.with_ai_name(name.clone());
        }
        if self.quiet_intro {
            settings = settings.with_instructions(false);
        }
        settings
    }
}

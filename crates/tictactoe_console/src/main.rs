//! Console tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::rc::Rc;
use tictactoe_console::{AppConfig, Cli, ConsoleDisplay, DEFAULT_CONFIG_PATH, TextConsole};
use tictactoe_engine::SessionSetup;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, from_file) = AppConfig::load(cli.config.as_deref())?;
    initialize_tracing(config.log_filter());
    if from_file {
        info!(path = ?cli.config, "Configuration loaded");
    } else {
        debug!(path = DEFAULT_CONFIG_PATH, "Config file not found, using defaults");
    }

    let settings = cli.apply(config.session().clone());
    let console = TextConsole::new(io::stdin().lock(), io::stdout());
    let display = Rc::new(ConsoleDisplay::stdout());

    let finished = SessionSetup::new(console, settings)
        .with_observer(display)
        .run()?;

    info!(outcome = %finished.outcome(), moves = finished.history().len(), "Session ended");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

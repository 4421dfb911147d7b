//! Construction of move strategies from a requested kind.

use super::{HeuristicAi, HumanPlayer, MoveStrategy};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Kind of player a strategy implements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Moves chosen by the heuristic.
    Ai,
}

/// Requested player kind is neither "human" nor "ai".
#[derive(Debug, Clone, Display, Error)]
#[display("Unknown player type '{}' at {}:{}", requested, file, line)]
pub struct FactoryError {
    /// The kind that was asked for.
    pub requested: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FactoryError {
    /// Creates a new factory error with caller location tracking.
    #[track_caller]
    pub fn new(requested: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            requested: requested.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Builds players for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerFactory;

impl PlayerFactory {
    /// Creates a player from a kind name ("human" or "ai", any case).
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] for any other kind.
    pub fn create_player(kind: &str, name: &str) -> Result<Box<dyn MoveStrategy>, FactoryError> {
        let parsed = kind.parse::<PlayerKind>().map_err(|_| FactoryError::new(kind))?;
        Ok(Self::create(parsed, name))
    }

    /// Creates a player of a known kind.
    #[instrument]
    pub fn create(kind: PlayerKind, name: &str) -> Box<dyn MoveStrategy> {
        info!("Creating player");
        match kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(name)),
            PlayerKind::Ai => Box::new(HeuristicAi::new(name)),
        }
    }
}

//! The text input/output capability the session and human players talk to.

use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Shown when a line that should be a number is not one.
pub const NOT_A_NUMBER: &str = "Invalid input! Please enter a whole number.";

/// Error raised by a console.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConsoleError {
    /// The input stream ended while an answer was expected.
    #[display("Input stream closed while waiting for an answer")]
    InputClosed,
    /// Reading or writing failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Line-oriented prompt and message channel.
///
/// Implementors supply raw line reading and message output; integer
/// requests are built on top of them.
pub trait Console {
    /// Shows `prompt` and blocks until a full line is available.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::InputClosed`] when no further input will arrive.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Emits a message line.
    fn say(&mut self, message: &str) -> Result<(), ConsoleError>;

    /// Requests a line of text, trimmed.
    fn request_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Requests an integer, asking again until the line parses.
    fn request_integer(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(input = %line.trim(), "Rejected non-numeric input");
                    self.say(NOT_A_NUMBER)?;
                }
            }
        }
    }
}

/// Console answering from a fixed queue of lines.
///
/// Records every prompt and message so a whole game can be replayed and
/// inspected without a terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that answers with `answers` in order.
    #[instrument(skip_all)]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and message emitted so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn say(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}

//! Console over any buffered reader and writer.

use std::io::{BufRead, Write};
use tictactoe_engine::{Console, ConsoleError};
use tracing::{instrument, trace};

/// Line-oriented console reading answers from `R` and printing to `W`.
///
/// In the binary this wraps locked stdin and stdout; tests feed it
/// in-memory buffers.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Creates a console over `input` and `output`.
    #[instrument(skip_all)]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Releases the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        trace!(bytes = line.len(), "Read input line");

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

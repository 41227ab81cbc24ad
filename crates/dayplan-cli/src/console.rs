//! Line-oriented console I/O with recovery
//!
//! Every read consumes exactly one line, so a malformed entry never
//! desynchronizes the stream: the bad line is gone, the caller reports and
//! re-prompts. End of input surfaces as [`ConsoleError::Closed`] so menu
//! loops can wind down instead of spinning.

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Prompting and parsing over any line-buffered reader/writer pair.
///
/// Generic so tests drive the menus with a scripted `Cursor` instead of a
/// terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print a blank line
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// ANSI clear; the app decides whether to call this
    pub fn clear_screen(&mut self) -> Result<()> {
        write!(self.output, "\x1b[2J\x1b[1;1H")?;
        self.output.flush()?;
        Ok(())
    }

    /// Block until the user presses Enter
    pub fn pause(&mut self) -> Result<()> {
        let _ = self.read_line("\nPress Enter to continue...")?;
        Ok(())
    }

    /// Read a free-form line (event names); trimmed, may be empty
    pub fn read_name(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    /// Read an integer menu selection.
    ///
    /// `Ok(None)` means the line did not parse; the message has already
    /// been shown and the caller re-offers its menu.
    pub fn read_selection(&mut self, prompt: &str) -> Result<Option<i64>> {
        let line = self.read_line(prompt)?;
        match line.parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                trace!(input = %line, "Unparsable menu selection");
                self.say("Invalid input! Enter a number.")?;
                Ok(None)
            }
        }
    }

    /// Read an (hours, minutes, seconds) triple from one line.
    ///
    /// Range-checks on the caller side, as the value type accepts
    /// anything: all components non-negative, minutes and seconds in
    /// [0, 60). Hours are uncapped.
    pub fn read_triple(&mut self, prompt: &str) -> Result<Option<(i64, i64, i64)>> {
        let line = self.read_line(prompt)?;
        let parts: Option<Vec<i64>> = line
            .split_whitespace()
            .map(|p| p.parse().ok())
            .collect();

        if let Some([h, m, s]) = parts.as_deref()
            && *h >= 0
            && (0..60).contains(m)
            && (0..60).contains(s)
        {
            return Ok(Some((*h, *m, *s)));
        }

        trace!(input = %line, "Invalid time triple");
        self.say("Invalid time! Expected: hours minutes seconds (minutes and seconds 0-59).")?;
        Ok(None)
    }

    /// Read a floating-point scalar
    pub fn read_scalar(&mut self, prompt: &str) -> Result<Option<f64>> {
        let line = self.read_line(prompt)?;
        match line.parse::<f64>() {
            Ok(s) => Ok(Some(s)),
            Err(_) => {
                trace!(input = %line, "Unparsable scalar");
                self.say("Invalid input! Enter a number.")?;
                Ok(None)
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

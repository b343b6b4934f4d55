//! Line-oriented terminal prompting: the validated-input core.
//!
//! - [`Console`] wraps any `BufRead` + `Write` pair, so sessions run against
//!   the real terminal or against a scripted byte buffer in tests
//! - [`Console::read_number`] reads a typed scalar, clamping to optional bounds
//! - [`Console::select`] picks a value from a [`Menu`] by 1-based index
//!
//! Validation failures never leave this module: bad input is answered with a
//! diagnostic and a re-prompt. Only I/O failures and end of input surface as
//! [`PromptError`].

pub mod menu;
pub mod number;

pub use menu::{Menu, MenuDefault, MenuError, MenuOption};
pub use number::{Bounds, NumberKind};

use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use thiserror::Error;

/// Printed whenever a numeric or menu entry does not parse.
pub const INVALID_NUMBER: &str = "Error! Please enter a valid number.";

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The input stream ended while a prompt was still waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
}

/// A prompt/answer channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process' standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Access the output sink (tests inspect the transcript through this).
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print one line.
    pub fn say(&mut self, message: impl fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read the answer.
    ///
    /// The line terminator is stripped; everything else is returned verbatim.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when a script runs dry mid-prompt.
            writeln!(self.output)?;
            return Err(PromptError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Free-text answer (labels, yes/no questions).
    pub fn read_text(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)
    }

    /// `true` only when the answer is `yes` (case-insensitive, surrounding blanks ignored).
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }
}

//! Terminal screen session: the typed command line and its last result.
//!
//! The session only stores text. Running the command is the job of a
//! [`CommandRunner`](crate::shell::CommandRunner); the result is recorded here
//! so drawing the Terminal screen never starts a process.

use crate::config::TERMINAL_OUTPUT_LIMIT;
use crate::shell::CommandOutcome;

/// Text shown while there is nothing to report.
pub const PLACEHOLDER: &str = "Enter command";

/// Shown when a command succeeds without printing anything.
pub const NO_OUTPUT: &str = "(no output)";

/// Command line being typed plus the outcome of the last run.
#[derive(Debug, Default)]
pub struct TerminalSession {
    buffer: String,
    last_result: Option<CommandOutcome>,
}

impl TerminalSession {
    /// Create an empty session.
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            last_result: None,
        }
    }

    /// The command line as typed.
    #[inline]
    pub fn buffer(&self) -> &str { &self.buffer }

    /// Result of the last executed command, if any.
    #[inline]
    pub const fn last_result(&self) -> Option<&CommandOutcome> { self.last_result.as_ref() }

    /// Append one character to the command line.
    pub fn push(
        &mut self,
        c: char,
    ) {
        self.buffer.push(c);
    }

    /// Strip surrounding whitespace from the command line.
    ///
    /// Returns the trimmed line when there is something to run.
    pub fn commit(&mut self) -> Option<String> {
        let trimmed = self.buffer.trim();
        if trimmed.len() != self.buffer.len() {
            self.buffer = trimmed.to_owned();
        }
        if self.buffer.is_empty() {
            self.last_result = None;
            None
        } else {
            Some(self.buffer.clone())
        }
    }

    /// Store the outcome of running the committed line.
    pub fn record(
        &mut self,
        outcome: CommandOutcome,
    ) {
        self.last_result = Some(outcome);
    }

    /// Forget the command line and its result.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_result = None;
    }

    /// Text for the output area, at most [`TERMINAL_OUTPUT_LIMIT`] characters.
    pub fn output_text(&self) -> String {
        let text = match &self.last_result {
            None => return PLACEHOLDER.to_owned(),
            Some(Ok(output)) if output.trim().is_empty() => NO_OUTPUT.to_owned(),
            Some(Ok(output)) => output.clone(),
            Some(Err(err)) => err.to_string(),
        };
        truncate_chars(&text, TERMINAL_OUTPUT_LIMIT).to_owned()
    }
}

/// Cut `text` after `max` characters without splitting a UTF-8 sequence.
pub fn truncate_chars(
    text: &str,
    max: usize,
) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

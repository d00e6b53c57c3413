//! Command execution for the Terminal screen.
//!
//! A command line is split on whitespace (no shell, no globbing, no pipes):
//! the first word is the program, the rest are its arguments. stdout and
//! stderr share one pipe so the captured text keeps the order the child wrote
//! it in. Every failure is returned as a [`CommandError`] value that the
//! Terminal screen prints; nothing here can take the launcher down.
//!
//! Execution is synchronous: the main loop stops polling input while a command
//! runs, for at most the configured timeout.

use std::fmt;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

/// How often the child is polled for exit.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Grace period for the output reader after the child exited.
const OUTPUT_DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Maximum number of output bytes kept from one command.
const MAX_CAPTURE_BYTES: u64 = 64 * 1024;

/// Result of one command: its combined output or why it failed.
pub type CommandOutcome = Result<String, CommandError>;

/// Why a command produced no usable output.
#[derive(Debug)]
pub enum CommandError {
    /// The line contained no program name.
    Empty,
    /// The program does not exist on `PATH`.
    NotFound(String),
    /// The program exists but could not be started.
    Spawn(io::Error),
    /// The program exited unsuccessfully. `code` is `None` when killed by a signal.
    Failed { code: Option<i32>, output: String },
    /// The program ran longer than allowed and was killed.
    Timeout(Duration),
    /// Setting up or reading the output pipe failed.
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty command"),
            Self::NotFound(program) => write!(f, "command not found: {program}"),
            Self::Spawn(err) => write!(f, "cannot start: {err}"),
            Self::Failed { code: Some(code), output } => write!(f, "exit {code}: {}", output.trim()),
            Self::Failed { code: None, output } => write!(f, "killed: {}", output.trim()),
            Self::Timeout(limit) => write!(f, "timed out after {}s", limit.as_secs()),
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Runs Terminal command lines.
pub trait CommandRunner {
    /// Run `line` to completion and capture its output.
    fn run(
        &mut self,
        line: &str,
    ) -> CommandOutcome;
}

/// Runs commands as child processes with a time limit.
#[derive(Clone, Copy, Debug)]
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    /// Create a runner that kills commands after `timeout`.
    pub const fn new(timeout: Duration) -> Self { Self { timeout } }
}

impl CommandRunner for ShellRunner {
    fn run(
        &mut self,
        line: &str,
    ) -> CommandOutcome {
        let mut words = line.split_whitespace();
        let program = words.next().ok_or(CommandError::Empty)?;

        let (mut reader, writer) = io::pipe().map_err(CommandError::Io)?;
        let mut command = Command::new(program);
        command
            .args(words)
            .stdin(Stdio::null())
            .stdout(writer.try_clone().map_err(CommandError::Io)?)
            .stderr(writer);

        let mut child = command.spawn().map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound(program.to_owned()),
            _ => CommandError::Spawn(err),
        })?;
        // The Command still holds our copies of the write end; the reader only
        // sees EOF once they are closed.
        drop(command);

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut bytes = Vec::new();
            // Keep reading past the cap: closing the pipe early kills the child with SIGPIPE
            let result = reader
                .by_ref()
                .take(MAX_CAPTURE_BYTES)
                .read_to_end(&mut bytes)
                .and_then(|_| io::copy(&mut reader, &mut io::sink()))
                .map(|_| bytes);
            // Receiver is gone if the command timed out
            let _ = tx.send(result);
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait().map_err(CommandError::Io)? {
                break status;
            }
            if Instant::now() >= deadline {
                debug!("killing `{program}` after {:?}", self.timeout);
                // Already-exited races are fine: wait() reaps either way
                let _ = child.kill();
                let _ = child.wait();
                return Err(CommandError::Timeout(self.timeout));
            }
            thread::sleep(WAIT_POLL_INTERVAL);
        };

        let output = match rx.recv_timeout(OUTPUT_DRAIN_TIMEOUT) {
            Ok(Ok(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
            Ok(Err(err)) => return Err(CommandError::Io(err)),
            // A background grandchild still holds the pipe open
            Err(_) => String::new(),
        };

        if status.success() {
            Ok(output)
        } else {
            Err(CommandError::Failed {
                code: status.code(),
                output,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn runner() -> ShellRunner { ShellRunner::new(Duration::from_secs(5)) }

    #[test]
    fn test_captures_stdout() {
        let output = runner().run("echo hello world").expect("echo should succeed");
        assert_eq!(output, "hello world\n");
    }

    #[test]
    fn test_arguments_are_not_shell_interpreted() {
        let output = runner().run("echo $HOME | cat").expect("echo should succeed");
        assert_eq!(output, "$HOME | cat\n", "No variable expansion, no pipes");
    }

    #[test]
    fn test_captures_stderr() {
        let err = runner()
            .run("ls /definitely/not/a/real/path")
            .expect_err("ls of a missing path fails");
        match err {
            CommandError::Failed { code, output } => {
                assert!(code.is_some_and(|c| c != 0));
                assert!(!output.is_empty(), "stderr text is captured");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_program_is_not_found() {
        let err = runner().run("no-such-program-xyz --flag").expect_err("must fail");
        assert!(matches!(&err, CommandError::NotFound(p) if p == "no-such-program-xyz"));
        assert_eq!(err.to_string(), "command not found: no-such-program-xyz");
    }

    #[test]
    fn test_nonzero_exit_is_an_error_value() {
        let err = runner().run("false").expect_err("false exits 1");
        assert!(matches!(err, CommandError::Failed { code: Some(1), .. }));
        assert!(err.to_string().starts_with("exit 1"));
    }

    #[test]
    fn test_large_output_is_capped_not_killed() {
        // seq prints about 580 KiB here
        let output = runner().run("seq 1 100000").expect("seq should succeed");
        assert_eq!(output.len(), MAX_CAPTURE_BYTES as usize, "Output keeps only the first bytes");
        assert!(output.starts_with("1\n2\n3\n"));
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert!(matches!(runner().run("   "), Err(CommandError::Empty)));
    }

    #[test]
    fn test_long_command_is_killed() {
        let mut runner = ShellRunner::new(Duration::from_millis(200));
        let started = Instant::now();
        let err = runner.run("sleep 10").expect_err("sleep outlives the timeout");

        assert!(matches!(err, CommandError::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(5), "Runner returned promptly");
    }
}

//! Stream lines into an external pager.
//!
//! The pager's stdin is a pipe we write to one line at a time, so it can
//! start drawing before the input is exhausted.  Its stdout/stderr stay on
//! the terminal.

use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

use thiserror::Error;

use super::command::PagerCommand;
use crate::core::lookahead::Line;

/// Printed (to stdout) when the pager program doesn't exist.
pub const NO_PAGER_MESSAGE: &str = "No pager available :(";

/// How a hand-off ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOff {
    /// All input reached the pager.
    Completed,
    /// The pager closed its input first (e.g. the user quit it).
    PagerClosedEarly,
    /// The pager program couldn't be found; nothing was shown.
    PagerMissing,
}

#[derive(Debug, Error)]
pub enum HandOffError {
    #[error("failed to start pager `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to pager")]
    Write(#[source] io::Error),
    #[error("failed to read input")]
    Read(#[source] io::Error),
    #[error("failed to wait for pager")]
    Wait(#[source] io::Error),
}

/// Result of a single write into the pager pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The read end is gone.
    PeerClosed,
}

/// Write one line, telling a closed pipe apart from real failures.
pub fn write_line<W: Write>(pipe: &mut W, line: &[u8]) -> io::Result<WriteOutcome> {
    match pipe.write_all(line) {
        Ok(()) => Ok(WriteOutcome::Written),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(WriteOutcome::PeerClosed),
        Err(e) => Err(e),
    }
}

/// Page `lines` through `command` and wait for the pager to exit.
///
/// A missing pager prints [`NO_PAGER_MESSAGE`] and returns
/// [`HandOff::PagerMissing`].  The child is always reaped before returning,
/// including when reading or writing fails.
pub fn page<I>(command: &PagerCommand, lines: I) -> Result<HandOff, HandOffError>
where
    I: IntoIterator<Item = io::Result<Line>>,
{
    let mut child = match Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("pager `{}` not found", command.program);
            println!("{NO_PAGER_MESSAGE}");
            return Ok(HandOff::PagerMissing);
        }
        Err(source) => {
            return Err(HandOffError::Spawn {
                program: command.program.clone(),
                source,
            })
        }
    };
    tracing::debug!("spawned pager `{command}` (pid {})", child.id());

    let streamed = match child.stdin.take() {
        Some(stdin) => stream(stdin, lines),
        None => Ok(HandOff::Completed),
    };
    // stdin was moved into `stream` and is closed by now.
    let waited = reap(&mut child);

    let outcome = streamed?;
    waited?;
    Ok(outcome)
}

/// Feed every line to the pager.  Dropping `stdin` on return closes the pipe.
fn stream<I>(mut stdin: ChildStdin, lines: I) -> Result<HandOff, HandOffError>
where
    I: IntoIterator<Item = io::Result<Line>>,
{
    for line in lines {
        let line = line.map_err(HandOffError::Read)?;
        match write_line(&mut stdin, &line).map_err(HandOffError::Write)? {
            WriteOutcome::Written => {}
            WriteOutcome::PeerClosed => {
                tracing::debug!("pager closed its input; stopping");
                return Ok(HandOff::PagerClosedEarly);
            }
        }
    }
    Ok(HandOff::Completed)
}

fn reap(child: &mut Child) -> Result<(), HandOffError> {
    let status = child.wait().map_err(HandOffError::Wait)?;
    tracing::debug!("pager exited: {status}");
    Ok(())
}

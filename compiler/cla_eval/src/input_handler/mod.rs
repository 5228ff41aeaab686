//! Input handler for the `i` command.
//!
//! `i` is the only point where a session blocks. Where the line comes from is
//! decided by the host:
//! - Console: stdin (default)
//! - Tests and editors: a scripted queue of lines
//! - Non-interactive hosts: closed (every read reports end of input)
//!
//! Same enum-dispatch shape as the print handler.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads lines from the process's stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    /// Read one line, without its line terminator. `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_terminator(line)))
    }
}

/// Serves a fixed sequence of lines, then reports end of input.
pub struct ScriptedInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Reads from stdin (default).
    Stdin(StdinInputHandler),
    /// Replays queued lines.
    Scripted(ScriptedInputHandler),
    /// Always at end of input.
    Closed,
}

impl InputHandlerImpl {
    /// Read one line. `Ok(None)` means the source is exhausted.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Scripted(h) => Ok(h.read_line()),
            Self::Closed => Ok(None),
        }
    }
}

/// Shared input handler that can be passed around.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

/// Create the default stdin input handler.
pub fn stdin_input() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

/// Create an input handler that replays `lines` in order.
pub fn scripted_input<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(lines)))
}

/// Create an input handler with no input at all.
pub fn closed_input() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Closed)
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

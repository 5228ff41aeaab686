//! Where a session's lines and `i` prompts are written.
//!
//! Hosts pick the destination when building the session: the console writes
//! to stdout, editors and tests capture into a buffer, and hosts that only
//! read the returned `Output` discard everything. The set is closed, so it is
//! an enum rather than a trait object.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    fn write(text: &str, newline: bool) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout has nowhere to report to.
        let _ = stdout.write_all(text.as_bytes());
        if newline {
            let _ = stdout.write_all(b"\n");
        }
        let _ = stdout.flush();
    }
}

/// Accumulates everything written, prompts included, in write order.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    fn write(&self, text: &str, newline: bool) {
        let mut buf = self.buffer.lock();
        buf.push_str(text);
        if newline {
            buf.push('\n');
        }
    }
}

/// Output destination of a session.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Write one output line.
    pub fn line(&self, text: &str) {
        self.write(text, true);
    }

    /// Write a prompt. No newline; stdout is flushed before `i` blocks.
    pub fn prompt(&self, text: &str) {
        self.write(text, false);
    }

    /// Everything captured so far. Empty unless this is a buffer.
    pub fn captured(&self) -> String {
        match self {
            Self::Buffer(h) => h.buffer.lock().clone(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    fn write(&self, text: &str, newline: bool) {
        match self {
            Self::Stdout(_) => StdoutPrintHandler::write(text, newline),
            Self::Buffer(h) => h.write(text, newline),
            Self::Silent => {}
        }
    }
}

/// A print handler shared between a session and its host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::default()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

//! What a call into the session produced.

use tracing::debug;

use crate::errors::EvalError;
use crate::print_handler::SharedPrintHandler;

/// Lines emitted and errors raised by one `execute_line` / `execute_file`.
///
/// Error lines appear in `lines` in the position they were printed, and the
/// errors themselves in `errors`, in the order they were raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    lines: Vec<String>,
    errors: Vec<EvalError>,
}

impl Output {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    /// The first error raised, if any.
    pub fn error(&self) -> Option<&EvalError> {
        self.errors.first()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// All lines, each terminated by a newline.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Streams lines to the print handler while recording them for the `Output`.
pub(crate) struct Emitter {
    handler: SharedPrintHandler,
    output: Output,
}

impl Emitter {
    pub(crate) fn new(handler: SharedPrintHandler) -> Self {
        Emitter {
            handler,
            output: Output::default(),
        }
    }

    pub(crate) fn emit(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.handler.line(&line);
        self.output.lines.push(line);
    }

    /// Text shown without a newline and not recorded as an output line.
    pub(crate) fn prompt(&self, text: &str) {
        self.handler.prompt(text);
    }

    pub(crate) fn report(&mut self, err: EvalError) {
        debug!(code = %err.code(), error = %err, "line failed");
        self.emit(err.report_line());
        self.output.errors.push(err);
    }

    pub(crate) fn finish(self) -> Output {
        self.output
    }
}

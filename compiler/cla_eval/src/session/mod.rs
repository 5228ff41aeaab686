//! The interpreter session.
//!
//! A `Session` owns one variable store and runs lines against it. Every entry
//! point returns an [`Output`] instead of failing: errors are caught at the
//! line boundary, rendered as one output line, and recorded.

mod builder;

pub use builder::SessionBuilder;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use cla_ir::{Command, Value};
use cla_parse::{is_skippable, parse_line};

use crate::cancel::CancelToken;
use crate::config::SessionConfig;
use crate::environment::VariableStore;
use crate::errors::{input_closed, io_error, unknown_command, EvalResult};
use crate::exec::{eval_countdown, eval_if, substitute, LoopGuard};
use crate::input_handler::SharedInputHandler;
use crate::loader::{InclusionChain, IncludeKind};
use crate::output::{Emitter, Output};
use crate::print_handler::SharedPrintHandler;

/// One interpreter instance: a variable store plus the handlers it talks to.
pub struct Session {
    pub(crate) store: VariableStore,
    pub(crate) config: SessionConfig,
    pub(crate) print: SharedPrintHandler,
    pub(crate) input: SharedInputHandler,
    pub(crate) cancel: CancelToken,
    pub(crate) chain: InclusionChain,
}

impl Session {
    /// A session printing to stdout and reading from stdin.
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Run one line as typed at a console.
    ///
    /// Blank and comment lines do nothing.
    pub fn execute_line(&mut self, text: &str) -> Output {
        let mut out = Emitter::new(Arc::clone(&self.print));
        if let Err(err) = self.eval_line(text, &mut out) {
            out.report(err);
        }
        out.finish()
    }

    /// Run a script file, announced the way `open` announces it.
    pub fn execute_file(&mut self, path: impl AsRef<Path>) -> Output {
        self.execute_path(path.as_ref())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    fn execute_path(&mut self, path: &Path) -> Output {
        let mut out = Emitter::new(Arc::clone(&self.print));
        if let Err(err) = self.include(path, IncludeKind::Open, &mut out) {
            out.report(err);
        }
        out.finish()
    }

    /// Current value of a variable, as stored.
    pub fn read_variable(&self, name: &str) -> Option<Value> {
        self.store.lookup(name).cloned()
    }

    /// Declare or overwrite a variable from outside a script.
    pub fn write_variable(&mut self, name: impl Into<String>, value: Value) {
        self.store.define(name, value);
    }

    /// All variables, sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store.sorted().into_iter()
    }

    /// The token that cancels running loops and scripts. Clone it to cancel
    /// from another thread.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Parse and evaluate one line, returning its error instead of reporting.
    pub(crate) fn eval_line(&mut self, line: &str, out: &mut Emitter) -> EvalResult {
        let line = line.trim();
        if is_skippable(line) {
            return Ok(());
        }
        let command = parse_line(line).inspect_err(|err| {
            debug!(keyword = %err.keyword(), error = %err, "malformed command");
        })?;
        trace!(keyword = command.keyword(), line, "eval");
        self.eval_command(command, out)
    }

    fn eval_command(&mut self, command: Command, out: &mut Emitter) -> EvalResult {
        match command {
            Command::Print(text) => {
                out.emit(substitute(&text, &self.store));
                Ok(())
            }
            Command::Input(name) => self.eval_input(&name, out),
            Command::Declare { name, literal } => {
                self.store.define(name, Value::from_literal(&literal));
                Ok(())
            }
            Command::Open(path) => self.include(Path::new(&path), IncludeKind::Open, out),
            Command::Import(path) => self.include(Path::new(&path), IncludeKind::Import, out),
            Command::If(cond) => eval_if(&cond, &self.store, out),
            Command::While(cond) => {
                let guard = LoopGuard {
                    config: &self.config,
                    cancel: &self.cancel,
                };
                eval_countdown(&cond, &mut self.store, guard, out)
            }
            Command::Unknown(keyword) => Err(unknown_command(&keyword)),
        }
    }

    /// `i`: prompt, block on the input handler, store the raw line as text.
    fn eval_input(&mut self, name: &str, out: &mut Emitter) -> EvalResult {
        out.prompt(&format!("Enter value for {name}: "));
        let line = self
            .input
            .read_line()
            .map_err(|e| io_error("<stdin>", &e))?
            .ok_or_else(|| input_closed(name))?;
        self.store.define(name, Value::text(line));
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

//! Script loading for `open`, `import` and `Session::execute_file`.
//!
//! A script runs line by line through the same path as the console. Each
//! line's errors are reported where they happen and the script continues;
//! only cancellation unwinds the whole inclusion chain.
//!
//! Checks happen in a fixed order before anything runs: extension, existence,
//! cycle, depth, read. A failed check produces one error for the including
//! line and no output from the target file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use cla_ir::has_script_extension;
use cla_parse::script_lines;

use crate::errors::{
    file_kind, file_not_found, import_cycle, include_depth_exceeded, io_error, EvalError,
    EvalResult,
};
use crate::output::Emitter;
use crate::stack::ensure_sufficient_stack;
use crate::Session;

/// How a script was brought in. Only the announcement differs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IncludeKind {
    Open,
    Import,
}

impl IncludeKind {
    pub fn announcement(self, path: &str) -> String {
        match self {
            IncludeKind::Open => format!("Opening '{path}'..."),
            IncludeKind::Import => format!("Importing from '{path}'..."),
        }
    }
}

impl fmt::Display for IncludeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludeKind::Open => f.write_str("open"),
            IncludeKind::Import => f.write_str("import"),
        }
    }
}

/// One script currently executing.
#[derive(Clone, Debug)]
struct Frame {
    /// Canonical path; identity for cycle detection.
    key: PathBuf,
    /// The path as the including line wrote it.
    shown: String,
}

/// Scripts currently executing, outermost first.
///
/// The stack gives the order for cycle messages and the directory for
/// relative paths; the set makes the cycle check O(1).
#[derive(Clone, Debug, Default)]
pub struct InclusionChain {
    stack: SmallVec<[Frame; 8]>,
    active: FxHashSet<PathBuf>,
}

impl InclusionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` (a canonical path) is already executing.
    pub fn would_cycle(&self, key: &Path) -> bool {
        self.active.contains(key)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn enter(&mut self, key: PathBuf, shown: impl Into<String>) {
        self.active.insert(key.clone());
        self.stack.push(Frame {
            key,
            shown: shown.into(),
        });
    }

    pub fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.active.remove(&frame.key);
        }
    }

    /// Directory of the innermost executing script.
    pub fn current_dir(&self) -> Option<&Path> {
        self.stack.last().and_then(|frame| frame.key.parent())
    }

    /// Paths as written, outermost first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stack.iter().map(|frame| frame.shown.as_str())
    }
}

/// Find the file a script path refers to.
///
/// A relative path is tried against `including_dir` first, then as given.
pub fn resolve_script_path(requested: &Path, including_dir: Option<&Path>) -> Option<PathBuf> {
    if requested.is_relative() {
        if let Some(dir) = including_dir {
            let candidate = dir.join(requested);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    requested.is_file().then(|| requested.to_path_buf())
}

impl Session {
    /// Run the script at `path` as part of the current line.
    ///
    /// The filesystem sees `path` itself; messages show its lossy UTF-8
    /// rendering.
    pub(crate) fn include(
        &mut self,
        path: &Path,
        kind: IncludeKind,
        out: &mut Emitter,
    ) -> EvalResult {
        let shown = path.to_string_lossy();
        let shown = shown.as_ref();
        if !has_script_extension(shown) {
            return Err(file_kind(shown));
        }
        let resolved = resolve_script_path(path, self.chain.current_dir())
            .ok_or_else(|| file_not_found(shown))?;
        let key = fs::canonicalize(&resolved).map_err(|e| io_error(shown, &e))?;

        if self.chain.would_cycle(&key) {
            warn!(path = shown, depth = self.chain.depth(), "inclusion cycle");
            return Err(import_cycle(self.chain.names(), shown));
        }
        let limit = self.config.max_include_depth;
        if self.chain.depth() >= limit {
            warn!(path = shown, limit, "inclusion too deep");
            return Err(include_depth_exceeded(shown, limit));
        }

        let source = fs::read_to_string(&resolved).map_err(|e| io_error(shown, &e))?;
        if self.config.announce_files {
            out.emit(kind.announcement(shown));
        }
        debug!(%kind, path = %key.display(), depth = self.chain.depth() + 1, "loading script");

        self.chain.enter(key, shown);
        let result = ensure_sufficient_stack(|| self.run_script(&source, out));
        self.chain.leave();
        result
    }

    fn run_script(&mut self, source: &str, out: &mut Emitter) -> EvalResult {
        for line in script_lines(source) {
            if self.cancel.is_cancelled() {
                return Err(EvalError::Cancelled);
            }
            if self.config.echo_lines {
                out.emit(format!("Executing: {}", line.text));
            }
            trace!(number = line.number, text = line.text, "script line");
            match self.eval_line(line.text, out) {
                Ok(()) => {}
                Err(err) if err.is_cancellation() => return Err(err),
                Err(err) => out.report(err),
            }
        }
        Ok(())
    }
}

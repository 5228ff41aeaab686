//! Cla IR - core data types for the cla line interpreter.
//!
//! This crate holds the types every other layer agrees on:
//! - `Value`: the integer-or-text runtime value and its literal coercion
//! - `CompareOp` / `OpToken`: the six relational operators
//! - `Command` / `Condition` / `Keyword`: one parsed script line
//!
//! It has no behavior beyond construction, coercion, and rendering. Parsing
//! lives in `cla_parse` and evaluation in `cla_eval`.

mod command;
mod operator;
mod value;

pub use command::{Command, Condition, Keyword};
pub use operator::{CompareOp, OpToken};
pub use value::{is_integer_literal, Value};

/// Extension every `open`/`import` target must carry (without the dot).
pub const SCRIPT_EXTENSION: &str = "cla";

/// Whether `path` names a script file.
///
/// Matches on the textual suffix, so `.cla` itself is accepted and
/// `notes.cla.txt` is not.
pub fn has_script_extension(path: &str) -> bool {
    path.strip_suffix(SCRIPT_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

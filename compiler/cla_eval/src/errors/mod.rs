//! Evaluation errors and their constructors.
//!
//! Every failure raised while running one line is an [`EvalError`]. The
//! session catches it at the line boundary and renders it as exactly one
//! output line via [`EvalError::report_line`]; nothing here is fatal to the
//! session.
//!
//! Constructors for the common cases live next to the type so call sites read
//! as `Err(undefined_variable(name))`.

use std::fmt::Display;

use cla_ir::{CompareOp, Value};
use cla_parse::ParseError;

use crate::error_code::ErrorCode;

/// Result of evaluating one command.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// An error raised while evaluating a line or loading a script.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Malformed command shape.
    #[error(transparent)]
    Parse(ParseError),

    #[error("Unknown command: {keyword}")]
    UnknownCommand { keyword: String },

    #[error("Unknown operator: {op}")]
    UnknownOperator { op: String },

    /// Variable referenced before declaration.
    #[error("variable '{name}' is not declared")]
    UndefinedVariable { name: String },

    /// Operand types incompatible with the requested comparison.
    #[error("type mismatch for '{name}': {detail}")]
    TypeCoercion { name: String, detail: String },

    /// `open`/`import` target without the script extension.
    #[error("File must have a .cla extension: '{path}'")]
    FileKind { path: String },

    #[error("File '{path}' not found.")]
    NotFound { path: String },

    /// A file re-entered itself through nested `open`/`import`.
    #[error("circular import detected: {}", .chain.join(" -> "))]
    ImportCycle { chain: Vec<String> },

    #[error("inclusion of '{path}' exceeds the maximum depth of {limit}")]
    IncludeDepthExceeded { path: String, limit: usize },

    #[error("loop on '{name}' exceeded {limit} iterations")]
    LoopBudgetExceeded { name: String, limit: u64 },

    #[error("decrementing '{name}' overflowed")]
    IntegerUnderflow { name: String },

    #[error("execution cancelled")]
    Cancelled,

    #[error("input closed while reading '{name}'")]
    InputClosed { name: String },

    #[error("could not read '{path}': {message}")]
    Io { path: String, message: String },
}

impl EvalError {
    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Parse(ParseError::Usage { .. }) => ErrorCode::E1001,
            EvalError::Parse(ParseError::ExtraArguments { .. }) => ErrorCode::E1002,
            EvalError::Parse(ParseError::FileKind { .. }) | EvalError::FileKind { .. } => {
                ErrorCode::E7001
            }
            EvalError::UnknownCommand { .. } => ErrorCode::E1003,
            EvalError::UnknownOperator { .. } => ErrorCode::E1004,
            EvalError::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalError::TypeCoercion { .. } => ErrorCode::E6002,
            EvalError::IntegerUnderflow { .. } => ErrorCode::E6003,
            EvalError::LoopBudgetExceeded { .. } => ErrorCode::E6004,
            EvalError::Cancelled => ErrorCode::E6005,
            EvalError::InputClosed { .. } => ErrorCode::E6006,
            EvalError::NotFound { .. } => ErrorCode::E7002,
            EvalError::ImportCycle { .. } => ErrorCode::E7003,
            EvalError::IncludeDepthExceeded { .. } => ErrorCode::E7004,
            EvalError::Io { .. } => ErrorCode::E7005,
        }
    }

    /// Cancellation unwinds through nested scripts instead of being reported
    /// once per level.
    #[inline]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, EvalError::Cancelled)
    }

    /// The single output line shown for this error.
    ///
    /// Usage hints and unknown command/operator messages are shown as is;
    /// everything else is prefixed with `Error: `.
    pub fn report_line(&self) -> String {
        match self {
            EvalError::Parse(ParseError::Usage { .. })
            | EvalError::UnknownCommand { .. }
            | EvalError::UnknownOperator { .. } => self.to_string(),
            _ => format!("Error: {self}"),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::FileKind { path, .. } => EvalError::FileKind { path },
            other => EvalError::Parse(other),
        }
    }
}

// Variable Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_string(),
    }
}

#[cold]
pub fn input_closed(name: &str) -> EvalError {
    EvalError::InputClosed {
        name: name.to_string(),
    }
}

// Command Errors

#[cold]
pub fn unknown_command(keyword: &str) -> EvalError {
    EvalError::UnknownCommand {
        keyword: keyword.to_string(),
    }
}

#[cold]
pub fn unknown_operator(op: &str) -> EvalError {
    EvalError::UnknownOperator { op: op.to_string() }
}

// Coercion Errors

/// `<`, `>`, `<=`, `>=` on two text values.
#[cold]
pub fn ordering_on_text(name: &str, op: CompareOp) -> EvalError {
    EvalError::TypeCoercion {
        name: name.to_string(),
        detail: format!("'{op}' is only defined on integers"),
    }
}

/// Integer compared against text, in either order.
#[cold]
pub fn mixed_comparison(name: &str, left: &Value, right: &Value) -> EvalError {
    EvalError::TypeCoercion {
        name: name.to_string(),
        detail: format!(
            "cannot compare {} '{left}' with {} '{right}'",
            left.type_name(),
            right.type_name()
        ),
    }
}

/// The countdown loop found a non-integer in its variable.
#[cold]
pub fn loop_requires_integer(name: &str, value: &Value) -> EvalError {
    EvalError::TypeCoercion {
        name: name.to_string(),
        detail: format!("loop variable must be an integer, found '{value}'"),
    }
}

#[cold]
pub fn integer_underflow(name: &str) -> EvalError {
    EvalError::IntegerUnderflow {
        name: name.to_string(),
    }
}

#[cold]
pub fn loop_budget_exceeded(name: &str, limit: u64) -> EvalError {
    EvalError::LoopBudgetExceeded {
        name: name.to_string(),
        limit,
    }
}

// Loader Errors

#[cold]
pub fn file_kind(path: &str) -> EvalError {
    EvalError::FileKind {
        path: path.to_string(),
    }
}

#[cold]
pub fn file_not_found(path: &str) -> EvalError {
    EvalError::NotFound {
        path: path.to_string(),
    }
}

/// `chain` is the in-flight inclusion stack; `reentered` closes the loop.
#[cold]
pub fn import_cycle<P: Display>(chain: impl IntoIterator<Item = P>, reentered: P) -> EvalError {
    EvalError::ImportCycle {
        chain: chain
            .into_iter()
            .chain(std::iter::once(reentered))
            .map(|p| p.to_string())
            .collect(),
    }
}

#[cold]
pub fn include_depth_exceeded(path: &str, limit: usize) -> EvalError {
    EvalError::IncludeDepthExceeded {
        path: path.to_string(),
        limit,
    }
}

#[cold]
pub fn io_error(path: &str, err: &std::io::Error) -> EvalError {
    EvalError::Io {
        path: path.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests;

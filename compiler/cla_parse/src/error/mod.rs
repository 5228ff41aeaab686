//! Parse error types.
//!
//! A parse error always concerns a single line and renders as a single line,
//! naming the offending command.

use cla_ir::Keyword;

/// A malformed command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Required fields are missing.
    #[error("Usage: {}", .keyword.usage())]
    Usage { keyword: Keyword },

    /// A command that takes one field got more.
    #[error("`{keyword}` takes a single variable name, found extra input: {extra}")]
    ExtraArguments { keyword: Keyword, extra: String },

    /// `open`/`import` target without the script extension.
    #[error("File must have a .cla extension: '{path}'")]
    FileKind { keyword: Keyword, path: String },
}

impl ParseError {
    /// The command the error was raised for.
    pub fn keyword(&self) -> Keyword {
        match self {
            ParseError::Usage { keyword }
            | ParseError::ExtraArguments { keyword, .. }
            | ParseError::FileKind { keyword, .. } => *keyword,
        }
    }
}

#[cfg(test)]
mod tests;

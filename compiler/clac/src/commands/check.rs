//! The `check` command: parse every line of a script without running it.
//!
//! Finds what `cla_parse` rejects plus the two mistakes the evaluator would
//! report before touching any state: unknown commands and unknown operators.

use std::fmt;

use cla_eval::errors::{unknown_command, unknown_operator};
use cla_eval::EvalError;
use cla_ir::{Command, OpToken};
use cla_parse::{parse_line, script_lines};

/// A line that would fail no matter what the variables hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineProblem {
    /// 1-based line number.
    pub line: usize,
    pub error: EvalError,
}

impl fmt::Display for LineProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: [{}] {}", self.line, self.error.code(), self.error)
    }
}

/// Problems in `source`, in line order.
pub fn check_source(source: &str) -> Vec<LineProblem> {
    script_lines(source)
        .filter_map(|line| {
            check_line(line.text).err().map(|error| LineProblem {
                line: line.number,
                error,
            })
        })
        .collect()
}

fn check_line(text: &str) -> Result<(), EvalError> {
    match parse_line(text)? {
        Command::Unknown(keyword) => Err(unknown_command(&keyword)),
        Command::If(cond) | Command::While(cond) => match cond.op {
            OpToken::Unknown(symbol) => Err(unknown_operator(&symbol)),
            OpToken::Known(_) => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Check the script at `path`, printing problems to stderr.
///
/// Returns `false` if the file could not be read or has problems.
pub fn check_file(path: &str) -> bool {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            return false;
        }
    };

    let problems = check_source(&source);
    for problem in &problems {
        eprintln!("{path}: {problem}");
    }
    if problems.is_empty() {
        let count = script_lines(&source).count();
        println!("OK: {path} ({count} commands)");
        true
    } else {
        false
    }
}

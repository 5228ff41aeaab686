//! Cla Parse - command parser for the cla line interpreter.
//!
//! A line is split at its first whitespace run into a keyword and a
//! remainder; each command then splits its remainder its own way:
//!
//! | Command | Remainder |
//! |---------|-----------|
//! | `p` | printed verbatim |
//! | `i` | exactly one variable name |
//! | `new` | variable name, then the rest of the line as the literal |
//! | `open`, `import` | a `.cla` path |
//! | `if`, `while` | variable, operator, then the rest of the line as the literal |
//!
//! Unrecognised keywords parse successfully as [`Command::Unknown`]; deciding
//! that they are an error is the evaluator's job.

mod error;

pub use error::ParseError;

use cla_ir::{has_script_extension, Command, Condition, Keyword, OpToken};

/// Parse one line into a command.
///
/// The line is trimmed first. Blank lines and comments are not special here:
/// callers skip them before parsing (see [`is_skippable`]).
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let (word, rest) = split_first_word(line.trim());
    let Some(keyword) = Keyword::lookup(word) else {
        return Ok(Command::Unknown(word.to_string()));
    };

    match keyword {
        Keyword::Print => Ok(Command::Print(rest.to_string())),
        Keyword::Input => parse_input(rest),
        Keyword::New => parse_declare(rest),
        Keyword::Open => parse_path(keyword, rest).map(Command::Open),
        Keyword::Import => parse_path(keyword, rest).map(Command::Import),
        Keyword::If => parse_condition(keyword, rest).map(Command::If),
        Keyword::While => parse_condition(keyword, rest).map(Command::While),
    }
}

/// Whether the line's first non-whitespace character is `#`.
#[inline]
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Blank and comment lines carry no command.
#[inline]
pub fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || is_comment(line)
}

/// A script line that carries a command, with its 1-based line number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// The trimmed, non-blank, non-comment lines of a script, in file order.
pub fn script_lines(source: &str) -> impl Iterator<Item = ScriptLine<'_>> {
    source.lines().enumerate().filter_map(|(index, raw)| {
        let text = raw.trim();
        (!is_skippable(text)).then_some(ScriptLine {
            number: index + 1,
            text,
        })
    })
}

/// Split at the first whitespace run.
///
/// The remainder has its leading whitespace removed and is empty if there is
/// nothing after the first word.
fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim_start()),
        None => (s, ""),
    }
}

fn parse_input(rest: &str) -> Result<Command, ParseError> {
    let (name, extra) = split_first_word(rest);
    if name.is_empty() {
        return Err(ParseError::Usage {
            keyword: Keyword::Input,
        });
    }
    if !extra.is_empty() {
        return Err(ParseError::ExtraArguments {
            keyword: Keyword::Input,
            extra: extra.to_string(),
        });
    }
    Ok(Command::Input(name.to_string()))
}

fn parse_declare(rest: &str) -> Result<Command, ParseError> {
    let (name, literal) = split_first_word(rest);
    if name.is_empty() || literal.is_empty() {
        return Err(ParseError::Usage {
            keyword: Keyword::New,
        });
    }
    Ok(Command::Declare {
        name: name.to_string(),
        literal: literal.to_string(),
    })
}

fn parse_path(keyword: Keyword, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::Usage { keyword });
    }
    if !has_script_extension(rest) {
        return Err(ParseError::FileKind {
            keyword,
            path: rest.to_string(),
        });
    }
    Ok(rest.to_string())
}

fn parse_condition(keyword: Keyword, rest: &str) -> Result<Condition, ParseError> {
    let (name, rest) = split_first_word(rest);
    let (op, literal) = split_first_word(rest);
    if name.is_empty() || op.is_empty() || literal.is_empty() {
        return Err(ParseError::Usage { keyword });
    }
    Ok(Condition {
        name: name.to_string(),
        op: OpToken::from_symbol(op),
        literal: literal.to_string(),
    })
}

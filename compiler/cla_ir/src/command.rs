//! Parsed script lines.

use std::fmt;

use crate::operator::OpToken;
use crate::value::Value;

/// The fixed set of command keywords. Matching is case-sensitive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    /// `p <text>`
    Print,
    /// `i <variable_name>`
    Input,
    /// `new <variable_name> <value>`
    New,
    /// `open <filename.cla>`
    Open,
    /// `import <filename.cla>`
    Import,
    /// `if <variable> <operator> <value>`
    If,
    /// `while <variable> <operator> <value>`
    While,
}

impl Keyword {
    pub fn lookup(word: &str) -> Option<Self> {
        match word {
            "p" => Some(Self::Print),
            "i" => Some(Self::Input),
            "new" => Some(Self::New),
            "open" => Some(Self::Open),
            "import" => Some(Self::Import),
            "if" => Some(Self::If),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Print => "p",
            Self::Input => "i",
            Self::New => "new",
            Self::Open => "open",
            Self::Import => "import",
            Self::If => "if",
            Self::While => "while",
        }
    }

    /// One-line usage shown when the command is malformed.
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Print => "p <text>",
            Self::Input => "i <variable_name>",
            Self::New => "new <variable_name> <value>",
            Self::Open => "open <filename.cla>",
            Self::Import => "import <filename.cla>",
            Self::If => "if <variable> <operator> <value>",
            Self::While => "while <variable> <operator> <value>",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<variable> <operator> <literal>` as used by `if` and `while`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Condition {
    pub name: String,
    pub op: OpToken,
    /// Raw literal text; may contain spaces.
    pub literal: String,
}

impl Condition {
    /// The literal resolved by the all-digit rule.
    pub fn literal_value(&self) -> Value {
        Value::from_literal(&self.literal)
    }
}

/// One parsed line. Constructed, evaluated, discarded.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Command {
    /// Print text after `$name` substitution.
    Print(String),
    /// Read a line from the input handler into a variable.
    Input(String),
    /// Declare or overwrite a variable from a literal.
    Declare { name: String, literal: String },
    /// Execute another script file.
    Open(String),
    /// Execute another script file (announced as an import).
    Import(String),
    /// Single-shot condition.
    If(Condition),
    /// Countdown loop.
    While(Condition),
    /// The first word was not a keyword.
    Unknown(String),
}

impl Command {
    /// The keyword this command was written with.
    pub fn keyword(&self) -> &str {
        match self {
            Command::Print(_) => Keyword::Print.as_str(),
            Command::Input(_) => Keyword::Input.as_str(),
            Command::Declare { .. } => Keyword::New.as_str(),
            Command::Open(_) => Keyword::Open.as_str(),
            Command::Import(_) => Keyword::Import.as_str(),
            Command::If(_) => Keyword::If.as_str(),
            Command::While(_) => Keyword::While.as_str(),
            Command::Unknown(word) => word,
        }
    }
}

//! Relational operators used by `if` and `while`.

use std::fmt;

/// The six relational operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
}

impl CompareOp {
    /// Every operator, in the order they are documented.
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::NotEq,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::GtEq,
        CompareOp::LtEq,
    ];

    /// Look up an operator by its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::GtEq),
            "<=" => Some(Self::LtEq),
            _ => None,
        }
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
        }
    }

    /// The operator that holds exactly when `self` does not.
    ///
    /// The countdown loop stops when the negation of its condition holds.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Eq => Self::NotEq,
            Self::NotEq => Self::Eq,
            Self::Gt => Self::LtEq,
            Self::Lt => Self::GtEq,
            Self::GtEq => Self::Lt,
            Self::LtEq => Self::Gt,
        }
    }

    /// `==` and `!=`; the only operators defined on text.
    #[inline]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }

    /// Apply the operator to two ordered operands.
    #[inline]
    pub fn apply<T: Ord + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Eq => left == right,
            Self::NotEq => left != right,
            Self::Gt => left > right,
            Self::Lt => left < right,
            Self::GtEq => left >= right,
            Self::LtEq => left <= right,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// The operator field of a condition as written in the source.
///
/// An unrecognised symbol is not a parse error: the evaluator reports it
/// when the condition runs.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpToken {
    Known(CompareOp),
    Unknown(String),
}

impl OpToken {
    /// Classify a raw operator symbol.
    pub fn from_symbol(symbol: &str) -> Self {
        CompareOp::from_symbol(symbol)
            .map_or_else(|| OpToken::Unknown(symbol.to_string()), OpToken::Known)
    }
}

impl fmt::Display for OpToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpToken::Known(op) => op.fmt(f),
            OpToken::Unknown(symbol) => f.write_str(symbol),
        }
    }
}

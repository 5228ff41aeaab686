//! Runtime values.
//!
//! A value is either an integer or opaque text. Which one a literal becomes is
//! decided once, by [`Value::from_literal`], and comparisons later match on the
//! tag pair instead of re-inspecting strings.

use std::fmt;

/// A runtime value: an integer or an opaque string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A literal made only of decimal digits.
    Int(i64),
    /// Anything else, kept verbatim.
    Text(String),
}

/// Returns `true` if `token` is non-empty and made only of ASCII digits.
///
/// A leading sign is not a digit, so `-5` is text.
#[inline]
pub fn is_integer_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl Value {
    /// Resolve a literal token.
    ///
    /// All-digit tokens that fit in `i64` become `Int`; everything else,
    /// including all-digit tokens that overflow, stays `Text`.
    pub fn from_literal(token: &str) -> Self {
        if is_integer_literal(token) {
            if let Ok(n) = token.parse::<i64>() {
                return Value::Int(n);
            }
        }
        Value::Text(token.to_string())
    }

    /// Create a text value without coercion.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Create an integer value.
    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Re-apply the all-digit rule to a stored value.
    ///
    /// Values captured by `i` are stored as raw text; comparisons see them
    /// through this coercion.
    #[must_use]
    pub fn coerced(&self) -> Value {
        match self {
            Value::Text(s) => Value::from_literal(s),
            Value::Int(_) => self.clone(),
        }
    }

    /// The integer payload, if this is `Int`.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Short tag name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests;

//! Error codes for every user-visible failure.
//!
//! Format: E#### where the first digit names the layer:
//! - E1xxx: command shape (parser, unknown command/operator)
//! - E6xxx: evaluation (variables, coercion, loops, input)
//! - E7xxx: script loading (extension, missing file, cycles, I/O)

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Command Errors (E1xxx)
    /// Missing command fields
    E1001,
    /// Extra input after a single-field command
    E1002,
    /// Unknown command keyword
    E1003,
    /// Unknown comparison operator
    E1004,

    // Evaluation Errors (E6xxx)
    /// Variable used before declaration
    E6001,
    /// Operand types incompatible with the operator
    E6002,
    /// Countdown decrement underflowed
    E6003,
    /// Loop iteration budget exhausted
    E6004,
    /// Cancelled by the host
    E6005,
    /// Input source closed while reading
    E6006,

    // Loader Errors (E7xxx)
    /// Wrong file extension
    E7001,
    /// Script file not found
    E7002,
    /// Circular inclusion
    E7003,
    /// Inclusion depth limit reached
    E7004,
    /// I/O failure while reading
    E7005,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E7001,
        ErrorCode::E7002,
        ErrorCode::E7003,
        ErrorCode::E7004,
        ErrorCode::E7005,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
            ErrorCode::E7004 => "E7004",
            ErrorCode::E7005 => "E7005",
        }
    }

    /// Check if this is a command-shape error (E1xxx range).
    pub fn is_command_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is an evaluation error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6002
                | ErrorCode::E6003
                | ErrorCode::E6004
                | ErrorCode::E6005
                | ErrorCode::E6006
        )
    }

    /// Check if this is a script loading error (E7xxx range).
    pub fn is_loader_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E7001
                | ErrorCode::E7002
                | ErrorCode::E7003
                | ErrorCode::E7004
                | ErrorCode::E7005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

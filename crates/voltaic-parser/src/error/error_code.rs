//! Error codes for the Voltaic diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Character-level errors
//! - `E1xx` - Statement structure errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unterminated string literal.
    ///
    /// A description was opened with a quote but never closed on the same line.
    E001,

    /// Unexpected character.
    ///
    /// A character was encountered that cannot start or continue any construct.
    E002,

    /// Unexpected token.
    ///
    /// The parser expected a node (component or port) at this position.
    E100,

    /// Incomplete connection.
    ///
    /// A wire `-` or a terminal name is not followed by a target node.
    E101,

    /// Unclosed component.
    ///
    /// A component was opened with `[`, `{` or `<` but the matching closing
    /// delimiter is missing or preceded by unexpected content.
    E102,

    /// Invalid setting.
    ///
    /// A `set` statement entry is not of the form `key=value`.
    E103,

    /// Invalid designator index.
    ///
    /// Designator indices start at 1; `R0` is rejected.
    E104,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E001 => "E001",
            Self::E002 => "E002",
            Self::E100 => "E100",
            Self::E101 => "E101",
            Self::E102 => "E102",
            Self::E103 => "E103",
            Self::E104 => "E104",
        }
    }

    /// Get a short description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Self::E001 => "unterminated string literal",
            Self::E002 => "unexpected character",
            Self::E100 => "unexpected token",
            Self::E101 => "incomplete connection",
            Self::E102 => "unclosed component",
            Self::E103 => "invalid setting",
            Self::E104 => "invalid designator index",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E104.to_string(), "E104");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E102.description(), "unclosed component");
    }
}

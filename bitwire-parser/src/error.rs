//! Parser errors
//!
//! Every variant carries the 1-based line number of the offending source
//! line. Parsing is fail-fast: the first malformed line abandons the whole
//! parse, no partial circuit is returned.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected token `{token}` at line {line}")]
    UnexpectedToken { line: usize, token: String },

    #[error("Unexpected second token `{token}` at line {line}")]
    UnexpectedSecondToken { line: usize, token: String },

    #[error("Unexpected end of line {line}: expected {expected}")]
    UnexpectedEnd { line: usize, expected: &'static str },

    #[error("Trailing token `{token}` at line {line}")]
    TrailingTokens { line: usize, token: String },

    #[error("Expected wire name at line {line}, got `{token}`")]
    ExpectedIdentifier { line: usize, token: String },

    #[error("Expected literal at line {line}, got `{token}`")]
    ExpectedLiteral { line: usize, token: String },

    #[error("Literal {value} at line {line} does not fit in 16 bits")]
    LiteralOutOfRange { line: usize, value: u64 },

    #[error("Shift amount {amount} at line {line} out of range (valid range: 0-15)")]
    ShiftOutOfRange { line: usize, amount: u64 },

    #[error("Duplicate definition of wire `{wire}` at line {line}")]
    DuplicateTarget { line: usize, wire: String },
}

impl ParseError {
    /// The 1-based source line this error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedSecondToken { line, .. }
            | ParseError::UnexpectedEnd { line, .. }
            | ParseError::TrailingTokens { line, .. }
            | ParseError::ExpectedIdentifier { line, .. }
            | ParseError::ExpectedLiteral { line, .. }
            | ParseError::LiteralOutOfRange { line, .. }
            | ParseError::ShiftOutOfRange { line, .. }
            | ParseError::DuplicateTarget { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::UnexpectedSecondToken {
            line: 3,
            token: "XOR".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected second token `XOR` at line 3");

        let err = ParseError::LiteralOutOfRange {
            line: 7,
            value: 70000,
        };
        assert_eq!(
            err.to_string(),
            "Literal 70000 at line 7 does not fit in 16 bits"
        );
    }

    #[test]
    fn test_line_accessor() {
        let err = ParseError::DuplicateTarget {
            line: 12,
            wire: "a".to_string(),
        };
        assert_eq!(err.line(), 12);
    }
}

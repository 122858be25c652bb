//! JSONPath error types

use thiserror::Error;

use crate::ast::QueryExpression;
use crate::tokens::Token;

/// Result type for JSONPath compilation
pub type JsonPathResult<T> = Result<T, JsonPathError>;

/// Errors raised while compiling query or filter text
///
/// Every variant carries the byte offset into the source text where the problem was
/// detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonPathError {
    #[error("unexpected {token} at position {position} while parsing {parsing}")]
    UnexpectedToken {
        token: Token,
        position: usize,
        parsing: &'static str,
    },

    #[error("unexpected end of input at position {position} while parsing {parsing}")]
    UnexpectedEndOfInput {
        position: usize,
        parsing: &'static str,
    },

    /// A comparison operand or function argument that must address at most one node
    /// uses a wildcard, slice, filter, multi-selector or descendant segment.
    #[error("query at position {position} must be a singular query")]
    MustBeSingularQuery { position: usize },

    #[error("illegal character {character:?} at position {position}: {reason}")]
    IllegalCharacter {
        character: char,
        position: usize,
        reason: &'static str,
    },

    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("invalid escape sequence at position {position}: {reason}")]
    InvalidEscapeSequence {
        position: usize,
        reason: &'static str,
    },

    #[error("malformed number `{literal}` at position {position}: {reason}")]
    InvalidNumber {
        literal: String,
        position: usize,
        reason: &'static str,
    },

    #[error("index or slice parameter at position {position} must be an integer, found `{literal}`")]
    IndicesMustBeIntegers { literal: String, position: usize },

    #[error("index {index} at position {position} is outside the range -(2^53-1)..=2^53-1")]
    IndexOutOfRange { index: i64, position: usize },

    #[error("unknown function `{name}` at position {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("expression at position {position} is nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, position: usize },
}

impl JsonPathError {
    /// Byte offset in the source text where the error was detected
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            JsonPathError::UnexpectedToken { position, .. }
            | JsonPathError::UnexpectedEndOfInput { position, .. }
            | JsonPathError::MustBeSingularQuery { position }
            | JsonPathError::IllegalCharacter { position, .. }
            | JsonPathError::UnterminatedString { position }
            | JsonPathError::InvalidEscapeSequence { position, .. }
            | JsonPathError::InvalidNumber { position, .. }
            | JsonPathError::IndicesMustBeIntegers { position, .. }
            | JsonPathError::IndexOutOfRange { position, .. }
            | JsonPathError::UnknownFunction { position, .. }
            | JsonPathError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Errors raised by accessors that demand exactly one match
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequiredValueError {
    #[error("query matched no values")]
    NoMatch,

    /// Carries the normalized paths of every match.
    #[error("query matched {} values where exactly one was required", .paths.len())]
    AmbiguousMatch { paths: Vec<QueryExpression> },
}

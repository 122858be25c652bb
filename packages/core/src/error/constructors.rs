//! Error constructor helpers shared by the parser modules

use super::types::JsonPathError;
use crate::tokens::{SpannedToken, Token};

/// Build the error for a token the grammar does not allow here
///
/// Running out of input is reported as [`JsonPathError::UnexpectedEndOfInput`] rather than
/// as an unexpected end-of-input token.
pub(crate) fn unexpected_token(token: &SpannedToken, parsing: &'static str) -> JsonPathError {
    match token.token {
        Token::EndOfInput => JsonPathError::UnexpectedEndOfInput {
            position: token.span.start,
            parsing,
        },
        _ => JsonPathError::UnexpectedToken {
            token: token.token.clone(),
            position: token.span.start,
            parsing,
        },
    }
}

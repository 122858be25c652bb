//! Index and slice selector parsing

use super::core::QueryParser;
use crate::ast::Selector;
use crate::error::{JsonPathError, JsonPathResult, unexpected_token};
use crate::tokens::Token;

/// Largest magnitude of an index or slice parameter (2^53 - 1)
pub(crate) const MAX_INDEX_MAGNITUDE: i64 = 9_007_199_254_740_991;

/// Consume an integer token usable as an index or slice parameter
pub(super) fn parse_index(parser: &mut QueryParser<'_>) -> JsonPathResult<i64> {
    let token = parser.advance();
    match token.token {
        Token::Integer(index) if (-MAX_INDEX_MAGNITUDE..=MAX_INDEX_MAGNITUDE).contains(&index) => {
            Ok(index)
        }
        Token::Integer(index) => Err(JsonPathError::IndexOutOfRange {
            index,
            position: token.span.start,
        }),
        Token::Decimal(_) => Err(JsonPathError::IndicesMustBeIntegers {
            literal: parser.source(token.span).to_owned(),
            position: token.span.start,
        }),
        _ => Err(unexpected_token(&token, "index")),
    }
}

fn parse_optional_index(parser: &mut QueryParser<'_>) -> JsonPathResult<Option<i64>> {
    match parser.peek().token {
        Token::Integer(_) | Token::Decimal(_) => parse_index(parser).map(Some),
        _ => Ok(None),
    }
}

/// Parse `:end:step` after an optional, already consumed, start
pub(super) fn parse_slice(
    parser: &mut QueryParser<'_>,
    start: Option<i64>,
) -> JsonPathResult<Selector> {
    parser.expect(&Token::Colon, "slice")?;
    let end = parse_optional_index(parser)?;
    let step = if parser.eat(&Token::Colon) {
        parse_optional_index(parser)?
    } else {
        None
    };
    Ok(Selector::slice(start, end, step))
}

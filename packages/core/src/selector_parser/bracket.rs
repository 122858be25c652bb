//! Bracketed selections: `[selector, selector, ...]`

use super::core::QueryParser;
use super::slice::{parse_index, parse_slice};
use crate::ast::{NonEmpty, Selector};
use crate::error::JsonPathResult;
use crate::filter_parser::parse_logical_or;
use crate::tokens::Token;

/// Parse the selectors after `[` up to and including the closing `]`
pub(super) fn parse_bracketed_selection(
    parser: &mut QueryParser<'_>,
) -> JsonPathResult<NonEmpty<Selector>> {
    let mut selectors = NonEmpty::single(parse_selector(parser)?);
    while parser.eat(&Token::Comma) {
        selectors.push(parse_selector(parser)?);
    }
    parser.expect(&Token::RightBracket, "bracketed selection")?;
    Ok(selectors)
}

fn parse_selector(parser: &mut QueryParser<'_>) -> JsonPathResult<Selector> {
    match &parser.peek().token {
        Token::String(name) => {
            let selector = Selector::name(name.as_str());
            parser.advance();
            Ok(selector)
        }
        Token::Star => {
            parser.advance();
            Ok(Selector::Wildcard)
        }
        Token::Integer(_) | Token::Decimal(_) => {
            let start = parse_index(parser)?;
            if parser.at(&Token::Colon) {
                parse_slice(parser, Some(start))
            } else {
                Ok(Selector::Index(start))
            }
        }
        Token::Colon => parse_slice(parser, None),
        Token::QuestionMark => {
            parser.advance();
            Ok(Selector::Filter(parse_logical_or(parser)?))
        }
        _ => parser.unexpected("selector"),
    }
}

//! Child and descendant segments in dot and bracket notation

use super::bracket::parse_bracketed_selection;
use super::core::QueryParser;
use crate::ast::{NonEmpty, Segment, Selector};
use crate::error::JsonPathResult;
use crate::tokens::Token;

/// Parse segments until a token that cannot start one
pub(crate) fn parse_segments(parser: &mut QueryParser<'_>) -> JsonPathResult<Vec<Segment>> {
    let mut segments = Vec::new();

    loop {
        match parser.peek().token {
            Token::Dot => {
                parser.advance();
                let selector = parse_shorthand(parser, "member name or `*` after `.`")?;
                segments.push(Segment::Child(NonEmpty::single(selector)));
            }
            Token::DotDot => {
                parser.advance();
                let selectors = if parser.at(&Token::LeftBracket) && parser.next_is_adjacent() {
                    parser.advance();
                    parse_bracketed_selection(parser)?
                } else {
                    NonEmpty::single(parse_shorthand(
                        parser,
                        "member name, `*` or `[` after `..`",
                    )?)
                };
                segments.push(Segment::Descendant(selectors));
            }
            Token::LeftBracket => {
                parser.advance();
                segments.push(Segment::Child(parse_bracketed_selection(parser)?));
            }
            _ => return Ok(segments),
        }
    }
}

/// Member-name shorthand or wildcard directly following `.` or `..`
fn parse_shorthand(parser: &mut QueryParser<'_>, parsing: &'static str) -> JsonPathResult<Selector> {
    if !parser.next_is_adjacent() {
        return parser.unexpected(parsing);
    }

    let selector = match &parser.peek().token {
        Token::Star => Selector::Wildcard,
        token => match token.member_name() {
            Some(name) => Selector::name(name),
            None => return parser.unexpected(parsing),
        },
    };
    parser.advance();
    Ok(selector)
}

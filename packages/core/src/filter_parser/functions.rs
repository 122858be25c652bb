//! Function extension calls and argument type checking
//!
//! `length`, `count` and `value` produce values; `match` and `search` produce logical
//! results and may only be used as tests.

use super::operands::{Operand, into_comparable, parse_operand};
use crate::ast::{ComparableExpression, FilterExpression, FunctionExpression, QueryExpression};
use crate::error::{JsonPathError, JsonPathResult, unexpected_token};
use crate::selector_parser::QueryParser;
use crate::tokens::{SpannedToken, Token};

/// Parse the argument list of `name`, whose identifier token was already consumed
pub(super) fn parse_function_call(
    parser: &mut QueryParser<'_>,
    name: &str,
    name_token: &SpannedToken,
) -> JsonPathResult<Operand> {
    if !(parser.at(&Token::LeftParen) && parser.next_is_adjacent()) {
        return parser.unexpected("function call (`(` must directly follow the function name)");
    }
    if !matches!(name, "length" | "count" | "value" | "match" | "search") {
        return Err(JsonPathError::UnknownFunction {
            name: name.to_owned(),
            position: name_token.span.start,
        });
    }

    parser.enter()?;
    parser.advance();

    let operand = match name {
        "length" => Operand::ValueFunction(FunctionExpression::Length(Box::new(
            parse_value_argument(parser)?,
        ))),
        "count" => Operand::ValueFunction(FunctionExpression::Count(parse_query_argument(parser)?)),
        "value" => Operand::ValueFunction(FunctionExpression::Value(parse_query_argument(parser)?)),
        _ => {
            let subject = parse_value_argument(parser)?;
            parser.expect(&Token::Comma, "second function argument")?;
            let pattern = parse_value_argument(parser)?;
            Operand::LogicalFunction(FilterExpression::Match {
                subject,
                pattern,
                full: name == "match",
            })
        }
    };

    parser.expect(&Token::RightParen, "function call")?;
    parser.leave();
    Ok(operand)
}

/// Argument of value type: a literal, a singular query or a value-typed function
fn parse_value_argument(parser: &mut QueryParser<'_>) -> JsonPathResult<ComparableExpression> {
    into_comparable(parse_operand(parser)?)
}

/// Argument of nodes type: any query
fn parse_query_argument(parser: &mut QueryParser<'_>) -> JsonPathResult<QueryExpression> {
    let parsed = parse_operand(parser)?;
    match parsed.operand {
        Operand::Query(query) => Ok(query),
        _ => Err(unexpected_token(
            &parsed.first,
            "function argument (a query is required)",
        )),
    }
}

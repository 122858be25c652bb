//! Comparison operands: queries, literals and function calls

use super::functions::parse_function_call;
use crate::ast::{ComparableExpression, FilterExpression, FunctionExpression, Literal, QueryExpression};
use crate::error::{JsonPathError, JsonPathResult, unexpected_token};
use crate::selector_parser::{QueryParser, parse_segments};
use crate::tokens::{SpannedToken, Token};

/// Operand before its role (comparison side or test) is known
pub(super) enum Operand {
    Query(QueryExpression),
    Literal(Literal),
    ValueFunction(FunctionExpression),
    /// `match()` or `search()`
    LogicalFunction(FilterExpression),
}

pub(super) struct ParsedOperand {
    pub(super) operand: Operand,
    /// First token of the operand, for error reporting
    pub(super) first: SpannedToken,
}

pub(super) fn parse_operand(parser: &mut QueryParser<'_>) -> JsonPathResult<ParsedOperand> {
    let first = parser.peek().clone();

    let operand = match &first.token {
        Token::At | Token::Dollar => {
            parser.advance();
            let segments = parse_segments(parser)?;
            if first.token == Token::At {
                Operand::Query(QueryExpression::Relative(segments))
            } else {
                Operand::Query(QueryExpression::Absolute(segments))
            }
        }
        Token::String(value) => {
            parser.advance();
            Operand::Literal(Literal::String(value.clone()))
        }
        Token::Integer(value) => {
            parser.advance();
            Operand::Literal(Literal::Int(*value))
        }
        Token::Decimal(value) => {
            parser.advance();
            Operand::Literal(Literal::Float(*value))
        }
        Token::True | Token::False => {
            parser.advance();
            Operand::Literal(Literal::Bool(first.token == Token::True))
        }
        Token::Null => {
            parser.advance();
            Operand::Literal(Literal::Null)
        }
        Token::Identifier(name) => {
            parser.advance();
            parse_function_call(parser, name, &first)?
        }
        _ => return Err(unexpected_token(&first, "comparable")),
    };

    Ok(ParsedOperand { operand, first })
}

/// Narrow an operand to something that may appear on either side of a comparison
pub(super) fn into_comparable(parsed: ParsedOperand) -> JsonPathResult<ComparableExpression> {
    match parsed.operand {
        Operand::Query(query) if query.is_singular() => Ok(ComparableExpression::Query(query)),
        Operand::Query(_) => Err(JsonPathError::MustBeSingularQuery {
            position: parsed.first.span.start,
        }),
        Operand::Literal(literal) => Ok(ComparableExpression::Literal(literal)),
        Operand::ValueFunction(function) => Ok(ComparableExpression::Function(function)),
        Operand::LogicalFunction(_) => Err(unexpected_token(
            &parsed.first,
            "comparable (match() and search() cannot be compared)",
        )),
    }
}

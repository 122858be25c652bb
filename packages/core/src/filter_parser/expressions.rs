//! Logical and comparison expression parsing

use super::operands::{Operand, into_comparable, parse_operand};
use crate::ast::{ComparisonOp, FilterExpression, NonEmpty};
use crate::error::{JsonPathResult, unexpected_token};
use crate::selector_parser::QueryParser;
use crate::tokens::Token;

/// `logical-and *( "||" logical-and )`
///
/// Consecutive operands at the same level are collected into one `Or` node; a single
/// operand is returned unwrapped.
pub(crate) fn parse_logical_or(parser: &mut QueryParser<'_>) -> JsonPathResult<FilterExpression> {
    parser.enter()?;
    let first = parse_logical_and(parser)?;
    let filter = if parser.at(&Token::Or) {
        let mut terms = NonEmpty::single(first);
        while parser.eat(&Token::Or) {
            terms.push(parse_logical_and(parser)?);
        }
        FilterExpression::Or(terms)
    } else {
        first
    };
    parser.leave();
    Ok(filter)
}

fn parse_logical_and(parser: &mut QueryParser<'_>) -> JsonPathResult<FilterExpression> {
    let first = parse_basic_expression(parser)?;
    if !parser.at(&Token::And) {
        return Ok(first);
    }
    let mut terms = NonEmpty::single(first);
    while parser.eat(&Token::And) {
        terms.push(parse_basic_expression(parser)?);
    }
    Ok(FilterExpression::And(terms))
}

fn parse_basic_expression(parser: &mut QueryParser<'_>) -> JsonPathResult<FilterExpression> {
    match parser.peek().token {
        Token::Not => {
            parser.advance();
            let negated = if parser.at(&Token::LeftParen) {
                parse_parenthesized(parser)?
            } else {
                parse_test(parser, "test expression after `!`")?
            };
            Ok(FilterExpression::Not(Box::new(negated)))
        }
        Token::LeftParen => parse_parenthesized(parser),
        _ => parse_comparison_or_test(parser),
    }
}

fn parse_parenthesized(parser: &mut QueryParser<'_>) -> JsonPathResult<FilterExpression> {
    parser.expect(&Token::LeftParen, "parenthesized expression")?;
    let inner = parse_logical_or(parser)?;
    parser.expect(&Token::RightParen, "parenthesized expression")?;
    Ok(inner)
}

/// A query (existence test) or a `match`/`search` call
fn parse_test(parser: &mut QueryParser<'_>, parsing: &'static str) -> JsonPathResult<FilterExpression> {
    let parsed = parse_operand(parser)?;
    match parsed.operand {
        Operand::Query(query) => Ok(FilterExpression::Existence(query)),
        Operand::LogicalFunction(filter) => Ok(filter),
        Operand::Literal(_) | Operand::ValueFunction(_) => {
            Err(unexpected_token(&parsed.first, parsing))
        }
    }
}

fn parse_comparison_or_test(parser: &mut QueryParser<'_>) -> JsonPathResult<FilterExpression> {
    let left = parse_operand(parser)?;

    let Some(op) = ComparisonOp::from_token(&parser.peek().token) else {
        return match left.operand {
            Operand::Query(query) => Ok(FilterExpression::Existence(query)),
            Operand::LogicalFunction(filter) => Ok(filter),
            Operand::Literal(_) | Operand::ValueFunction(_) => Err(unexpected_token(
                &left.first,
                "filter test (literals and value functions must be compared)",
            )),
        };
    };

    let left = into_comparable(left)?;
    parser.advance();
    let right = into_comparable(parse_operand(parser)?)?;
    Ok(FilterExpression::Comparison { op, left, right })
}

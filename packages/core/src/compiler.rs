//! Compilation entry points
//!
//! Each call lexes and parses the full text and either returns a complete tree or the
//! first error encountered.

use crate::ast::{FilterExpression, QueryExpression};
use crate::config::CompilerConfig;
use crate::error::{JsonPathError, JsonPathResult};
use crate::selector_parser::QueryParser;
use crate::tokenizer::Lexer;

/// Compile a root query such as `$.store.book[0]`
///
/// # Errors
///
/// Returns the first lexical or syntactic error in `text`.
pub fn compile_query(text: &str) -> JsonPathResult<QueryExpression> {
    compile_query_with(text, &CompilerConfig::default())
}

/// Compile a root query with explicit limits
///
/// # Errors
///
/// Returns the first lexical or syntactic error in `text`.
pub fn compile_query_with(text: &str, config: &CompilerConfig) -> JsonPathResult<QueryExpression> {
    let result = parser_for(text, config).and_then(|mut parser| parser.parse_query());
    log_outcome("query", text, &result);
    result
}

/// Compile a standalone filter expression such as `@.price < 10 && @.isbn`
///
/// # Errors
///
/// Returns the first lexical or syntactic error in `text`.
pub fn compile_filter(text: &str) -> JsonPathResult<FilterExpression> {
    compile_filter_with(text, &CompilerConfig::default())
}

/// Compile a standalone filter expression with explicit limits
///
/// # Errors
///
/// Returns the first lexical or syntactic error in `text`.
pub fn compile_filter_with(
    text: &str,
    config: &CompilerConfig,
) -> JsonPathResult<FilterExpression> {
    let result = parser_for(text, config).and_then(|mut parser| parser.parse_filter());
    log_outcome("filter", text, &result);
    result
}

fn parser_for<'a>(text: &'a str, config: &CompilerConfig) -> JsonPathResult<QueryParser<'a>> {
    reject_surrounding_whitespace(text)?;
    let tokens = Lexer::new(text).tokenize()?;
    Ok(QueryParser::new(text, tokens, config))
}

fn reject_surrounding_whitespace(text: &str) -> JsonPathResult<()> {
    let is_whitespace = |c: &char| matches!(c, ' ' | '\t' | '\n' | '\r');

    if let Some(character) = text.chars().next().filter(is_whitespace) {
        return Err(JsonPathError::IllegalCharacter {
            character,
            position: 0,
            reason: "leading whitespace is not allowed",
        });
    }
    if let Some(character) = text.chars().next_back().filter(is_whitespace) {
        return Err(JsonPathError::IllegalCharacter {
            character,
            position: text.len() - character.len_utf8(),
            reason: "trailing whitespace is not allowed",
        });
    }
    Ok(())
}

fn log_outcome<T>(kind: &str, text: &str, result: &JsonPathResult<T>) {
    match result {
        Ok(_) => log::trace!("compiled JSONPath {kind} {text:?}"),
        Err(error) => log::debug!("failed to compile JSONPath {kind} {text:?}: {error}"),
    }
}

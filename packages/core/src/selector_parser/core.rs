//! Core parser state: token lookahead, expectations and the nesting guard

use std::collections::VecDeque;

use super::segments::parse_segments;
use crate::ast::{FilterExpression, QueryExpression};
use crate::config::CompilerConfig;
use crate::error::{JsonPathError, JsonPathResult, unexpected_token};
use crate::filter_parser::parse_logical_or;
use crate::tokens::{Span, SpannedToken, Token};

/// Parser over a complete token queue with one token of lookahead
pub(crate) struct QueryParser<'input> {
    input: &'input str,
    tokens: VecDeque<SpannedToken>,
    end: SpannedToken,
    previous_end: usize,
    depth: usize,
    max_depth: usize,
}

impl<'input> QueryParser<'input> {
    #[inline]
    pub(crate) fn new(
        input: &'input str,
        tokens: VecDeque<SpannedToken>,
        config: &CompilerConfig,
    ) -> Self {
        let end = SpannedToken::new(Token::EndOfInput, Span::new(input.len(), input.len()));
        Self {
            input,
            tokens,
            end,
            previous_end: 0,
            depth: 0,
            max_depth: config.max_nesting_depth,
        }
    }

    /// Parse `$` followed by segments, consuming the whole input
    pub(crate) fn parse_query(&mut self) -> JsonPathResult<QueryExpression> {
        self.expect(&Token::Dollar, "query root `$`")?;
        let segments = parse_segments(self)?;
        self.expect_end("query")?;
        Ok(QueryExpression::Absolute(segments))
    }

    /// Parse a standalone logical expression, consuming the whole input
    pub(crate) fn parse_filter(&mut self) -> JsonPathResult<FilterExpression> {
        let filter = parse_logical_or(self)?;
        self.expect_end("filter expression")?;
        Ok(filter)
    }

    #[inline]
    pub(crate) fn peek(&self) -> &SpannedToken {
        self.tokens.front().unwrap_or(&self.end)
    }

    /// Consume the next token; at the end of input keeps returning end-of-input
    pub(crate) fn advance(&mut self) -> SpannedToken {
        match self.tokens.pop_front() {
            Some(token) if token.token == Token::EndOfInput => {
                self.tokens.push_front(token.clone());
                token
            }
            Some(token) => {
                self.previous_end = token.span.end;
                token
            }
            None => self.end.clone(),
        }
    }

    #[inline]
    pub(crate) fn at(&self, token: &Token) -> bool {
        self.peek().token == *token
    }

    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        if self.at(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(
        &mut self,
        token: &Token,
        parsing: &'static str,
    ) -> JsonPathResult<SpannedToken> {
        if self.at(token) {
            Ok(self.advance())
        } else {
            self.unexpected(parsing)
        }
    }

    /// Fail on the next token
    pub(crate) fn unexpected<T>(&self, parsing: &'static str) -> JsonPathResult<T> {
        Err(unexpected_token(self.peek(), parsing))
    }

    pub(crate) fn expect_end(&self, parsing: &'static str) -> JsonPathResult<()> {
        if self.at(&Token::EndOfInput) {
            Ok(())
        } else {
            self.unexpected(parsing)
        }
    }

    /// No whitespace between the last consumed token and the next one
    #[inline]
    pub(crate) fn next_is_adjacent(&self) -> bool {
        self.peek().span.start == self.previous_end
    }

    #[inline]
    pub(crate) fn source(&self, span: Span) -> &'input str {
        &self.input[span.start..span.end]
    }

    /// Enter one level of expression nesting
    pub(crate) fn enter(&mut self) -> JsonPathResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(JsonPathError::NestingTooDeep {
                limit: self.max_depth,
                position: self.peek().span.start,
            });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

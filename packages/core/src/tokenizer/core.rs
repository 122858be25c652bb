//! Core lexer state and the main tokenization loop

use std::collections::VecDeque;

use super::{characters, numbers, operators, strings};
use crate::error::JsonPathResult;
use crate::tokens::{Span, SpannedToken, Token};

/// Single-pass lexer over JSONPath source text
pub struct Lexer<'input> {
    pub(super) input: &'input str,
    pub(super) position: usize,
    tokens: VecDeque<SpannedToken>,
}

impl<'input> Lexer<'input> {
    /// Create new lexer positioned at the start of `input`
    #[inline]
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            position: 0,
            tokens: VecDeque::new(),
        }
    }

    /// Tokenize the whole input
    ///
    /// The returned queue always ends with exactly one [`Token::EndOfInput`].
    pub fn tokenize(mut self) -> JsonPathResult<VecDeque<SpannedToken>> {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => {
                    self.bump();
                }
                '\'' | '"' => strings::scan_string(&mut self, ch)?,
                c if c.is_ascii_digit() || c == '-' => numbers::scan_number(&mut self)?,
                '=' | '!' | '<' | '>' | '&' | '|' => operators::scan_operator(&mut self),
                _ => characters::scan_character(&mut self),
            }
        }

        let end = self.position;
        self.tokens
            .push_back(SpannedToken::new(Token::EndOfInput, Span::new(end, end)));
        Ok(self.tokens)
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Character `n` positions past the next one
    #[inline]
    pub(super) fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.position..].chars().nth(n)
    }

    #[inline]
    pub(super) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character if it equals `expected`
    #[inline]
    pub(super) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub(super) fn bump_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Emit a token spanning from `start` to the current position
    #[inline]
    pub(super) fn push(&mut self, token: Token, start: usize) {
        self.tokens
            .push_back(SpannedToken::new(token, Span::new(start, self.position)));
    }
}

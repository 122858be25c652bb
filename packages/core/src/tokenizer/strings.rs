//! String literal tokenization with escape sequence handling
//!
//! Handles single- and double-quoted literals, JSON-style escapes and UTF-16 surrogate
//! pairs in `\uXXXX` escapes.

use super::core::Lexer;
use crate::error::{JsonPathError, JsonPathResult};
use crate::tokens::Token;

/// Scan a quoted string starting at the opening `quote`
pub(super) fn scan_string(lexer: &mut Lexer<'_>, quote: char) -> JsonPathResult<()> {
    let start = lexer.position;
    lexer.bump();
    let mut value = String::new();

    loop {
        let char_start = lexer.position;
        let Some(ch) = lexer.bump() else {
            return Err(JsonPathError::UnterminatedString { position: start });
        };
        match ch {
            c if c == quote => break,
            '\\' => value.push(scan_escape(lexer, quote, char_start)?),
            c if c <= '\u{1f}' => {
                return Err(JsonPathError::IllegalCharacter {
                    character: c,
                    position: char_start,
                    reason: "control characters must be escaped in string literals",
                });
            }
            c => value.push(c),
        }
    }

    lexer.push(Token::String(value), start);
    Ok(())
}

/// Decode the escape following a backslash at `position`
fn scan_escape(lexer: &mut Lexer<'_>, quote: char, position: usize) -> JsonPathResult<char> {
    let invalid = |reason| JsonPathError::InvalidEscapeSequence { position, reason };

    match lexer.bump() {
        Some('b') => Ok('\u{08}'),
        Some('f') => Ok('\u{0c}'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('/') => Ok('/'),
        Some('\\') => Ok('\\'),
        Some('\'') if quote == '\'' => Ok('\''),
        Some('"') if quote == '"' => Ok('"'),
        Some('u') => scan_unicode_escape(lexer, position),
        Some(_) => Err(invalid("unsupported escape character")),
        None => Err(invalid("escape at end of input")),
    }
}

fn scan_unicode_escape(lexer: &mut Lexer<'_>, position: usize) -> JsonPathResult<char> {
    let invalid = |reason| JsonPathError::InvalidEscapeSequence { position, reason };

    let high = scan_hex4(lexer, position)?;
    let code = match high {
        0xD800..=0xDBFF => {
            if !(lexer.eat('\\') && lexer.eat('u')) {
                return Err(invalid("high surrogate must be followed by a \\u low surrogate"));
            }
            let low = scan_hex4(lexer, position)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(invalid("high surrogate must be followed by a low surrogate"));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(invalid("unpaired low surrogate")),
        other => other,
    };

    char::from_u32(code).ok_or_else(|| invalid("not a Unicode scalar value"))
}

fn scan_hex4(lexer: &mut Lexer<'_>, position: usize) -> JsonPathResult<u32> {
    let mut code = 0u32;
    for _ in 0..4 {
        let digit = lexer.bump().and_then(|c| c.to_digit(16)).ok_or(
            JsonPathError::InvalidEscapeSequence {
                position,
                reason: "expected four hexadecimal digits after \\u",
            },
        )?;
        code = code * 16 + digit;
    }
    Ok(code)
}

//! Number literal tokenization
//!
//! Follows the RFC 9535 number grammar: no leading zeros, a digit must follow `-`,
//! optional fraction and exponent.

use super::core::Lexer;
use crate::error::{JsonPathError, JsonPathResult};
use crate::tokens::Token;

pub(super) fn scan_number(lexer: &mut Lexer<'_>) -> JsonPathResult<()> {
    let start = lexer.position;
    let negative = lexer.eat('-');

    if !lexer.peek().is_some_and(|c| c.is_ascii_digit()) {
        return Err(malformed(lexer, start, "expected a digit after '-'"));
    }

    let int_start = lexer.position;
    lexer.bump_while(|c| c.is_ascii_digit());
    let int_part = &lexer.input[int_start..lexer.position];
    if int_part.len() > 1 && int_part.starts_with('0') {
        return Err(malformed(lexer, start, "leading zeros are not allowed"));
    }

    let mut is_decimal = false;

    if lexer.peek() == Some('.') && lexer.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
        lexer.bump();
        lexer.bump_while(|c| c.is_ascii_digit());
        is_decimal = true;
    }

    if matches!(lexer.peek(), Some('e' | 'E')) {
        let exponent_follows = match lexer.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => lexer.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if exponent_follows {
            lexer.bump();
            if !lexer.eat('+') {
                lexer.eat('-');
            }
            lexer.bump_while(|c| c.is_ascii_digit());
            is_decimal = true;
        }
    }

    let literal = &lexer.input[start..lexer.position];
    // `-0` is a valid number but not a valid index.
    let token = if is_decimal || (negative && int_part == "0") {
        let value = literal
            .parse::<f64>()
            .map_err(|_| malformed(lexer, start, "not a valid number"))?;
        if !value.is_finite() {
            return Err(malformed(lexer, start, "number is out of range"));
        }
        Token::Decimal(value)
    } else {
        literal
            .parse::<i64>()
            .map(Token::Integer)
            .map_err(|_| malformed(lexer, start, "integer does not fit in 64 bits"))?
    };

    lexer.push(token, start);
    Ok(())
}

fn malformed(lexer: &Lexer<'_>, start: usize, reason: &'static str) -> JsonPathError {
    JsonPathError::InvalidNumber {
        literal: lexer.input[start..lexer.position].to_owned(),
        position: start,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use crate::error::JsonPathError;
    use crate::tokenizer::Lexer;
    use crate::tokens::Token;

    fn first(input: &str) -> Token {
        Lexer::new(input)
            .tokenize()
            .map(|mut tokens| tokens.pop_front().map(|t| t.token))
            .ok()
            .flatten()
            .unwrap_or(Token::EndOfInput)
    }

    #[test]
    fn test_integers_and_decimals() {
        assert_eq!(first("42"), Token::Integer(42));
        assert_eq!(first("-7"), Token::Integer(-7));
        assert_eq!(first("1.5"), Token::Decimal(1.5));
        assert_eq!(first("1e3"), Token::Decimal(1000.0));
        assert_eq!(first("2E-2"), Token::Decimal(0.02));
        assert_eq!(first("-0"), Token::Decimal(-0.0));
    }

    #[test]
    fn test_rejects_decimals_beyond_f64_range() {
        assert_eq!(
            Lexer::new("1e400").tokenize().map(|_| ()),
            Err(JsonPathError::InvalidNumber {
                literal: "1e400".into(),
                position: 0,
                reason: "number is out of range",
            })
        );
        assert!(Lexer::new("-1.5E+999").tokenize().is_err());
        assert_eq!(first("1e-400"), Token::Decimal(0.0));
    }

    #[test]
    fn test_rejects_leading_zeros_and_bare_minus() {
        assert!(Lexer::new("01").tokenize().is_err());
        assert!(Lexer::new("-01").tokenize().is_err());
        assert!(Lexer::new("-").tokenize().is_err());
        assert!(Lexer::new("-a").tokenize().is_err());
    }

    #[test]
    fn test_dot_without_fraction_digits_is_separate_token() {
        let tokens: Vec<_> = Lexer::new("1.a")
            .tokenize()
            .expect("tokenizes")
            .into_iter()
            .map(|t| t.token)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Integer(1),
                Token::Dot,
                Token::Identifier("a".into()),
                Token::EndOfInput
            ]
        );
    }
}

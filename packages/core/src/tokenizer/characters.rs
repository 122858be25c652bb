//! Single-character punctuation, identifiers and keywords

use super::core::Lexer;
use crate::tokens::Token;

/// First character of a member-name shorthand or function name
#[inline]
pub(crate) fn is_name_first(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

#[inline]
pub(crate) fn is_name_char(c: char) -> bool {
    is_name_first(c) || c.is_ascii_digit()
}

pub(super) fn scan_character(lexer: &mut Lexer<'_>) {
    let start = lexer.position;
    let Some(ch) = lexer.peek() else {
        return;
    };

    if is_name_first(ch) {
        lexer.bump_while(is_name_char);
        let token = match &lexer.input[start..lexer.position] {
            "true" => Token::True,
            "false" => Token::False,
            "null" => Token::Null,
            name => Token::Identifier(name.to_owned()),
        };
        lexer.push(token, start);
        return;
    }

    lexer.bump();
    let token = match ch {
        '$' => Token::Dollar,
        '@' => Token::At,
        '[' => Token::LeftBracket,
        ']' => Token::RightBracket,
        '(' => Token::LeftParen,
        ')' => Token::RightParen,
        ':' => Token::Colon,
        ',' => Token::Comma,
        '*' => Token::Star,
        '?' => Token::QuestionMark,
        '.' if lexer.eat('.') => Token::DotDot,
        '.' => Token::Dot,
        other => Token::Unknown(other),
    };
    lexer.push(token, start);
}

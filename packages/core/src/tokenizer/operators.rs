//! Comparison and logical operator tokenization

use super::core::Lexer;
use crate::tokens::Token;

/// Scan `==`, `!=`, `<`, `<=`, `>`, `>=`, `!`, `&&` or `||`
///
/// A lone `=`, `&` or `|` becomes [`Token::Unknown`] and is rejected by the parser.
pub(super) fn scan_operator(lexer: &mut Lexer<'_>) {
    let start = lexer.position;
    let Some(ch) = lexer.bump() else {
        return;
    };

    let token = match ch {
        '=' if lexer.eat('=') => Token::Equal,
        '!' if lexer.eat('=') => Token::NotEqual,
        '!' => Token::Not,
        '<' if lexer.eat('=') => Token::LessEq,
        '<' => Token::Less,
        '>' if lexer.eat('=') => Token::GreaterEq,
        '>' => Token::Greater,
        '&' if lexer.eat('&') => Token::And,
        '|' if lexer.eat('|') => Token::Or,
        other => Token::Unknown(other),
    };
    lexer.push(token, start);
}

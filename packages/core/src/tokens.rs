//! Token definitions for JSONPath lexical analysis
//!
//! Every token produced by the [`Lexer`](crate::Lexer) carries the byte span it was read
//! from so parse errors can point back into the source text.

use std::fmt;

/// Tokens for JSONPath lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Structural tokens
    /// Root identifier (`$`)
    Dollar,
    /// Current node identifier (`@`)
    At,
    /// Child shorthand (`.`)
    Dot,
    /// Descendant shorthand (`..`)
    DotDot,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Slice separator (`:`)
    Colon,
    /// Selector separator (`,`)
    Comma,
    /// Wildcard (`*`)
    Star,
    /// Filter selector introducer (`?`)
    QuestionMark,

    // Logical operators
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,

    // Comparison operators
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,

    // Literals
    /// Member-name shorthand or function name
    Identifier(String),
    /// Quoted string with escapes already decoded
    String(String),
    /// Number without fraction or exponent
    Integer(i64),
    /// Number with fraction or exponent, or `-0`
    Decimal(f64),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    /// A character that starts no valid token
    Unknown(char),
    /// End of input
    EndOfInput,
}

impl Token {
    /// Check if token is a comparison operator
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::NotEqual
                | Token::Less
                | Token::LessEq
                | Token::Greater
                | Token::GreaterEq
        )
    }

    /// Member name carried by this token when it may follow `.` or `..`
    ///
    /// The keywords `true`, `false` and `null` are valid member names in shorthand position.
    #[must_use]
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            Token::True => Some("true"),
            Token::False => Some("false"),
            Token::Null => Some("null"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dollar => f.write_str("`$`"),
            Token::At => f.write_str("`@`"),
            Token::Dot => f.write_str("`.`"),
            Token::DotDot => f.write_str("`..`"),
            Token::LeftBracket => f.write_str("`[`"),
            Token::RightBracket => f.write_str("`]`"),
            Token::LeftParen => f.write_str("`(`"),
            Token::RightParen => f.write_str("`)`"),
            Token::Colon => f.write_str("`:`"),
            Token::Comma => f.write_str("`,`"),
            Token::Star => f.write_str("`*`"),
            Token::QuestionMark => f.write_str("`?`"),
            Token::Not => f.write_str("`!`"),
            Token::And => f.write_str("`&&`"),
            Token::Or => f.write_str("`||`"),
            Token::Equal => f.write_str("`==`"),
            Token::NotEqual => f.write_str("`!=`"),
            Token::Less => f.write_str("`<`"),
            Token::LessEq => f.write_str("`<=`"),
            Token::Greater => f.write_str("`>`"),
            Token::GreaterEq => f.write_str("`>=`"),
            Token::Identifier(name) => write!(f, "identifier `{name}`"),
            Token::String(value) => write!(f, "string {value:?}"),
            Token::Integer(value) => write!(f, "integer `{value}`"),
            Token::Decimal(value) => write!(f, "number `{value:?}`"),
            Token::True => f.write_str("`true`"),
            Token::False => f.write_str("`false`"),
            Token::Null => f.write_str("`null`"),
            Token::Unknown(ch) => write!(f, "character {ch:?}"),
            Token::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Byte range of a token in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
}

impl Span {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A token together with its source span
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    #[inline]
    #[must_use]
    pub const fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

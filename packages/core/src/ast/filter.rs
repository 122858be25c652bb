use std::fmt;

use super::{ComparableExpression, NonEmpty, QueryExpression};
use crate::tokens::Token;

/// Comparison operators usable in filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessOrEqual => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterOrEqual => ">=",
        }
    }

    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Equal => Some(ComparisonOp::Equal),
            Token::NotEqual => Some(ComparisonOp::NotEqual),
            Token::Less => Some(ComparisonOp::Less),
            Token::LessEq => Some(ComparisonOp::LessOrEqual),
            Token::Greater => Some(ComparisonOp::Greater),
            Token::GreaterEq => Some(ComparisonOp::GreaterOrEqual),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Boolean predicate of a filter selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterExpression {
    /// True when the query selects at least one node
    Existence(QueryExpression),
    Comparison {
        op: ComparisonOp,
        left: ComparableExpression,
        right: ComparableExpression,
    },
    Not(Box<FilterExpression>),
    And(NonEmpty<FilterExpression>),
    Or(NonEmpty<FilterExpression>),
    /// `match(subject, pattern)` when `full`, otherwise `search(subject, pattern)`
    Match {
        subject: ComparableExpression,
        pattern: ComparableExpression,
        full: bool,
    },
}

impl FilterExpression {
    #[must_use]
    pub fn comparison(
        op: ComparisonOp,
        left: impl Into<ComparableExpression>,
        right: impl Into<ComparableExpression>,
    ) -> Self {
        FilterExpression::Comparison {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    /// Whether this expression renders as a test without surrounding parentheses after `!`
    fn is_test(&self) -> bool {
        matches!(
            self,
            FilterExpression::Existence(_) | FilterExpression::Match { .. }
        )
    }
}

fn write_terms(
    f: &mut fmt::Formatter<'_>,
    terms: &NonEmpty<FilterExpression>,
    separator: &str,
    needs_parens: impl Fn(&FilterExpression) -> bool,
) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if needs_parens(term) {
            write!(f, "({term})")?;
        } else {
            write!(f, "{term}")?;
        }
    }
    Ok(())
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Existence(query) => write!(f, "{query}"),
            FilterExpression::Comparison { op, left, right } => write!(f, "{left} {op} {right}"),
            FilterExpression::Not(inner) if inner.is_test() => write!(f, "!{inner}"),
            FilterExpression::Not(inner) => write!(f, "!({inner})"),
            FilterExpression::And(terms) => write_terms(f, terms, " && ", |term| {
                matches!(term, FilterExpression::And(_) | FilterExpression::Or(_))
            }),
            FilterExpression::Or(terms) => {
                write_terms(f, terms, " || ", |term| matches!(term, FilterExpression::Or(_)))
            }
            FilterExpression::Match {
                subject,
                pattern,
                full,
            } => {
                let name = if *full { "match" } else { "search" };
                write!(f, "{name}({subject}, {pattern})")
            }
        }
    }
}

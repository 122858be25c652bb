use std::fmt;

use super::{Literal, QueryExpression};

/// An operand of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComparableExpression {
    Literal(Literal),
    /// Always a singular query
    Query(QueryExpression),
    Function(FunctionExpression),
}

/// Value-typed function extensions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionExpression {
    /// `length(v)`: characters of a string, elements of an array, members of an object
    Length(Box<ComparableExpression>),
    /// `count(q)`: number of nodes selected by `q`
    Count(QueryExpression),
    /// `value(q)`: the value of the single node selected by `q`
    Value(QueryExpression),
}

impl fmt::Display for ComparableExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparableExpression::Literal(literal) => write!(f, "{literal}"),
            ComparableExpression::Query(query) => write!(f, "{query}"),
            ComparableExpression::Function(function) => write!(f, "{function}"),
        }
    }
}

impl fmt::Display for FunctionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionExpression::Length(argument) => write!(f, "length({argument})"),
            FunctionExpression::Count(query) => write!(f, "count({query})"),
            FunctionExpression::Value(query) => write!(f, "value({query})"),
        }
    }
}

impl From<Literal> for ComparableExpression {
    fn from(literal: Literal) -> Self {
        ComparableExpression::Literal(literal)
    }
}

impl From<QueryExpression> for ComparableExpression {
    fn from(query: QueryExpression) -> Self {
        ComparableExpression::Query(query)
    }
}

impl From<FunctionExpression> for ComparableExpression {
    fn from(function: FunctionExpression) -> Self {
        ComparableExpression::Function(function)
    }
}

impl From<bool> for ComparableExpression {
    fn from(value: bool) -> Self {
        ComparableExpression::Literal(value.into())
    }
}

impl From<i64> for ComparableExpression {
    fn from(value: i64) -> Self {
        ComparableExpression::Literal(value.into())
    }
}

impl From<i32> for ComparableExpression {
    fn from(value: i32) -> Self {
        ComparableExpression::Literal(value.into())
    }
}

impl From<f64> for ComparableExpression {
    fn from(value: f64) -> Self {
        ComparableExpression::Literal(value.into())
    }
}

impl From<&str> for ComparableExpression {
    fn from(value: &str) -> Self {
        ComparableExpression::Literal(value.into())
    }
}

impl From<String> for ComparableExpression {
    fn from(value: String) -> Self {
        ComparableExpression::Literal(value.into())
    }
}

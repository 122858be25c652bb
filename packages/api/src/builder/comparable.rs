//! Comparison, function and existence builders

use jsonpath_query_core::{
    ComparableExpression, ComparisonOp, FilterExpression, FunctionExpression, Literal,
    QueryExpression,
};

/// Build comparisons and function calls from an operand
pub trait ComparableBuilder: Into<ComparableExpression> + Sized {
    fn is_equal_to(self, other: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::comparison(ComparisonOp::Equal, self, other)
    }

    fn is_not_equal_to(self, other: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::comparison(ComparisonOp::NotEqual, self, other)
    }

    fn is_less_than(self, other: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::comparison(ComparisonOp::Less, self, other)
    }

    fn is_less_or_equal(self, other: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::comparison(ComparisonOp::LessOrEqual, self, other)
    }

    fn is_greater_than(self, other: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::comparison(ComparisonOp::Greater, self, other)
    }

    fn is_greater_or_equal(self, other: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::comparison(ComparisonOp::GreaterOrEqual, self, other)
    }

    /// `length(self)`
    fn length(self) -> ComparableExpression {
        FunctionExpression::Length(Box::new(self.into())).into()
    }

    /// `match(self, pattern)`
    fn matches(self, pattern: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::Match {
            subject: self.into(),
            pattern: pattern.into(),
            full: true,
        }
    }

    /// `search(self, pattern)`
    fn search(self, pattern: impl Into<ComparableExpression>) -> FilterExpression {
        FilterExpression::Match {
            subject: self.into(),
            pattern: pattern.into(),
            full: false,
        }
    }
}

impl ComparableBuilder for ComparableExpression {}
impl ComparableBuilder for QueryExpression {}
impl ComparableBuilder for FunctionExpression {}
impl ComparableBuilder for Literal {}

/// Tests and functions over the nodes a query selects
pub trait NodeListBuilder: Sized {
    /// Existence test
    fn exists(self) -> FilterExpression;

    /// `count(self)`
    fn count(self) -> ComparableExpression;

    /// `value(self)`
    fn value(self) -> ComparableExpression;
}

impl NodeListBuilder for QueryExpression {
    fn exists(self) -> FilterExpression {
        FilterExpression::Existence(self)
    }

    fn count(self) -> ComparableExpression {
        FunctionExpression::Count(self).into()
    }

    fn value(self) -> ComparableExpression {
        FunctionExpression::Value(self).into()
    }
}

//! Logical combinators for filters

use jsonpath_query_core::{FilterExpression, NonEmpty};

/// Combine filters with `&&`, `||` and `!`
pub trait FilterBuilder: Sized {
    /// `self && other`; existing `&&` lists on either side are extended rather than nested
    fn and(self, other: FilterExpression) -> FilterExpression;

    /// `self || other`; existing `||` lists on either side are extended rather than nested
    fn or(self, other: FilterExpression) -> FilterExpression;

    /// `!self`; negating a negation unwraps it
    fn negate(self) -> FilterExpression;
}

impl FilterBuilder for FilterExpression {
    fn and(self, other: FilterExpression) -> FilterExpression {
        let mut terms = match self {
            FilterExpression::And(terms) => terms,
            single => NonEmpty::single(single),
        };
        match other {
            FilterExpression::And(more) => more.into_iter().for_each(|term| terms.push(term)),
            single => terms.push(single),
        }
        FilterExpression::And(terms)
    }

    fn or(self, other: FilterExpression) -> FilterExpression {
        let mut terms = match self {
            FilterExpression::Or(terms) => terms,
            single => NonEmpty::single(single),
        };
        match other {
            FilterExpression::Or(more) => more.into_iter().for_each(|term| terms.push(term)),
            single => terms.push(single),
        }
        FilterExpression::Or(terms)
    }

    fn negate(self) -> FilterExpression {
        match self {
            FilterExpression::Not(inner) => *inner,
            other => FilterExpression::Not(Box::new(other)),
        }
    }
}

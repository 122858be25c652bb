//! Filter predicate evaluation

use super::Evaluator;
use super::comparison::{Atom, compare};
use super::functions::matches;
use crate::ast::{ComparableExpression, FilterExpression, QueryExpression};
use crate::value::JsonValue;

impl<'v, V: JsonValue> Evaluator<'v, V> {
    /// Evaluate `filter` with `current` bound to `@`
    pub(crate) fn test(&self, filter: &FilterExpression, current: &'v V) -> bool {
        match filter {
            FilterExpression::Existence(query) => !self.query(query, current).is_empty(),
            FilterExpression::Comparison { op, left, right } => compare(
                *op,
                self.comparable(left, current),
                self.comparable(right, current),
            ),
            FilterExpression::Not(inner) => !self.test(inner, current),
            FilterExpression::And(terms) => terms.iter().all(|term| self.test(term, current)),
            FilterExpression::Or(terms) => terms.iter().any(|term| self.test(term, current)),
            FilterExpression::Match {
                subject,
                pattern,
                full,
            } => matches(
                self.comparable(subject, current),
                self.comparable(pattern, current),
                *full,
            ),
        }
    }

    /// Evaluate an operand; `None` is Nothing
    pub(super) fn comparable<'a>(
        &self,
        expression: &'a ComparableExpression,
        current: &'v V,
    ) -> Option<Atom<'a, V>>
    where
        'v: 'a,
    {
        match expression {
            ComparableExpression::Literal(literal) => Some(Atom::from_literal(literal)),
            ComparableExpression::Query(query) => self.single_value(query, current).map(Atom::of),
            ComparableExpression::Function(function) => self.function(function, current),
        }
    }

    /// The value of the only node `query` selects, or `None` for zero or several nodes
    pub(super) fn single_value(&self, query: &QueryExpression, current: &'v V) -> Option<&'v V> {
        let nodes = self.query(query, current);
        match nodes.as_slice() {
            [node] => Some(node.value),
            _ => None,
        }
    }
}

//! Tree-walking evaluation of compiled queries
//!
//! Evaluation never fails: selectors that do not apply to a value simply select
//! nothing. Results preserve document order as defined by RFC 9535 (array index order,
//! object insertion order, pre-order for descendants) and may contain the same value more
//! than once.

mod arrays;
mod comparison;
mod filters;
mod functions;
mod regex_cache;
mod segments;
mod selectors;

use crate::ast::{FilterExpression, QueryExpression};
use crate::error::RequiredValueError;
use crate::node::JsonNode;
use crate::normalized_paths::Trail;
use crate::value::JsonValue;

pub(crate) use arrays::{normalize_index, slice_indices};

/// A selected value and the trail that reached it
pub(crate) struct Located<'v, V> {
    pub(crate) value: &'v V,
    pub(crate) trail: Trail,
}

impl<V> Clone for Located<'_, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            trail: self.trail.clone(),
        }
    }
}

impl<'v, V> Located<'v, V> {
    fn into_node(self) -> JsonNode<'v, V> {
        JsonNode::new(self.value, self.trail.to_query())
    }
}

/// Evaluation context bound to one document root
pub(crate) struct Evaluator<'v, V> {
    root: &'v V,
}

impl<'v, V: JsonValue> Evaluator<'v, V> {
    #[inline]
    pub(crate) fn new(root: &'v V) -> Self {
        Self { root }
    }

    /// Run `query`; absolute queries start at the root, relative ones at `current`
    pub(crate) fn query(&self, query: &QueryExpression, current: &'v V) -> Vec<Located<'v, V>> {
        let start = if query.is_absolute() { self.root } else { current };
        let mut nodes = vec![Located {
            value: start,
            trail: Trail::root(),
        }];
        for segment in query.segments() {
            if nodes.is_empty() {
                break;
            }
            nodes = self.apply_segment(segment, &nodes);
        }
        nodes
    }
}

fn run<'v, V: JsonValue>(query: &QueryExpression, root: &'v V) -> Vec<Located<'v, V>> {
    Evaluator::new(root).query(query, root)
}

/// Every match with its normalized path, in document order
pub fn evaluate<'v, V: JsonValue>(query: &QueryExpression, root: &'v V) -> Vec<JsonNode<'v, V>> {
    run(query, root).into_iter().map(Located::into_node).collect()
}

/// Every matched value, in document order
pub fn get_all<'v, V: JsonValue>(query: &QueryExpression, root: &'v V) -> Vec<&'v V> {
    run(query, root).into_iter().map(|node| node.value).collect()
}

/// The first matched value, if any
pub fn get_one<'v, V: JsonValue>(query: &QueryExpression, root: &'v V) -> Option<&'v V> {
    run(query, root).into_iter().next().map(|node| node.value)
}

/// The only matched value
///
/// # Errors
///
/// [`RequiredValueError::NoMatch`] when nothing matched, [`RequiredValueError::AmbiguousMatch`]
/// with every match's path when more than one value matched.
pub fn require_one<'v, V: JsonValue>(
    query: &QueryExpression,
    root: &'v V,
) -> Result<&'v V, RequiredValueError> {
    let mut nodes = run(query, root);
    match nodes.len() {
        0 => Err(RequiredValueError::NoMatch),
        1 => Ok(nodes.swap_remove(0).value),
        _ => Err(RequiredValueError::AmbiguousMatch {
            paths: nodes.iter().map(|node| node.trail.to_query()).collect(),
        }),
    }
}

/// Same as [`evaluate`]
pub fn trace_all<'v, V: JsonValue>(query: &QueryExpression, root: &'v V) -> Vec<JsonNode<'v, V>> {
    evaluate(query, root)
}

/// The first match with its normalized path, if any
pub fn trace_one<'v, V: JsonValue>(query: &QueryExpression, root: &'v V) -> Option<JsonNode<'v, V>> {
    run(query, root).into_iter().next().map(Located::into_node)
}

/// Test a standalone filter against `value`, which serves as both `@` and `$`
pub fn test_filter<V: JsonValue>(filter: &FilterExpression, value: &V) -> bool {
    Evaluator::new(value).test(filter, value)
}

//! Matched values paired with their location

use std::fmt;

use crate::ast::QueryExpression;

/// A value reached by a query together with its normalized path
///
/// The path is an absolute query made only of single-name and single-index child
/// segments, so it renders as an RFC 9535 normalized path such as `$['store']['book'][0]`.
#[derive(Debug, PartialEq)]
pub struct JsonNode<'v, V> {
    pub value: &'v V,
    pub path: QueryExpression,
}

impl<'v, V> JsonNode<'v, V> {
    #[inline]
    #[must_use]
    pub fn new(value: &'v V, path: QueryExpression) -> Self {
        Self { value, path }
    }

    /// The document root itself, located at `$`
    #[inline]
    #[must_use]
    pub fn root(value: &'v V) -> Self {
        Self::new(value, QueryExpression::root())
    }
}

impl<V> Clone for JsonNode<'_, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            path: self.path.clone(),
        }
    }
}

impl<V> fmt::Display for JsonNode<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

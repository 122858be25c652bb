//! The compiled query handle

use std::fmt;
use std::str::FromStr;

use jsonpath_query_core::evaluator;
use jsonpath_query_core::{
    JsonNode, JsonPathError, JsonPathResult, JsonValue, QueryExpression, RequiredValueError,
    Segment,
};

/// A compiled absolute JSONPath query
///
/// Immutable and cheap to share across threads. Two paths are equal when their query
/// trees are structurally equal, regardless of the notation they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonPath {
    query: QueryExpression,
}

impl JsonPath {
    /// `$`, selecting the whole document
    pub const ROOT: JsonPath = JsonPath {
        query: QueryExpression::root(),
    };

    /// Compile `text` through the process-wide cache
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntactic error in `text`.
    pub fn compile(text: &str) -> JsonPathResult<Self> {
        crate::cache::global().compile(text)
    }

    /// Absolute path made of `segments`
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            query: QueryExpression::Absolute(segments),
        }
    }

    pub(crate) fn from_query(query: QueryExpression) -> Self {
        Self::from_segments(query.into_segments())
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &QueryExpression {
        &self.query
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.query.segments()
    }

    #[must_use]
    pub fn into_query(self) -> QueryExpression {
        self.query
    }

    /// Every match with its normalized path, in document order
    pub fn evaluate<'v, V: JsonValue>(&self, subject: &'v V) -> Vec<JsonNode<'v, V>> {
        evaluator::evaluate(&self.query, subject)
    }

    /// Every matched value, in document order
    pub fn get_all<'v, V: JsonValue>(&self, subject: &'v V) -> Vec<&'v V> {
        evaluator::get_all(&self.query, subject)
    }

    /// The first matched value
    pub fn get_one<'v, V: JsonValue>(&self, subject: &'v V) -> Option<&'v V> {
        evaluator::get_one(&self.query, subject)
    }

    /// The only matched value
    ///
    /// # Errors
    ///
    /// Fails with [`RequiredValueError::NoMatch`] or [`RequiredValueError::AmbiguousMatch`]
    /// unless exactly one value matched.
    pub fn require_one<'v, V: JsonValue>(
        &self,
        subject: &'v V,
    ) -> Result<&'v V, RequiredValueError> {
        evaluator::require_one(&self.query, subject)
    }

    pub fn trace_all<'v, V: JsonValue>(&self, subject: &'v V) -> Vec<JsonNode<'v, V>> {
        evaluator::trace_all(&self.query, subject)
    }

    pub fn trace_one<'v, V: JsonValue>(&self, subject: &'v V) -> Option<JsonNode<'v, V>> {
        evaluator::trace_one(&self.query, subject)
    }
}

impl Default for JsonPath {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query)
    }
}

impl FromStr for JsonPath {
    type Err = JsonPathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::compile(text)
    }
}

impl From<JsonPath> for QueryExpression {
    fn from(path: JsonPath) -> Self {
        path.query
    }
}

impl AsRef<QueryExpression> for JsonPath {
    fn as_ref(&self) -> &QueryExpression {
        &self.query
    }
}

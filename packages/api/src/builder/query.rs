//! Segment builders for queries and paths

use jsonpath_query_core::{FilterExpression, QueryExpression, Segment, Selector};

use crate::JsonPath;

/// Append segments to a query
///
/// # Panics
///
/// Methods taking a list of selectors panic when the list is empty.
pub trait QueryBuilder: Sized {
    #[must_use]
    fn push_segment(self, segment: Segment) -> Self;

    #[must_use]
    fn select_children<I>(self, selectors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        self.push_segment(Segment::child(selectors.into_iter().map(Into::into)))
    }

    #[must_use]
    fn select_descendants<I>(self, selectors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        self.push_segment(Segment::descendant(selectors.into_iter().map(Into::into)))
    }

    /// `[*]`
    #[must_use]
    fn select_all_children(self) -> Self {
        self.select_children([Selector::Wildcard])
    }

    /// `..[*]`
    #[must_use]
    fn select_all_descendants(self) -> Self {
        self.select_descendants([Selector::Wildcard])
    }

    #[must_use]
    fn field(self, name: impl Into<String>) -> Self {
        self.select_children([Selector::Name(name.into())])
    }

    #[must_use]
    fn fields<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_children(names.into_iter().map(|name| Selector::Name(name.into())))
    }

    #[must_use]
    fn index(self, index: i64) -> Self {
        self.select_children([Selector::Index(index)])
    }

    #[must_use]
    fn indices(self, indices: impl IntoIterator<Item = i64>) -> Self {
        self.select_children(indices.into_iter().map(Selector::Index))
    }

    /// `[?filter]`
    #[must_use]
    fn filter(self, filter: FilterExpression) -> Self {
        self.select_children([Selector::Filter(filter)])
    }
}

impl QueryBuilder for QueryExpression {
    fn push_segment(self, segment: Segment) -> Self {
        self.with_segment(segment)
    }
}

impl QueryBuilder for JsonPath {
    fn push_segment(self, segment: Segment) -> Self {
        JsonPath::from_query(self.into_query().with_segment(segment))
    }
}

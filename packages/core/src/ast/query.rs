use std::fmt;

use super::Segment;

/// A query: a root identifier followed by zero or more segments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryExpression {
    /// Starts at the document root (`$`)
    Absolute(Vec<Segment>),
    /// Starts at the filter's current node (`@`)
    Relative(Vec<Segment>),
}

impl QueryExpression {
    /// `$` with no segments
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        QueryExpression::Absolute(Vec::new())
    }

    /// `@` with no segments
    #[inline]
    #[must_use]
    pub const fn current() -> Self {
        QueryExpression::Relative(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match self {
            QueryExpression::Absolute(segments) | QueryExpression::Relative(segments) => segments,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        matches!(self, QueryExpression::Absolute(_))
    }

    /// `true` when the query can address at most one node
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.segments().iter().all(Segment::is_singular)
    }

    /// Append `segment`, returning the extended query
    #[must_use]
    pub fn with_segment(mut self, segment: Segment) -> Self {
        match &mut self {
            QueryExpression::Absolute(segments) | QueryExpression::Relative(segments) => {
                segments.push(segment);
            }
        }
        self
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        match self {
            QueryExpression::Absolute(segments) | QueryExpression::Relative(segments) => segments,
        }
    }
}

impl fmt::Display for QueryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_absolute() { "$" } else { "@" })?;
        for segment in self.segments() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

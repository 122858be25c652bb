use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use super::FilterExpression;

/// One selector inside a segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Object member by name
    Name(String),
    /// Array element by index; negative counts from the end
    Index(i64),
    /// Array slice `start:end:step`; absent parts take their defaults
    Slice {
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    },
    /// Every child
    Wildcard,
    /// Children for which the predicate holds
    Filter(FilterExpression),
}

impl Selector {
    #[inline]
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Selector::Name(name.into())
    }

    #[inline]
    #[must_use]
    pub const fn slice(start: Option<i64>, end: Option<i64>, step: Option<i64>) -> Self {
        Selector::Slice { start, end, step }
    }

    /// `true` for selectors that can yield at most one node
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Selector::Name(_) | Selector::Index(_))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Name(name) => super::write_quoted(f, name, '\''),
            Selector::Index(index) => write!(f, "{index}"),
            Selector::Slice { start, end, step } => {
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                f.write_str(":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                if let Some(step) = step {
                    write!(f, ":{step}")?;
                }
                Ok(())
            }
            Selector::Wildcard => f.write_str("*"),
            Selector::Filter(filter) => write!(f, "?{filter}"),
        }
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_owned())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl From<i64> for Selector {
    fn from(index: i64) -> Self {
        Selector::Index(index)
    }
}

impl From<Range<i64>> for Selector {
    fn from(range: Range<i64>) -> Self {
        Selector::slice(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<i64>> for Selector {
    fn from(range: RangeFrom<i64>) -> Self {
        Selector::slice(Some(range.start), None, None)
    }
}

impl From<RangeTo<i64>> for Selector {
    fn from(range: RangeTo<i64>) -> Self {
        Selector::slice(None, Some(range.end), None)
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Selector::slice(None, None, None)
    }
}

impl From<FilterExpression> for Selector {
    fn from(filter: FilterExpression) -> Self {
        Selector::Filter(filter)
    }
}

use std::fmt;

use super::{NonEmpty, Selector};

/// One step of a query: a non-empty list of selectors applied to each input node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Applies the selectors to each input node
    Child(NonEmpty<Selector>),
    /// Applies the selectors to each input node and all of its descendants
    Descendant(NonEmpty<Selector>),
}

impl Segment {
    /// Child segment over `selectors`
    ///
    /// # Panics
    ///
    /// Panics if `selectors` yields nothing.
    #[must_use]
    pub fn child(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Segment::Child(NonEmpty::new(selectors.into_iter().collect()))
    }

    /// Descendant segment over `selectors`
    ///
    /// # Panics
    ///
    /// Panics if `selectors` yields nothing.
    #[must_use]
    pub fn descendant(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Segment::Descendant(NonEmpty::new(selectors.into_iter().collect()))
    }

    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &NonEmpty<Selector> {
        match self {
            Segment::Child(selectors) | Segment::Descendant(selectors) => selectors,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_descendant(&self) -> bool {
        matches!(self, Segment::Descendant(_))
    }

    /// A child segment with exactly one name or index selector
    #[must_use]
    pub fn is_singular(&self) -> bool {
        match self {
            Segment::Child(selectors) => selectors.len() == 1 && selectors.first().is_singular(),
            Segment::Descendant(_) => false,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_descendant() {
            f.write_str("..")?;
        }
        f.write_str("[")?;
        for (i, selector) in self.selectors().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{selector}")?;
        }
        f.write_str("]")
    }
}

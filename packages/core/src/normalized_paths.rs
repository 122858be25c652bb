//! Persistent path trail built up during evaluation
//!
//! Each selected node shares its ancestors' trail through reference counting, so
//! extending a path is a single allocation no matter how deep the node is.

use std::rc::Rc;

use crate::ast::{NonEmpty, QueryExpression, Segment, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathElement {
    Member(String),
    Index(usize),
}

#[derive(Debug)]
struct Step {
    parent: Trail,
    element: PathElement,
}

/// Location of a node relative to the root; empty for the root itself
#[derive(Debug, Clone, Default)]
pub(crate) struct Trail(Option<Rc<Step>>);

impl Trail {
    #[inline]
    pub(crate) fn root() -> Self {
        Self(None)
    }

    #[must_use]
    pub(crate) fn member(&self, name: &str) -> Self {
        self.push(PathElement::Member(name.to_owned()))
    }

    #[must_use]
    pub(crate) fn index(&self, index: usize) -> Self {
        self.push(PathElement::Index(index))
    }

    fn push(&self, element: PathElement) -> Self {
        Self(Some(Rc::new(Step {
            parent: self.clone(),
            element,
        })))
    }

    /// Render the trail as an absolute query of single-selector child segments
    pub(crate) fn to_query(&self) -> QueryExpression {
        let mut elements = Vec::new();
        let mut cursor = self.0.as_deref();
        while let Some(step) = cursor {
            elements.push(&step.element);
            cursor = step.parent.0.as_deref();
        }

        let segments = elements
            .into_iter()
            .rev()
            .map(|element| {
                let selector = match element {
                    PathElement::Member(name) => Selector::Name(name.clone()),
                    PathElement::Index(index) => {
                        Selector::Index(i64::try_from(*index).unwrap_or(i64::MAX))
                    }
                };
                Segment::Child(NonEmpty::single(selector))
            })
            .collect();
        QueryExpression::Absolute(segments)
    }
}

impl Drop for Trail {
    // Unlink uniquely owned steps one at a time so long trails do not drop recursively.
    fn drop(&mut self) {
        while let Some(step) = self.0.take() {
            match Rc::try_unwrap(step) {
                Ok(mut step) => self.0 = step.parent.0.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_trail_is_dollar() {
        assert_eq!(Trail::root().to_query().to_string(), "$");
    }

    #[test]
    fn test_siblings_share_parent() {
        let store = Trail::root().member("store");
        let first = store.index(0);
        let second = store.index(1);
        assert_eq!(first.to_query().to_string(), "$['store'][0]");
        assert_eq!(second.to_query().to_string(), "$['store'][1]");
        assert_eq!(store.to_query().to_string(), "$['store']");
    }

    #[test]
    fn test_member_names_are_escaped() {
        let trail = Trail::root().member("it's\n");
        assert_eq!(trail.to_query().to_string(), r"$['it\'s\n']");
    }

    #[test]
    fn test_long_trails_drop_without_recursion() {
        let mut trail = Trail::root();
        for index in 0..200_000 {
            trail = trail.index(index);
        }
        let shared = trail.clone();
        drop(trail);
        assert!(shared.0.is_some());
        drop(shared);
    }
}

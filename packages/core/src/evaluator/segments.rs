//! Child and descendant segment application

use super::{Evaluator, Located};
use crate::ast::{NonEmpty, Segment, Selector};
use crate::value::{JsonValue, ValueKind};

impl<'v, V: JsonValue> Evaluator<'v, V> {
    /// Apply one segment to every input node, concatenating results in input order
    pub(super) fn apply_segment(
        &self,
        segment: &Segment,
        input: &[Located<'v, V>],
    ) -> Vec<Located<'v, V>> {
        let mut output = Vec::new();
        for node in input {
            match segment {
                Segment::Child(selectors) => {
                    for selector in selectors {
                        self.select(selector, node, &mut output);
                    }
                }
                Segment::Descendant(selectors) => self.descend(selectors, node, &mut output),
            }
        }
        output
    }

    /// Visit `node` and its descendants in pre-order, applying every selector at each visit
    ///
    /// Uses an explicit stack so document depth does not consume call stack.
    fn descend(
        &self,
        selectors: &NonEmpty<Selector>,
        node: &Located<'v, V>,
        output: &mut Vec<Located<'v, V>>,
    ) {
        let mut stack = vec![node.clone()];
        while let Some(visited) = stack.pop() {
            for selector in selectors {
                self.select(selector, &visited, output);
            }
            let first_child = stack.len();
            push_children(&visited, &mut stack);
            stack[first_child..].reverse();
        }
    }
}

/// Push the children of `node` in document order
pub(super) fn push_children<'v, V: JsonValue>(
    node: &Located<'v, V>,
    output: &mut Vec<Located<'v, V>>,
) {
    match node.value.kind() {
        ValueKind::Array => output.extend(node.value.elements().enumerate().map(|(index, value)| {
            Located {
                value,
                trail: node.trail.index(index),
            }
        })),
        ValueKind::Object => output.extend(node.value.members().map(|(name, value)| Located {
            value,
            trail: node.trail.member(name),
        })),
        _ => {}
    }
}

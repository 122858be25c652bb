//! Selector application against a single node

use super::segments::push_children;
use super::{Evaluator, Located, normalize_index, slice_indices};
use crate::ast::Selector;
use crate::value::JsonValue;

impl<'v, V: JsonValue> Evaluator<'v, V> {
    pub(super) fn select(
        &self,
        selector: &Selector,
        node: &Located<'v, V>,
        output: &mut Vec<Located<'v, V>>,
    ) {
        match selector {
            Selector::Name(name) => {
                if let Some(value) = node.value.member(name) {
                    output.push(Located {
                        value,
                        trail: node.trail.member(name),
                    });
                }
            }
            Selector::Index(index) => {
                if !node.value.is_array() {
                    return;
                }
                let element = normalize_index(*index, node.value.len())
                    .and_then(|i| node.value.element(i).map(|value| (i, value)));
                if let Some((i, value)) = element {
                    output.push(Located {
                        value,
                        trail: node.trail.index(i),
                    });
                }
            }
            Selector::Slice { start, end, step } => {
                if !node.value.is_array() {
                    return;
                }
                for i in slice_indices(node.value.len(), *start, *end, *step) {
                    if let Some(value) = node.value.element(i) {
                        output.push(Located {
                            value,
                            trail: node.trail.index(i),
                        });
                    }
                }
            }
            Selector::Wildcard => push_children(node, output),
            Selector::Filter(filter) => {
                let mut children = Vec::new();
                push_children(node, &mut children);
                output.extend(
                    children
                        .into_iter()
                        .filter(|child| self.test(filter, child.value)),
                );
            }
        }
    }
}

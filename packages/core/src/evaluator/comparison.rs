//! Comparison semantics over values, literals and Nothing
//!
//! An absent operand (`None`) is Nothing: it equals only another Nothing and is never
//! ordered against anything.

use crate::ast::{ComparisonOp, Literal};
use crate::value::{JsonValue, ValueKind};

/// Operand of a comparison after evaluation
pub(crate) enum Atom<'a, V> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'a str),
    Array(&'a V),
    Object(&'a V),
}

impl<V> Clone for Atom<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Atom<'_, V> {}

impl<'a, V: JsonValue> Atom<'a, V> {
    pub(crate) fn of(value: &'a V) -> Self {
        match value.kind() {
            ValueKind::Null => Atom::Null,
            ValueKind::Bool => Atom::Bool(value.as_bool().unwrap_or_default()),
            ValueKind::Number => match value.as_i64() {
                Some(int) => Atom::Int(int),
                None => Atom::Float(value.as_f64().unwrap_or(f64::NAN)),
            },
            ValueKind::String => Atom::Str(value.as_str().unwrap_or_default()),
            ValueKind::Array => Atom::Array(value),
            ValueKind::Object => Atom::Object(value),
        }
    }

    pub(crate) fn from_literal(literal: &'a Literal) -> Self {
        match literal {
            Literal::Null => Atom::Null,
            Literal::Bool(value) => Atom::Bool(*value),
            Literal::Int(value) => Atom::Int(*value),
            Literal::Float(value) => Atom::Float(*value),
            Literal::String(value) => Atom::Str(value),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match *self {
            #[allow(clippy::cast_precision_loss)]
            Atom::Int(value) => Some(value as f64),
            Atom::Float(value) => Some(value),
            _ => None,
        }
    }
}

pub(crate) fn compare<V: JsonValue>(
    op: ComparisonOp,
    left: Option<Atom<'_, V>>,
    right: Option<Atom<'_, V>>,
) -> bool {
    match op {
        ComparisonOp::Equal => equals(left, right),
        ComparisonOp::NotEqual => !equals(left, right),
        ComparisonOp::Less => less(left, right),
        ComparisonOp::LessOrEqual => less(left, right) || equals(left, right),
        ComparisonOp::Greater => less(right, left),
        ComparisonOp::GreaterOrEqual => less(right, left) || equals(left, right),
    }
}

fn equals<V: JsonValue>(left: Option<Atom<'_, V>>, right: Option<Atom<'_, V>>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => atoms_equal(left, right),
        _ => false,
    }
}

/// Only numbers and strings are ordered
fn less<V: JsonValue>(left: Option<Atom<'_, V>>, right: Option<Atom<'_, V>>) -> bool {
    let (Some(left), Some(right)) = (left, right) else {
        return false;
    };
    match (left, right) {
        (Atom::Int(a), Atom::Int(b)) => a < b,
        (Atom::Str(a), Atom::Str(b)) => a < b,
        _ => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        },
    }
}

fn atoms_equal<V: JsonValue>(left: Atom<'_, V>, right: Atom<'_, V>) -> bool {
    match (left, right) {
        (Atom::Null, Atom::Null) => true,
        (Atom::Bool(a), Atom::Bool(b)) => a == b,
        (Atom::Int(a), Atom::Int(b)) => a == b,
        (Atom::Str(a), Atom::Str(b)) => a == b,
        (Atom::Array(a), Atom::Array(b)) | (Atom::Object(a), Atom::Object(b)) => deep_equal(a, b),
        _ => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Structural equality of two values, walking nested containers with an explicit stack
pub(crate) fn deep_equal<V: JsonValue>(left: &V, right: &V) -> bool {
    let mut pending = vec![(left, right)];

    while let Some((left, right)) = pending.pop() {
        match (Atom::of(left), Atom::of(right)) {
            (Atom::Array(a), Atom::Array(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                pending.extend(a.elements().zip(b.elements()));
            }
            (Atom::Object(a), Atom::Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                for (name, value) in a.members() {
                    match b.member(name) {
                        Some(other) => pending.push((value, other)),
                        None => return false,
                    }
                }
            }
            (Atom::Array(_) | Atom::Object(_), _) | (_, Atom::Array(_) | Atom::Object(_)) => {
                return false;
            }
            (a, b) => {
                if !atoms_equal(a, b) {
                    return false;
                }
            }
        }
    }
    true
}

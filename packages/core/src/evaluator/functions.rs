//! Function extension evaluation

use super::Evaluator;
use super::comparison::Atom;
use super::regex_cache::REGEX_CACHE;
use crate::ast::FunctionExpression;
use crate::value::JsonValue;

impl<'v, V: JsonValue> Evaluator<'v, V> {
    pub(super) fn function<'a>(
        &self,
        function: &'a FunctionExpression,
        current: &'v V,
    ) -> Option<Atom<'a, V>>
    where
        'v: 'a,
    {
        match function {
            FunctionExpression::Length(argument) => length(self.comparable(argument, current)?),
            FunctionExpression::Count(query) => {
                let count = self.query(query, current).len();
                Some(Atom::Int(i64::try_from(count).unwrap_or(i64::MAX)))
            }
            FunctionExpression::Value(query) => self.single_value(query, current).map(Atom::of),
        }
    }
}

fn length<'a, V: JsonValue>(argument: Atom<'a, V>) -> Option<Atom<'a, V>> {
    let length = match argument {
        Atom::Str(text) => text.chars().count(),
        Atom::Array(value) | Atom::Object(value) => value.len(),
        _ => return None,
    };
    Some(Atom::Int(i64::try_from(length).unwrap_or(i64::MAX)))
}

/// `match()` when `full`, `search()` otherwise
///
/// Anything but two strings, or an invalid pattern, yields `false`.
pub(super) fn matches<V: JsonValue>(
    subject: Option<Atom<'_, V>>,
    pattern: Option<Atom<'_, V>>,
    full: bool,
) -> bool {
    let (Some(Atom::Str(subject)), Some(Atom::Str(pattern))) = (subject, pattern) else {
        return false;
    };
    REGEX_CACHE
        .get(pattern, full)
        .is_some_and(|regex| regex.is_match(subject))
}

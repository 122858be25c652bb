//! Tests for filter semantics: existence, comparison, Nothing and function extensions

use jsonpath_query_core::compile_query;
use jsonpath_query_core::evaluator::get_all;
use serde_json::{Value, json};

fn select(text: &str, document: &Value) -> Vec<Value> {
    let compiled = compile_query(text).expect("query compiles");
    get_all(&compiled, document).into_iter().cloned().collect()
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_existence_differs_from_null_comparison() {
        let doc = json!([
            {"a": false},
            {"a": null},
            {"a": 0},
            {"b": 1}
        ]);
        assert_eq!(
            select("$[?@.a]", &doc),
            vec![json!({"a": false}), json!({"a": null}), json!({"a": 0})]
        );
        assert_eq!(select("$[?@.a == null]", &doc), vec![json!({"a": null})]);
        assert_eq!(select("$[?!@.a]", &doc), vec![json!({"b": 1})]);
    }

    #[test]
    fn test_missing_operands_are_nothing() {
        let doc = json!([{"a": 1}, {"b": 1}, {}]);
        assert_eq!(select("$[?@.x == @.y]", &doc).len(), 3);
        assert_eq!(select("$[?@.a == @.b]", &doc), vec![json!({})]);
        assert_eq!(select("$[?@.a != 1]", &doc), vec![json!({"b": 1}), json!({})]);
        assert!(select("$[?@.a < 2 && @.a > 2]", &doc).is_empty());
        assert_eq!(select("$[?@.missing <= @.gone]", &doc).len(), 3);
        assert!(select("$[?@.missing < @.gone]", &doc).is_empty());
    }

    #[test]
    fn test_ordering_only_between_numbers_or_strings() {
        let doc = json!([1, 2.5, "b", "abc", true, null, [1], {"k": 1}]);
        assert_eq!(select("$[?@ > 1]", &doc), vec![json!(2.5)]);
        assert_eq!(select("$[?@ >= 'abc']", &doc), vec![json!("b"), json!("abc")]);
        assert_eq!(select("$[?@ <= true]", &doc), vec![json!(true)]);
        assert!(select("$[?@ < null]", &doc).is_empty());
    }

    #[test]
    fn test_structural_equality_of_containers() {
        let doc = json!({
            "items": [
                {"v": [1, {"x": null}], "w": [1.0, {"x": null}]},
                {"v": {"a": 1, "b": 2}, "w": {"b": 2, "a": 1}},
                {"v": [1, 2], "w": [2, 1]}
            ]
        });
        assert_eq!(select("$.items[?@.v == @.w]", &doc).len(), 2);
        assert_eq!(select("$.items[?@.v != @.w]", &doc).len(), 1);
    }

    #[test]
    fn test_absolute_queries_see_the_document_root() {
        let doc = json!({"limit": 10, "items": [{"p": 5}, {"p": 15}, {"p": 10}]});
        assert_eq!(
            select("$.items[?@.p <= $.limit].p", &doc),
            vec![json!(5), json!(10)]
        );
    }

    #[test]
    fn test_filters_apply_to_object_members() {
        let doc = json!({"a": {"n": 1}, "b": {"n": 2}, "c": 3});
        assert_eq!(select("$[?@.n > 1]", &doc), vec![json!({"n": 2})]);
        assert!(select("$.c[?@ == 3]", &doc).is_empty());
    }

    #[test]
    fn test_nested_filters() {
        let doc = json!([
            {"tags": [{"name": "x"}, {"name": "y"}]},
            {"tags": [{"name": "z"}]},
            {"tags": []}
        ]);
        assert_eq!(
            select("$[?@.tags[?@.name == 'y']]", &doc),
            vec![json!({"tags": [{"name": "x"}, {"name": "y"}]})]
        );
    }

    #[test]
    fn test_logical_precedence() {
        let doc = json!([
            {"a": 1, "b": 1, "c": 0},
            {"a": 0, "b": 0, "c": 1},
            {"a": 0, "b": 1, "c": 0}
        ]);
        assert_eq!(select("$[?@.a == 1 || @.b == 0 && @.c == 1]", &doc).len(), 2);
        assert_eq!(select("$[?(@.a == 1 || @.b == 0) && @.c == 1]", &doc).len(), 1);
        assert_eq!(select("$[?!(@.a == 1)]", &doc).len(), 2);
    }
}

//! Tests for canonical query rendering
//!
//! Rendered text must compile back to a tree equal to the one it came from.

use jsonpath_query_core::{
    ComparisonOp, FilterExpression, Literal, NonEmpty, QueryExpression, Segment, Selector,
    compile_filter, compile_query,
};

#[cfg(test)]
mod rendering_tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        let cases = [
            ("$", "$"),
            ("$.a[0]", "$['a'][0]"),
            ("$..*", "$..[*]"),
            ("$..a", "$..['a']"),
            ("$[1:3]", "$[1:3]"),
            ("$[::2]", "$[::2]"),
            ("$[:]", "$[:]"),
            ("$[-1:]", "$[-1:]"),
            ("$['a', 1, *]", "$['a',1,*]"),
            ("$[?@.a == 'x']", r#"$[?@['a'] == "x"]"#),
            ("$[?!@.a]", "$[?!@['a']]"),
            ("$[?!(@.a == 1)]", "$[?!(@['a'] == 1)]"),
            ("$[?(@.a || @.b) && @.c]", "$[?(@['a'] || @['b']) && @['c']]"),
            ("$[?@.a || @.b && @.c]", "$[?@['a'] || @['b'] && @['c']]"),
            ("$[?@.price < 1.5]", "$[?@['price'] < 1.5]"),
            ("$[?@.n >= 1e3]", "$[?@['n'] >= 1000.0]"),
            ("$[?length(@.a) > 2]", "$[?length(@['a']) > 2]"),
            ("$[?match(@.a, 'x.*')]", r#"$[?match(@['a'], "x.*")]"#),
            ("$[?search($.b, \"y\")]", r#"$[?search($['b'], "y")]"#),
            ("$[?count(@.*) == value(@.n)]", "$[?count(@[*]) == value(@['n'])]"),
            (r"$['it\'s']", r"$['it\'s']"),
            (r#"$["tab\there"]"#, r"$['tab\there']"),
        ];
        for (text, expected) in cases {
            let compiled = compile_query(text).expect("compiles");
            assert_eq!(compiled.to_string(), expected, "query '{}'", text);
        }
    }

    #[test]
    fn test_rendered_queries_recompile_to_equal_trees() {
        let queries = [
            "$.store.book[*].author",
            "$..book[?@.isbn && @.price < 10].title",
            "$[?@.a == null || !(@.b != true) && @.c]",
            "$['\\u0001 \\\\ \" \\'']",
            "$[?@.s == '\\n\\u00e9']",
            "$[?(@.a) && ((@.b || @.c))]",
            "$[?-0 == @.x]",
            "$[?@.f == -2.5e-3]",
            "$[?@.f == 1e300 || @.f == -1.7976931348623157e308]",
            "$[?match(@.a, '[a-z]+\\\\.')]",
            "$..[1:-1:2, ::-1]",
        ];
        for text in queries {
            let compiled = compile_query(text).expect("compiles");
            let rendered = compiled.to_string();
            let recompiled = compile_query(&rendered).expect("rendered text compiles");
            assert_eq!(compiled, recompiled, "query '{}' rendered as '{}'", text, rendered);
        }
    }

    #[test]
    fn test_built_trees_render_like_parsed_ones() {
        let built = QueryExpression::root()
            .with_segment(Segment::child([Selector::name("items")]))
            .with_segment(Segment::child([Selector::Filter(FilterExpression::Or(
                NonEmpty::new(vec![
                    FilterExpression::comparison(
                        ComparisonOp::Greater,
                        QueryExpression::current()
                            .with_segment(Segment::child([Selector::name("qty")])),
                        Literal::Int(0),
                    ),
                    FilterExpression::Not(Box::new(FilterExpression::Existence(
                        QueryExpression::current()
                            .with_segment(Segment::child([Selector::name("ghost")])),
                    ))),
                ]),
            ))]));
        assert_eq!(built.to_string(), "$['items'][?@['qty'] > 0 || !@['ghost']]");
        assert_eq!(compile_query(&built.to_string()).expect("compiles"), built);
    }

    #[test]
    fn test_filters_render_standalone() {
        let filter = compile_filter("@.a<1&&@.b").expect("compiles");
        assert_eq!(filter.to_string(), "@['a'] < 1 && @['b']");
        assert_eq!(
            compile_filter(&filter.to_string()).expect("compiles"),
            filter
        );
    }
}

//! Tests for query and filter compilation
//!
//! Structural equality of compiled trees, notation equivalences and rejected syntax.

use jsonpath_query_core::{
    ComparableExpression, ComparisonOp, CompilerConfig, FilterExpression, JsonPathError, Literal,
    NonEmpty, QueryExpression, Segment, Selector, Token, compile_filter, compile_query,
    compile_query_with,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn name(value: &str) -> Segment {
        Segment::child([Selector::name(value)])
    }

    fn relative(names: &[&str]) -> QueryExpression {
        QueryExpression::Relative(names.iter().map(|n| name(n)).collect())
    }

    #[test]
    fn test_dot_and_bracket_notation_compile_to_equal_trees() {
        let dotted = compile_query("$.store.book").expect("dotted");
        let single = compile_query("$['store']['book']").expect("single quoted");
        let double = compile_query(r#"$["store"]["book"]"#).expect("double quoted");
        assert_eq!(dotted, single);
        assert_eq!(single, double);
        assert_eq!(
            dotted,
            QueryExpression::Absolute(vec![name("store"), name("book")])
        );
    }

    #[test]
    fn test_mixed_bracket_selection() {
        let compiled = compile_query("$['b', 1::2, ?@.a][*]").expect("compiles");
        let expected = QueryExpression::Absolute(vec![
            Segment::child([
                Selector::name("b"),
                Selector::slice(Some(1), None, Some(2)),
                Selector::Filter(FilterExpression::Existence(relative(&["a"]))),
            ]),
            Segment::child([Selector::Wildcard]),
        ]);
        assert_eq!(compiled, expected);
    }

    #[test]
    fn test_descendant_forms() {
        let cases = [
            ("$..a", Segment::descendant([Selector::name("a")])),
            ("$..*", Segment::descendant([Selector::Wildcard])),
            (
                "$..[0,'x']",
                Segment::descendant([Selector::Index(0), Selector::name("x")]),
            ),
        ];
        for (text, segment) in cases {
            let compiled = compile_query(text).expect("compiles");
            assert_eq!(
                compiled,
                QueryExpression::Absolute(vec![segment]),
                "query '{}'",
                text
            );
        }
    }

    #[test]
    fn test_keywords_are_member_names_after_dot() {
        let compiled = compile_query("$.true.null..false").expect("compiles");
        assert_eq!(
            compiled,
            QueryExpression::Absolute(vec![
                name("true"),
                name("null"),
                Segment::descendant([Selector::name("false")]),
            ])
        );
    }

    #[test]
    fn test_slices_keep_absent_parts_distinct_from_zero() {
        let absent = compile_query("$[:]").expect("compiles");
        let zero = compile_query("$[0:]").expect("compiles");
        assert_ne!(absent, zero);
        assert_eq!(
            absent,
            QueryExpression::Absolute(vec![Segment::child([Selector::slice(None, None, None)])])
        );
        assert_eq!(
            compile_query("$[-3:-1:1]").expect("compiles"),
            QueryExpression::Absolute(vec![Segment::child([Selector::slice(
                Some(-3),
                Some(-1),
                Some(1)
            )])])
        );
    }

    #[test]
    fn test_whitespace_between_tokens_is_insignificant() {
        let pairs = [
            ("$['a',1]", "$[ 'a' , 1 ]"),
            ("$[?@.a==1]", "$[?@.a == 1]"),
            ("$[?@.a&&@.b]", "$[? @.a\n&&\t@.b ]"),
            ("$.a[0]", "$.a [0]"),
        ];
        for (compact, spaced) in pairs {
            assert_eq!(
                compile_query(compact).expect("compact compiles"),
                compile_query(spaced).expect("spaced compiles"),
                "query '{}'",
                spaced
            );
        }
    }

    #[test]
    fn test_logical_operators_flatten_at_one_level() {
        let a = || FilterExpression::Existence(relative(&["a"]));
        let b = || FilterExpression::Existence(relative(&["b"]));
        let c = || FilterExpression::Existence(relative(&["c"]));

        assert_eq!(
            compile_filter("@.a && @.b && @.c").expect("compiles"),
            FilterExpression::And(NonEmpty::new(vec![a(), b(), c()]))
        );
        assert_eq!(
            compile_filter("(@.a && @.b) && @.c").expect("compiles"),
            FilterExpression::And(NonEmpty::new(vec![
                FilterExpression::And(NonEmpty::new(vec![a(), b()])),
                c(),
            ]))
        );
        assert_eq!(
            compile_filter("@.a || @.b && @.c").expect("compiles"),
            FilterExpression::Or(NonEmpty::new(vec![
                a(),
                FilterExpression::And(NonEmpty::new(vec![b(), c()])),
            ]))
        );
        assert_eq!(compile_filter("((@.a))").expect("compiles"), a());
    }

    #[test]
    fn test_comparison_operands() {
        let compiled = compile_filter("@.price <= 10.5").expect("compiles");
        assert_eq!(
            compiled,
            FilterExpression::Comparison {
                op: ComparisonOp::LessOrEqual,
                left: ComparableExpression::Query(relative(&["price"])),
                right: ComparableExpression::Literal(Literal::Float(10.5)),
            }
        );

        let compiled = compile_filter("$.limit != null").expect("compiles");
        assert_eq!(
            compiled,
            FilterExpression::comparison(
                ComparisonOp::NotEqual,
                QueryExpression::Absolute(vec![name("limit")]),
                Literal::Null,
            )
        );
    }

    #[test]
    fn test_negation_forms() {
        assert_eq!(
            compile_filter("!@.a").expect("compiles"),
            FilterExpression::Not(Box::new(FilterExpression::Existence(relative(&["a"]))))
        );
        assert!(matches!(
            compile_filter("!(@.a == 1)").expect("compiles"),
            FilterExpression::Not(inner) if matches!(*inner, FilterExpression::Comparison { .. })
        ));
    }

    #[test]
    fn test_invalid_queries_are_rejected() {
        let invalid = [
            "",
            "$..",
            "$.",
            "$[",
            "$[]",
            "$.a.",
            " $",
            "$ ",
            "@.a",
            "a",
            "$a",
            "$. a",
            "$.. a",
            "$.['a']",
            "$[?@.a == ]",
            "$[?@.a = 1]",
            "$[?@.a & @.b]",
            "$[?!@.a == 1]",
            "$[?!!@.a]",
            "$[?1]",
            "$[?'a']",
            "$[?length(@.a)]",
            "$[?length (@.a) == 1]",
            "$[?count(1) == 1]",
            "$[?match(@.a, 'x') == true]",
            "$[?@.a == 1 == 1]",
            "$[01]",
            "$[?@.a == 1e400]",
            "$[1:2:3:4]",
            "$['a\\x']",
            "$['abc",
            "$[0]]",
            "$#",
        ];
        for text in invalid {
            assert!(compile_query(text).is_err(), "query '{}' should be rejected", text);
        }
    }

    #[test]
    fn test_non_singular_comparison_operands() {
        let non_singular = [
            "$[?@.* == 1]",
            "$[?@..a == 1]",
            "$[?@[0,1] == 1]",
            "$[?@[0:1] == 1]",
            "$[?@[?@.b] == 1]",
            "$[?1 == $[*]]",
            "$[?length(@.*) == 1]",
        ];
        for text in non_singular {
            assert!(
                matches!(
                    compile_query(text),
                    Err(JsonPathError::MustBeSingularQuery { .. })
                ),
                "query '{}' should require a singular query",
                text
            );
        }
        assert_eq!(
            compile_query("$[?@.* == 1]"),
            Err(JsonPathError::MustBeSingularQuery { position: 3 })
        );
    }

    #[test]
    fn test_error_details() {
        assert_eq!(
            compile_query("?.abc"),
            Err(JsonPathError::UnexpectedToken {
                token: Token::QuestionMark,
                position: 0,
                parsing: "query root `$`",
            })
        );
        assert_eq!(
            compile_query("$[?foo(@.a)]"),
            Err(JsonPathError::UnknownFunction {
                name: "foo".to_string(),
                position: 3
            })
        );
        assert_eq!(
            compile_query("$[1.0]"),
            Err(JsonPathError::IndicesMustBeIntegers {
                literal: "1.0".to_string(),
                position: 2
            })
        );
        assert_eq!(
            compile_query("$[-0]"),
            Err(JsonPathError::IndicesMustBeIntegers {
                literal: "-0".to_string(),
                position: 2
            })
        );
        assert_eq!(
            compile_query("$[9007199254740992]"),
            Err(JsonPathError::IndexOutOfRange {
                index: 9_007_199_254_740_992,
                position: 2
            })
        );
        assert!(compile_query("$[-9007199254740991]").is_ok());
        assert!(matches!(
            compile_query("$['abc"),
            Err(JsonPathError::UnterminatedString { position: 2 })
        ));
        assert!(matches!(
            compile_query("$.a["),
            Err(JsonPathError::UnexpectedEndOfInput { position: 4, .. })
        ));
        assert!(matches!(
            compile_query(" $"),
            Err(JsonPathError::IllegalCharacter { position: 0, .. })
        ));
    }

    #[test]
    fn test_nesting_limit() {
        init_logging();
        let text = "$[?((((@.a))))]";
        assert!(compile_query(text).is_ok());

        let shallow = CompilerConfig::default().with_max_nesting_depth(3);
        assert!(matches!(
            compile_query_with(text, &shallow),
            Err(JsonPathError::NestingTooDeep { limit: 3, .. })
        ));

        let deep = format!("$[?{}@.a{}]", "(".repeat(500), ")".repeat(500));
        assert!(matches!(
            compile_query(&deep),
            Err(JsonPathError::NestingTooDeep { limit: 128, .. })
        ));
    }

    #[test]
    fn test_function_arguments() {
        assert!(compile_query("$[?length(@.name) > 3]").is_ok());
        assert!(compile_query("$[?length('abc') == 3]").is_ok());
        assert!(compile_query("$[?count(@.*) > 1]").is_ok());
        assert!(compile_query("$[?count(@..a) == value($.n)]").is_ok());
        assert!(compile_query("$[?value(@..color) == 'red']").is_ok());
        assert!(compile_query("$[?match(@.date, '1974-05-..')]").is_ok());
        assert!(compile_query("$[?!search(@.author, 'Tolk')]").is_ok());
        assert!(compile_query("$[?length(length(@.a)) == 1]").is_ok());
    }
}

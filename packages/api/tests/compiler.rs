//! Tests for the caching compiler and its configuration

use jsonpath_query::{
    CacheConfig, CompilerConfig, ConfigurationError, JsonPathCompiler, JsonPathError, Validator,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod compiler_tests {
    use super::*;

    #[test]
    fn test_results_are_cached_by_text() {
        init_logging();
        let compiler = JsonPathCompiler::new();
        let first = compiler.compile("$.a.b").expect("compiles");
        let second = compiler.compile("$.a.b").expect("compiles");
        assert_eq!(first, second);
        assert_eq!(compiler.cached_entries(), 1);

        compiler.compile("$['a']['b']").expect("compiles");
        assert_eq!(compiler.cached_entries(), 2);
    }

    #[test]
    fn test_failures_are_cached_too() {
        let compiler = JsonPathCompiler::new();
        let first = compiler.compile("$[").expect_err("invalid");
        let second = compiler.compile("$[").expect_err("invalid");
        assert_eq!(first, second);
        assert_eq!(compiler.cached_entries(), 1);
    }

    #[test]
    fn test_filters_have_their_own_cache() {
        let compiler = JsonPathCompiler::new();
        compiler.compile_filter("@.a").expect("compiles");
        compiler.compile_filter("@.a").expect("compiles");
        compiler.compile("$.a").expect("compiles");
        assert_eq!(compiler.cached_entries(), 2);
        compiler.clear();
        assert_eq!(compiler.cached_entries(), 0);
    }

    #[test]
    fn test_full_cache_stops_admitting() {
        let compiler = JsonPathCompiler::with_config(
            CompilerConfig::default(),
            CacheConfig::default().with_max_entries(2),
        )
        .expect("valid configuration");
        for text in ["$.a", "$.b", "$.c", "$.d"] {
            compiler.compile(text).expect("compiles");
        }
        assert_eq!(compiler.cached_entries(), 2);
        assert!(compiler.compile("$.d").is_ok());
    }

    #[test]
    fn test_disabled_cache() {
        let compiler =
            JsonPathCompiler::with_config(CompilerConfig::default(), CacheConfig::no_cache())
                .expect("valid configuration");
        compiler.compile("$.a").expect("compiles");
        assert_eq!(compiler.cached_entries(), 0);
    }

    #[test]
    fn test_configuration_is_validated() {
        assert!(CacheConfig::default().validate().is_ok());
        assert!(matches!(
            CacheConfig::default().with_max_entries(usize::MAX).validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));
        assert!(matches!(
            JsonPathCompiler::with_config(
                CompilerConfig::default().with_max_nesting_depth(0),
                CacheConfig::default()
            ),
            Err(ConfigurationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_compiler_limits_apply() {
        let compiler = JsonPathCompiler::with_config(
            CompilerConfig::default().with_max_nesting_depth(2),
            CacheConfig::default(),
        )
        .expect("valid configuration");
        assert_eq!(compiler.config().max_nesting_depth, 2);
        assert!(compiler.compile("$[?@.a]").is_ok());
        assert!(matches!(
            compiler.compile("$[?((@.a))]"),
            Err(JsonPathError::NestingTooDeep { limit: 2, .. })
        ));
    }

    #[test]
    fn test_concurrent_compilation() {
        let compiler = std::sync::Arc::new(JsonPathCompiler::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let compiler = std::sync::Arc::clone(&compiler);
                std::thread::spawn(move || {
                    let text = format!("$.items[{}]", i % 4);
                    compiler.compile(&text).map(|path| path.to_string())
                })
            })
            .collect();
        for handle in handles {
            let rendered = handle.join().expect("thread completes").expect("compiles");
            assert!(rendered.starts_with("$['items']["));
        }
        assert_eq!(compiler.cached_entries(), 4);
    }
}

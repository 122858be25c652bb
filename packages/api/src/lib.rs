//! JSONPath Query Public API
//!
//! Compile RFC 9535 JSONPath queries once and evaluate them against JSON values any number
//! of times.
//!
//! ```
//! use jsonpath_query::JsonPath;
//! use serde_json::json;
//!
//! let path = JsonPath::compile("$.store.book[?@.price < 10].title").unwrap();
//! let doc = json!({"store": {"book": [
//!     {"title": "Sayings", "price": 8.95},
//!     {"title": "Sword", "price": 12.99}
//! ]}});
//! assert_eq!(path.get_one(&doc), Some(&json!("Sayings")));
//! assert_eq!(path.trace_one(&doc).unwrap().to_string(), "$['store']['book'][0]['title']");
//! ```
//!
//! Compiled queries are cached per process by [`JsonPathCompiler`]; [`builder`] offers
//! extension traits for assembling queries in code.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod cache;
mod extensions;
mod json_path;

pub use cache::{CacheConfig, JsonPathCompiler};
pub use extensions::JsonPathExt;
pub use json_path::JsonPath;

// Re-export the query model and evaluator from the core package
pub use jsonpath_query_core::{
    ComparableExpression, ComparisonOp, CompilerConfig, ConfigResult, ConfigurationError,
    FilterExpression, FunctionExpression, JsonNode, JsonPathError, JsonPathResult, JsonValue,
    Literal, NonEmpty, QueryExpression, RequiredValueError, Segment, Selector, Validator,
    ValueKind, compile_query, evaluator,
};

/// Compile `text` through the process-wide cache
///
/// # Errors
///
/// Returns the first lexical or syntactic error in `text`.
pub fn compile(text: &str) -> JsonPathResult<JsonPath> {
    cache::global().compile(text)
}

/// Compile a standalone filter expression through the process-wide cache
///
/// # Errors
///
/// Returns the first lexical or syntactic error in `text`.
pub fn compile_filter(text: &str) -> JsonPathResult<FilterExpression> {
    cache::global().compile_filter(text)
}

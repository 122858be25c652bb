//! # JSONPath query core
//!
//! Lexer, recursive-descent parser and tree-walking evaluator for RFC 9535 JSONPath.
//!
//! Query text is compiled once into an immutable, structurally comparable
//! [`QueryExpression`] (or a standalone [`FilterExpression`]) and evaluated any number of
//! times against values implementing [`JsonValue`]. Each match is reported as a
//! [`JsonNode`] carrying the matched value and its normalized path.
//!
//! ```
//! use jsonpath_query_core::{compile_query, evaluator};
//! use serde_json::json;
//!
//! let query = compile_query("$.store.book[?@.price < 10].title").unwrap();
//! let doc = json!({"store": {"book": [
//!     {"title": "Sayings", "price": 8.95},
//!     {"title": "Sword", "price": 12.99}
//! ]}});
//! let titles = evaluator::get_all(&query, &doc);
//! assert_eq!(titles, vec![&json!("Sayings")]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod ast;
pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod node;
pub mod tokens;
pub mod value;

mod filter_parser;
mod normalized_paths;
mod selector_parser;
mod tokenizer;

pub use ast::{
    ComparableExpression, ComparisonOp, FilterExpression, FunctionExpression, Literal, NonEmpty,
    QueryExpression, Segment, Selector,
};
pub use compiler::{compile_filter, compile_filter_with, compile_query, compile_query_with};
pub use config::{CompilerConfig, ConfigResult, ConfigurationError, Validator};
pub use error::{JsonPathError, JsonPathResult, RequiredValueError};
pub use node::JsonNode;
pub use tokenizer::Lexer;
pub use tokens::{Span, SpannedToken, Token};
pub use value::{JsonValue, ValueKind};

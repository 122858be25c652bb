//! Fluent construction of query trees
//!
//! Extension traits that assemble the same trees the parser produces, so a built query
//! equals the compiled text it corresponds to:
//!
//! ```
//! use jsonpath_query::builder::{self, ComparableBuilder, QueryBuilder};
//! use jsonpath_query::JsonPath;
//!
//! let built = JsonPath::ROOT
//!     .field("book")
//!     .filter(builder::current().field("price").is_less_than(10));
//! assert_eq!(built, JsonPath::compile("$.book[?@.price < 10]").unwrap());
//! ```
//!
//! The builders do not check singular-query rules; operands that select several nodes
//! evaluate to Nothing.

mod comparable;
mod filter;
mod query;

pub use comparable::{ComparableBuilder, NodeListBuilder};
pub use filter::FilterBuilder;
pub use query::QueryBuilder;

use jsonpath_query_core::QueryExpression;

/// `@` with no segments
#[must_use]
pub const fn current() -> QueryExpression {
    QueryExpression::current()
}

/// `$` with no segments
#[must_use]
pub const fn root() -> QueryExpression {
    QueryExpression::root()
}

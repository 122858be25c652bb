//! JSONPath error handling module
//!
//! Compile-time failures are reported as [`JsonPathError`], accessor failures as
//! [`RequiredValueError`]. Both are terminal: the compiler never recovers and retries.

mod constructors;
mod types;

pub(crate) use constructors::unexpected_token;
pub use types::{JsonPathError, JsonPathResult, RequiredValueError};

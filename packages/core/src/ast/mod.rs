//! Abstract syntax tree for compiled JSONPath queries
//!
//! All nodes are immutable values with structural equality and hashing: two independently
//! compiled queries with the same meaning compare equal. `Display` renders canonical query
//! text that compiles back to an equal tree.

mod comparable;
mod filter;
mod literal;
mod non_empty;
mod query;
mod segment;
mod selector;

use std::fmt::{self, Write};

pub use comparable::{ComparableExpression, FunctionExpression};
pub use filter::{ComparisonOp, FilterExpression};
pub use literal::Literal;
pub use non_empty::NonEmpty;
pub use query::QueryExpression;
pub use segment::Segment;
pub use selector::Selector;

/// Write `value` between `quote` characters using JSONPath string escapes
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str, quote: char) -> fmt::Result {
    f.write_char(quote)?;
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            '\u{08}' => f.write_str("\\b")?,
            '\u{0c}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c <= '\u{1f}' => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

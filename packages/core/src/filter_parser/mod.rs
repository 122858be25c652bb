//! Filter expression parsing
//!
//! Precedence from loosest to tightest: `||`, `&&`, then basic expressions (`!`,
//! parenthesized groups, comparisons and tests).

mod expressions;
mod functions;
mod operands;

pub(crate) use expressions::parse_logical_or;

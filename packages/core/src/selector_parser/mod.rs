//! Recursive-descent parsing of queries, segments and selectors
//!
//! Filter expressions are handed off to [`crate::filter_parser`], which calls back into
//! [`parse_segments`] for the queries embedded in them.

mod bracket;
mod core;
mod segments;
mod slice;

pub(crate) use core::QueryParser;
pub(crate) use segments::parse_segments;

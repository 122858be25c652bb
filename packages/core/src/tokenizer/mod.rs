//! JSONPath expression tokenizer
//!
//! Converts query text into a sequence of [`SpannedToken`](crate::tokens::SpannedToken)s
//! terminated by a single end-of-input token. Whitespace between tokens is skipped.

mod characters;
mod core;
mod numbers;
mod operators;
mod strings;

pub use core::Lexer;

//! tablecsv - CSV-to-table parsing for mockup data
//!
//! This crate turns raw CSV text into an ordered table of rows and cells.
//! Two grammars are provided:
//!
//! - [`lenient`]: a forgiving, zero-copy tokenizer that never fails.
//!   Malformed quoting degrades to literal text and blank lines become
//!   empty rows. This is the default and the reason the crate exists:
//!   mockup data is pasted, hand-edited, and rarely well-formed.
//! - [`strict`]: RFC 4180 via the csv crate, delimiter-parameterized,
//!   for input that is supposed to be clean.
//!
//! [`model::Table`] is the owned result type shared by both.

pub mod cli;
pub mod lenient;
pub mod model;
pub mod strict;
pub mod tracing;

// Re-export the parsing surface
pub use lenient::{next_quoted_cell, next_unquoted_cell, parse_row, parse_table, split_rows};
pub use model::{Delimiter, Table};
pub use strict::{detect_delimiter, parse_strict, ParseError};

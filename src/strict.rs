//! RFC 4180 CSV parsing using the csv crate
//!
//! The strict counterpart to [`crate::lenient`]: delimiter-parameterized,
//! with `""` unescaping inside quoted fields, and quoted fields may contain
//! the delimiter and newlines. Malformed records are reported instead of
//! repaired.

use std::io::Cursor;

use crate::model::{Delimiter, Table};

/// Error type for strict CSV parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    /// 1-based record number, when the failure is tied to one
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse CSV content into a [`Table`]
///
/// Uses the csv crate for RFC 4180 compliant parsing. Records may be ragged;
/// the first row is not treated as a header at this level.
pub fn parse_strict(content: &str, delimiter: Delimiter) -> Result<Table, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut rows: Vec<Vec<String>> = Vec::new();

    for (record_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                rows.push(row);
            }
            Err(e) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(record_num + 1),
                });
            }
        }
    }

    Ok(Table::from_rows(rows))
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

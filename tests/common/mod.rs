//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

/// Convert borrowed parse output into owned rows for comparison
pub fn owned(rows: Vec<Vec<&str>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// A four-row mockup document mixing quoted and unquoted cells
pub fn sample_document() -> &'static str {
    "\"FirstName\", LastName, \"Age\" , Color\n\
     Eve,\"Jackson\", 94, Red\n\
     Rob, Mite, 24, Blue\n\
     Bob, Parr, 42, Red"
}

/// The cells [`sample_document`] parses to
pub fn sample_table() -> Vec<Vec<String>> {
    owned(vec![
        vec!["FirstName", "LastName", "Age", "Color"],
        vec!["Eve", "Jackson", "94", "Red"],
        vec!["Rob", "Mite", "24", "Blue"],
        vec!["Bob", "Parr", "42", "Red"],
    ])
}

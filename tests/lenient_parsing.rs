//! End-to-end tests for the lenient grammar
//!
//! Covers the full mockup document the crate was built for, malformed-input
//! recovery, the per-row cell cap, and the round-trip property for plain
//! unquoted rows.

use tablecsv::{parse_row, parse_table, split_rows, Table};

mod common;
use common::{owned, sample_document, sample_table};

// ============================================================================
// Full document parsing
// ============================================================================

#[test]
fn test_sample_document_splits_into_four_lines() {
    let rows = split_rows(sample_document());

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], "\"FirstName\", LastName, \"Age\" , Color");
    assert_eq!(rows[3], "Bob, Parr, 42, Red");
}

#[test]
fn test_sample_document_parses_to_expected_cells() {
    assert_eq!(owned(parse_table(sample_document())), sample_table());
}

#[test]
fn test_sample_document_through_owned_table() {
    let table = Table::from_csv(sample_document());

    assert_eq!(table.row_count(), 4);
    assert_eq!(table.column_count(), 4);
    assert_eq!(table.get(0, 0), "FirstName");
    assert_eq!(table.get(1, 1), "Jackson");
    assert_eq!(table.get(3, 3), "Red");
}

#[test]
fn test_crlf_document_parses_like_lf() {
    let crlf = sample_document().replace('\n', "\r\n");

    assert_eq!(parse_table(&crlf), parse_table(sample_document()));
}

// ============================================================================
// Malformed input never fails
// ============================================================================

#[test]
fn test_unterminated_quote_keeps_literal_quote() {
    assert_eq!(parse_row("\"one"), vec!["\"one"]);
    assert_eq!(
        parse_table("\"broken, row\nclean, row"),
        vec![vec!["\"broken", "row"], vec!["clean", "row"]]
    );
}

#[test]
fn test_quote_noise_degrades_per_cell_not_per_table() {
    // Only the malformed cell falls back; the rest of the line still splits.
    assert_eq!(
        parse_row("good, \"fine\", \"bad, tail"),
        vec!["good", "fine", "\"bad", "tail"]
    );
}

#[test]
fn test_blank_lines_become_empty_rows() {
    let table = parse_table("a,b\n\t\nc,d");

    assert_eq!(table, vec![vec!["a", "b"], vec![], vec!["c", "d"]]);
}

#[test]
fn test_empty_input_is_an_empty_table() {
    assert_eq!(parse_table(""), Vec::<Vec<&str>>::new());
}

// ============================================================================
// Bounded work on pathological rows
// ============================================================================

#[test]
fn test_cell_cap_truncates_silently() {
    let line = vec!["v"; 2000].join(", ");
    let cells = parse_row(&line);

    assert_eq!(cells.len(), 1000);
}

#[test]
fn test_rows_below_the_cap_are_untouched() {
    let line = vec!["v"; 999].join(", ");

    assert_eq!(parse_row(&line).len(), 999);
}

#[test]
fn test_parse_terminates_on_dense_quote_noise() {
    // Nothing here is well-formed; parsing must still finish with a finite row.
    let line = "\"".repeat(500) + &",\"x".repeat(300);
    let cells = parse_row(&line);

    assert!(cells.len() <= 1000);
}

// ============================================================================
// Round-trip property for plain rows
// ============================================================================

#[test]
fn test_unquoted_row_survives_comma_join_reparse() {
    let rows = [
        vec!["one", "two", "three"],
        vec!["a"],
        vec!["x", "", "z"],
        vec!["42", "94", "1337"],
    ];

    for row in rows {
        let joined = row.join(",");
        assert_eq!(parse_row(&joined), row, "row {:?}", row);
    }
}

//! Lenient CSV tokenization
//!
//! A forgiving, zero-copy parser for comma-separated mockup data. Unlike the
//! RFC 4180 path in [`crate::strict`], this grammar never fails: malformed
//! quoting degrades to literal text, blank lines stay in the table as empty
//! rows, and a per-row cell cap bounds the work done on pathological input.
//!
//! The grammar, informally:
//! - rows are separated by runs of `\n`/`\r` (no newlines inside cells),
//! - unquoted cells are trimmed and end at the next comma,
//! - quoted cells start at `"` and end at the next `"` not preceded by a
//!   backslash; their content is kept verbatim (escapes are not rewritten),
//! - text between a closing quote and the next comma is discarded.
//!
//! All returned cells and remainders borrow from the input string.

/// Upper bound on cells extracted from a single row. Parsing stops silently
/// once a row reaches it.
const MAX_CELLS_PER_ROW: usize = 1000;

/// Split raw text into trimmed lines.
///
/// A run of consecutive newline characters (`\n` or `\r`, in any mix) counts
/// as a single break, so CRLF input produces no phantom empty lines between
/// rows. Breaks at the very start or end of the text still yield empty
/// entries, and `split_rows("")` is `[""]`.
pub fn split_rows(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut rows = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            rows.push(text[start..i].trim());
            while i < bytes.len() && (bytes[i] == b'\n' || bytes[i] == b'\r') {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }

    rows.push(text[start..].trim());
    rows
}

/// Extract the next cell assuming it is unquoted.
///
/// Returns the trimmed text before the first comma plus the trimmed tail
/// after it, or `None` for the tail when nothing follows the comma. A line
/// without commas is a single cell. Whitespace-only input has no cell to
/// give and returns `None`; nothing else can make this tokenizer fail.
pub fn next_unquoted_cell(line: &str) -> Option<(&str, Option<&str>)> {
    if line.trim().is_empty() {
        return None;
    }

    match line.find(',') {
        Some(comma) => {
            let cell = line[..comma].trim();
            let rest = line[comma + 1..].trim();
            if rest.is_empty() {
                Some((cell, None))
            } else {
                Some((cell, Some(rest)))
            }
        }
        None => Some((line.trim(), None)),
    }
}

/// Extract the next cell assuming it is quoted.
///
/// Returns `None` unless the trimmed line starts with a double quote and a
/// closing quote exists; callers fall back to [`next_unquoted_cell`], which
/// then treats the stray quote as literal text. The content between the
/// quotes is returned verbatim: it is not trimmed, and a `\"` sequence does
/// not close the cell but keeps its backslash in the output. Any text
/// between the closing quote and the next comma is dropped.
pub fn next_quoted_cell(line: &str) -> Option<(&str, Option<&str>)> {
    let interior = line.trim().strip_prefix('"')?;
    let close = closing_quote(interior)?;

    let cell = &interior[..close];
    let after = &interior[close + 1..];

    let rest = match after.find(',') {
        Some(comma) => {
            let rest = after[comma + 1..].trim();
            if rest.is_empty() {
                None
            } else {
                Some(rest)
            }
        }
        None => None,
    };

    Some((cell, rest))
}

/// Byte offset of the first `"` not immediately preceded by a backslash.
fn closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b'"' && (i == 0 || bytes[i - 1] != b'\\'))
}

/// Parse one line into its cells.
///
/// Tries the quoted tokenizer first, falls back to the unquoted one, and
/// repeats on the remainder until the line is exhausted or neither tokenizer
/// matches. Rows are capped at [`MAX_CELLS_PER_ROW`] cells; past the cap the
/// rest of the line is dropped without signalling. Blank lines produce no
/// cells.
pub fn parse_row(line: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut remaining = line.trim();

    for _ in 0..MAX_CELLS_PER_ROW {
        if remaining.is_empty() {
            break;
        }

        match next_quoted_cell(remaining).or_else(|| next_unquoted_cell(remaining)) {
            Some((cell, rest)) => {
                cells.push(cell);
                remaining = rest.unwrap_or("");
            }
            None => break,
        }
    }

    cells
}

/// Parse raw CSV text into rows of cells.
///
/// Every line from [`split_rows`] contributes one row, in input order; blank
/// lines stay in the table as empty rows. Rows may be ragged. Empty input
/// yields an empty table.
pub fn parse_table(text: &str) -> Vec<Vec<&str>> {
    if text.is_empty() {
        return Vec::new();
    }

    split_rows(text).into_iter().map(parse_row).collect()
}

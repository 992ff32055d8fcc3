//! Table data model
//!
//! Owned result types shared by both parsers: [`Table`] holds parsed rows,
//! [`Delimiter`] names the separators the strict parser understands.

use serde::Serialize;

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Parsed table of rows and cells
///
/// Rows keep their input order and may be ragged; the column count is the
/// width of the widest row. Cell access is bounds-safe: anything outside the
/// stored rows reads as the empty string. Serializes as its rows, an array
/// of arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Vec<String>>,
    /// Number of columns (max across all rows)
    #[serde(skip)]
    column_count: usize,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from parsed rows
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);

        Self { rows, column_count }
    }

    /// Parse text with the lenient grammar and take ownership of the cells
    pub fn from_csv(text: &str) -> Self {
        let rows = crate::lenient::parse_table(text)
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();

        Self::from_rows(rows)
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get cell value at position, or `""` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(|cell| cell.as_str())
            .unwrap_or("")
    }

    /// All rows in input order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get entire row as iterator over cells
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &str> {
        self.rows
            .get(row)
            .map(|cells| cells.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|cell| cell.as_str())
    }

    /// Calculate display column widths based on content
    ///
    /// Widths are clamped to [4, 40] characters and only the first 100 rows
    /// are scanned, which keeps previews of large tables cheap.
    pub fn column_widths(&self) -> Vec<usize> {
        const MIN_WIDTH: usize = 4;
        const MAX_WIDTH: usize = 40;

        let mut widths = vec![MIN_WIDTH; self.column_count];

        for row in self.rows.iter().take(100) {
            for (col, cell) in row.iter().enumerate() {
                if col < widths.len() {
                    let cell_width = cell.chars().count();
                    widths[col] = widths[col].max(cell_width).min(MAX_WIDTH);
                }
            }
        }

        widths
    }
}

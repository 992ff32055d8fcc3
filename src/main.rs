//! tablecsv command-line harness
//!
//! Reads CSV text from a file or stdin, parses it with the forgiving grammar
//! (default) or strict RFC 4180 (`--strict`), and prints the table as
//! aligned text or JSON.
//!
//! Usage:
//!   tablecsv samples/people.csv
//!   tablecsv --json --header samples/people.csv
//!   cat data.tsv | tablecsv --strict --delimiter tab

use anyhow::{Context, Result};
use clap::Parser;

use tablecsv::cli::{CliArgs, InputSource, OutputFormat, ParseMode};
use tablecsv::model::Table;
use tablecsv::strict::parse_strict;

fn main() -> Result<()> {
    tablecsv::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let content = config.read_input().with_context(|| match &config.input {
        InputSource::File(path) => format!("Failed to read {}", path.display()),
        InputSource::Stdin => "Failed to read stdin".to_string(),
    })?;

    let table = match config.mode {
        ParseMode::Lenient => Table::from_csv(&content),
        ParseMode::Strict(choice) => {
            let delimiter = choice.resolve(config.input.path(), &content);
            tracing::debug!("strict parse with {:?} delimiter", delimiter);
            parse_strict(&content, delimiter)?
        }
    };

    if table.is_empty() || table.column_count() == 0 {
        tracing::warn!("parsing produced an empty table");
    }

    match config.output {
        OutputFormat::Json => print_json(&table, config.header)?,
        OutputFormat::Aligned => print_aligned(&table, config.header),
    }

    Ok(())
}

/// Print the table as pretty JSON
///
/// Plain tables print as their rows (array of arrays). With `--header`
/// each data row becomes an object keyed by the header cells.
fn print_json(table: &Table, header: bool) -> Result<()> {
    if header && !table.is_empty() {
        println!("{}", serde_json::to_string_pretty(&header_objects(table))?);
    } else {
        println!("{}", serde_json::to_string_pretty(table)?);
    }
    Ok(())
}

/// Turn data rows into JSON objects keyed by the header row
fn header_objects(table: &Table) -> Vec<serde_json::Value> {
    let keys: Vec<&str> = table.row_cells(0).collect();

    table
        .rows()
        .iter()
        .skip(1)
        .map(|row| {
            let fields: serde_json::Map<String, serde_json::Value> = keys
                .iter()
                .enumerate()
                .map(|(col, key)| {
                    let cell = row.get(col).map(|c| c.as_str()).unwrap_or("");
                    let value = serde_json::Value::String(cell.to_string());
                    ((*key).to_string(), value)
                })
                .collect();
            serde_json::Value::Object(fields)
        })
        .collect()
}

/// Print the table with cells padded to per-column display widths
fn print_aligned(table: &Table, header: bool) {
    let widths = table.column_widths();

    for (row_idx, row) in table.rows().iter().enumerate() {
        println!("{}", format_row(row, &widths));

        if header && row_idx == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            println!("{}", rule.join("  "));
        }
    }
}

/// Pad each cell to its column width, two spaces between columns
fn format_row(row: &[String], widths: &[usize]) -> String {
    let mut line = String::new();

    for (col, &width) in widths.iter().enumerate() {
        if col > 0 {
            line.push_str("  ");
        }

        let cell = row.get(col).map(|c| c.as_str()).unwrap_or("");
        line.push_str(cell);
        for _ in cell.chars().count()..width {
            line.push(' ');
        }
    }

    line.trim_end().to_string()
}

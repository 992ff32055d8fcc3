//! Command-line argument parsing for the tablecsv binary
//!
//! Supports:
//! - Reading CSV text from a file or stdin
//! - Lenient (default) or strict RFC 4180 parsing
//! - Delimiter selection for strict mode, including auto-detection
//! - JSON or aligned-text output

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::model::Delimiter;
use crate::strict::detect_delimiter;

/// Render CSV text as a table
#[derive(Parser, Debug)]
#[command(name = "tablecsv", version, about = "Render CSV text as a table")]
pub struct CliArgs {
    /// CSV file to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Parse with RFC 4180 semantics instead of the forgiving grammar
    #[arg(short, long)]
    pub strict: bool,

    /// Delimiter for strict mode: comma, tab, pipe, semicolon or auto
    #[arg(short, long, value_name = "NAME")]
    pub delimiter: Option<String>,

    /// Emit the table as JSON instead of aligned text
    #[arg(long)]
    pub json: bool,

    /// Treat the first row as a header row
    #[arg(long)]
    pub header: bool,
}

/// Where the CSV text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read everything from standard input
    Stdin,
    /// Read the named file
    File(PathBuf),
}

impl InputSource {
    /// File path when reading from disk
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::File(path) => Some(path),
            InputSource::Stdin => None,
        }
    }
}

/// How the strict-mode delimiter is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterChoice {
    /// Use this delimiter as given
    Fixed(Delimiter),
    /// Map the file extension, falling back to content detection
    Auto,
}

impl DelimiterChoice {
    /// Resolve to a concrete delimiter for the given input
    pub fn resolve(self, path: Option<&Path>, content: &str) -> Delimiter {
        match self {
            DelimiterChoice::Fixed(delimiter) => delimiter,
            DelimiterChoice::Auto => path
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .map(Delimiter::from_extension)
                .unwrap_or_else(|| detect_delimiter(content)),
        }
    }
}

/// Which grammar parses the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// The forgiving comma-only grammar
    Lenient,
    /// RFC 4180 via the csv crate
    Strict(DelimiterChoice),
}

/// How the parsed table is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Cells padded to per-column display widths
    Aligned,
    /// JSON rows (or objects keyed by the header row)
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Where the CSV text comes from
    pub input: InputSource,
    /// Which grammar parses it
    pub mode: ParseMode,
    /// How the table is printed
    pub output: OutputFormat,
    /// Whether the first row is a header
    pub header: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let mode = if self.strict {
            let choice = match self.delimiter.as_deref() {
                None | Some("auto") => DelimiterChoice::Auto,
                Some("comma") => DelimiterChoice::Fixed(Delimiter::Comma),
                Some("tab") => DelimiterChoice::Fixed(Delimiter::Tab),
                Some("pipe") => DelimiterChoice::Fixed(Delimiter::Pipe),
                Some("semicolon") => DelimiterChoice::Fixed(Delimiter::Semicolon),
                Some(other) => return Err(format!("Unknown delimiter '{}'", other)),
            };
            ParseMode::Strict(choice)
        } else {
            if self.delimiter.is_some() {
                return Err("--delimiter requires --strict (the forgiving grammar is comma-only)"
                    .to_string());
            }
            ParseMode::Lenient
        };

        let input = match self.file {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        };

        let output = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Aligned
        };

        Ok(RunConfig {
            input,
            mode,
            output,
            header: self.header,
        })
    }
}

impl RunConfig {
    /// Read the raw CSV text from the configured source
    pub fn read_input(&self) -> std::io::Result<String> {
        match &self.input {
            InputSource::File(path) => std::fs::read_to_string(path),
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

// src/config.rs
use std::path::PathBuf;

use crate::export::EXPORT_DELIMITER;
use crate::process::{DEFAULT_MUNICIPALITY, SOURCE_DELIMITER};

pub const DEFAULT_INPUT: &str = "joblistinfrabel.csv";
pub const DEFAULT_OUTPUT: &str = "cleaned_job_listings.csv";

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub input_delimiter: u8,
    pub output: PathBuf,
    pub output_delimiter: u8,
    pub municipality: String,
    /// Also write the cleaned table as Parquet here.
    pub parquet: Option<PathBuf>,
    /// Write the chart-ready aggregates as JSON here.
    pub report: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            input_delimiter: SOURCE_DELIMITER,
            output: PathBuf::from(DEFAULT_OUTPUT),
            output_delimiter: EXPORT_DELIMITER,
            municipality: DEFAULT_MUNICIPALITY.to_string(),
            parquet: None,
            report: None,
        }
    }
}

/// Parse a single-byte ASCII delimiter; `\t` and `tab` mean a tab.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    if s == "\\t" || s == "tab" {
        return Ok(b'\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s)),
    }
}

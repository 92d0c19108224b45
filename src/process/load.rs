// src/process/load.rs
use csv::{ByteRecord, ErrorKind, ReaderBuilder};
use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader},
    path::Path,
};
use tracing::{debug, instrument};

use crate::error::{PipelineError, Result, Stage};
use crate::table::{Row, Table};

/// Delimiter of the published vacancy export.
pub const SOURCE_DELIMITER: u8 = b';';

/// Read a delimited file with a header line into a [`Table`].
///
/// Empty fields become nulls. A record whose field count differs from the
/// header's is reported as [`PipelineError::MalformedRow`].
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_table<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PipelineError::FileAccess {
        stage: Stage::Load,
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(BufReader::new(file));

    let raw_headers: Vec<String> = rdr
        .byte_headers()
        .map_err(|e| read_error(path, e))?
        .iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect();
    let headers = disambiguate_headers(raw_headers);

    let mut rows: Vec<Row> = Vec::new();
    let mut record = ByteRecord::new();
    while rdr
        .read_byte_record(&mut record)
        .map_err(|e| read_error(path, e))?
    {
        rows.push(record.iter().map(decode_cell).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "loaded table");
    Ok(Table::new(headers, rows))
}

fn decode_cell(field: &[u8]) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(field).into_owned())
    }
}

fn read_error(path: &Path, err: csv::Error) -> PipelineError {
    match err.kind() {
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => PipelineError::MalformedRow {
            path: path.to_path_buf(),
            line: pos.as_ref().map_or(0, |p| p.line()),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        ErrorKind::Io(e) => PipelineError::FileAccess {
            stage: Stage::Load,
            path: path.to_path_buf(),
            source: io::Error::new(e.kind(), e.to_string()),
        },
        _ => PipelineError::Csv {
            stage: Stage::Load,
            path: path.to_path_buf(),
            source: err,
        },
    }
}

/// Give repeated labels a numeric suffix: the second `Type` becomes
/// `Type.1`, the third `Type.2`. Suffixes skip labels already in use.
pub fn disambiguate_headers(raw: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for label in raw {
        if taken.insert(label.clone()) {
            out.push(label);
            continue;
        }
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{}.{}", label, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(renamed.clone());
        out.push(renamed);
    }
    out
}

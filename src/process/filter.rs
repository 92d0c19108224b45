// src/process/filter.rs
use tracing::{info, instrument, warn};

use crate::error::{Result, Stage};
use crate::table::{columns, Table};

/// Municipality the analysis focuses on.
pub const DEFAULT_MUNICIPALITY: &str = "Bruxelles";

/// Rows whose `column` equals `value` exactly. Nulls never match.
pub fn filter_eq(table: &Table, column: &str, value: &str) -> Result<Table> {
    let idx = table.column_index(column, Stage::Filter)?;
    Ok(table.select(|row| row[idx].as_deref() == Some(value)))
}

/// Rows located in `municipality`, compared without any case or whitespace folding.
#[instrument(level = "info", skip(table), fields(rows_in = table.len()))]
pub fn filter_municipality(table: &Table, municipality: &str) -> Result<Table> {
    let out = filter_eq(table, columns::MUNICIPALITY, municipality)?;
    if out.is_empty() {
        warn!(municipality, "no rows matched");
    } else {
        info!(rows_out = out.len(), "filtered");
    }
    Ok(out)
}

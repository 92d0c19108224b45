// src/process/clean.rs
use std::collections::HashSet;
use tracing::{debug, instrument};

use crate::error::{Result, Stage};
use crate::table::{Row, Table};

/// Rows where `column` holds a value.
#[instrument(level = "debug", skip(table), fields(rows_in = table.len()))]
pub fn drop_nulls(table: &Table, column: &str) -> Result<Table> {
    let idx = table.column_index(column, Stage::Clean)?;
    let out = table.select(|row| row[idx].is_some());
    debug!(dropped = table.len() - out.len(), "dropped null rows");
    Ok(out)
}

/// Rows where `column` is null; the complement of [`drop_nulls`].
pub fn null_rows(table: &Table, column: &str) -> Result<Table> {
    let idx = table.column_index(column, Stage::Clean)?;
    Ok(table.select(|row| row[idx].is_none()))
}

/// For each row, whether an earlier row is equal to it in every field.
pub fn duplicated(table: &Table) -> Vec<bool> {
    let mut seen: HashSet<&Row> = HashSet::with_capacity(table.len());
    table.rows().iter().map(|row| !seen.insert(row)).collect()
}

/// Collapse full-row duplicates, keeping the first occurrence in place.
///
/// Every field takes part in the comparison, geocoding columns included,
/// so two postings that differ only in `GeoShape` are both kept.
#[instrument(level = "debug", skip(table), fields(rows_in = table.len()))]
pub fn deduplicate(table: &Table) -> Table {
    let flags = duplicated(table);
    let mut flags = flags.into_iter();
    let out = table.select(|_| !flags.next().unwrap_or(false));
    debug!(removed = table.len() - out.len(), "deduplicated");
    out
}

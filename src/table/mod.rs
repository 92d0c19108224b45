// src/table/mod.rs
pub mod arrow;
pub mod columns;

use crate::error::{PipelineError, Result, Stage};

/// One record: a cell per column, `None` where the source field was empty.
pub type Row = Vec<Option<String>>;

/// An in-memory table of string cells.
///
/// Stages never mutate a `Table`; they derive a new one, so the loaded table
/// stays available for auditing after the cleaned table is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column labels, in file order.
    headers: Vec<String>,
    /// Rows, each with exactly `headers.len()` cells.
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Position of `name` among the headers, or `ColumnNotFound` tagged with `stage`.
    pub fn column_index(&self, name: &str, stage: Stage) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PipelineError::ColumnNotFound {
                stage,
                column: name.to_string(),
            })
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows.iter().map(move |r| r[idx].as_deref())
    }

    /// Same rows under new labels.
    pub fn with_headers(&self, headers: Vec<String>) -> Table {
        debug_assert_eq!(headers.len(), self.headers.len());
        Table::new(headers, self.rows.clone())
    }

    /// Sub-table of the rows for which `keep` returns true, in order.
    pub fn select<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Row) -> bool,
    {
        let rows = self.rows.iter().filter(|r| keep(r)).cloned().collect();
        Table::new(self.headers.clone(), rows)
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table::new(
            self.headers.clone(),
            self.rows.iter().take(n).cloned().collect(),
        )
    }

    /// Number of null cells per column, in column order.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), self.column(i).filter(Option::is_none).count()))
            .collect()
    }
}

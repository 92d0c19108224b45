// src/process/aggregate.rs
use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeMap};
use tracing::instrument;

use crate::error::{Result, Stage};
use crate::table::{columns, Table};

/// Row count per grouping key, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregateCount(BTreeMap<String, usize>);

impl AggregateCount {
    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Highest count first; equal counts by key.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = self.iter().collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }
}

impl FromIterator<(String, usize)> for AggregateCount {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Count rows per distinct value of `column`. Null keys are not counted.
pub fn count_by(table: &Table, column: &str) -> Result<AggregateCount> {
    let idx = table.column_index(column, Stage::Aggregate)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for key in table.column(idx).flatten() {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    Ok(AggregateCount(counts))
}

/// Stable sort on `column`, ascending by string, nulls last.
pub fn sort_by_column(table: &Table, column: &str) -> Result<Table> {
    let idx = table.column_index(column, Stage::Aggregate)?;
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| match (&a[idx], &b[idx]) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    Ok(Table::new(table.headers().to_vec(), rows))
}

/// Postings per Dutch job title.
#[instrument(level = "debug", skip(table))]
pub fn count_by_title(table: &Table) -> Result<AggregateCount> {
    count_by(table, columns::JOB_TITLE_NL)
}

/// Postings per publication date, oldest date first.
///
/// Dates stay opaque strings; "oldest" is lexical order, which matches
/// calendar order for the `YYYY-MM-DD` dates in the export.
#[instrument(level = "debug", skip(table))]
pub fn count_by_date(table: &Table) -> Result<AggregateCount> {
    let sorted = sort_by_column(table, columns::PUBLICATION_DATE)?;
    let idx = sorted.column_index(columns::PUBLICATION_DATE, Stage::Aggregate)?;

    let mut runs: Vec<(String, usize)> = Vec::new();
    for date in sorted.column(idx).flatten() {
        if let Some((last, n)) = runs.last_mut() {
            if last.as_str() == date {
                *n += 1;
                continue;
            }
        }
        runs.push((date.to_string(), 1));
    }
    Ok(runs.into_iter().collect())
}

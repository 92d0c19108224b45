// src/pipeline.rs
use tracing::{debug, info, instrument};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::export::{self, Report};
use crate::process::{self, AggregateCount};
use crate::table::{columns, Table};

/// Every table a run derives, plus its aggregates.
///
/// Earlier stages are kept so callers can audit them (null counts of the
/// loaded table, rows lost to the municipality filter, ...).
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub loaded: Table,
    pub normalized: Table,
    pub filtered: Table,
    pub titled: Table,
    pub cleaned: Table,
    pub by_title: AggregateCount,
    pub by_date: AggregateCount,
}

/// Normalize, filter, clean and aggregate an already loaded table.
#[instrument(level = "info", skip(loaded), fields(rows = loaded.len()))]
pub fn transform(loaded: Table, municipality: &str) -> Result<PipelineOutcome> {
    let normalized = process::normalize(&loaded);
    process::ensure_columns(&normalized, &columns::REQUIRED)?;

    let filtered = process::filter_municipality(&normalized, municipality)?;
    let titled = process::drop_nulls(&filtered, columns::JOB_TITLE_NL)?;
    let cleaned = process::deduplicate(&titled);
    info!(
        filtered = filtered.len(),
        titled = titled.len(),
        cleaned = cleaned.len(),
        "cleaned"
    );

    let by_title = process::count_by_title(&cleaned)?;
    let by_date = process::count_by_date(&cleaned)?;
    debug!(titles = by_title.len(), dates = by_date.len(), "aggregated");

    Ok(PipelineOutcome {
        loaded,
        normalized,
        filtered,
        titled,
        cleaned,
        by_title,
        by_date,
    })
}

/// Load `config.input`, run every stage and write the configured outputs.
#[instrument(level = "info", skip(config), fields(input = %config.input.display()))]
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let loaded = process::load_table(&config.input, config.input_delimiter)?;
    for (column, nulls) in loaded.null_counts() {
        debug!(column = %column, nulls, "null count");
    }

    let outcome = transform(loaded, &config.municipality)?;

    export::write_csv(&outcome.cleaned, &config.output, config.output_delimiter)?;
    if let Some(path) = &config.parquet {
        export::write_parquet(&outcome.cleaned, path)?;
    }
    if let Some(path) = &config.report {
        let report = Report::new(
            &config.municipality,
            outcome.cleaned.len(),
            &outcome.by_title,
            &outcome.by_date,
        );
        export::write_report(&report, path)?;
    }

    info!(rows = outcome.cleaned.len(), "pipeline finished");
    Ok(outcome)
}

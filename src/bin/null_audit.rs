use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use vacancies::{
    config::DEFAULT_INPUT,
    process::{
        clean::null_rows, filter_municipality, load_table, normalize, DEFAULT_MUNICIPALITY,
        SOURCE_DELIMITER,
    },
    table::columns,
};

const PREVIEW_ROWS: usize = 5;

/// Print null counts per column, for the whole export and for one municipality.
///
/// Usage: `null_audit [INPUT] [MUNICIPALITY]`
fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let municipality = args
        .next()
        .unwrap_or_else(|| DEFAULT_MUNICIPALITY.to_string());

    let loaded = load_table(&input, SOURCE_DELIMITER)
        .with_context(|| format!("loading {}", input.display()))?;
    let table = normalize(&loaded);
    let local = filter_municipality(&table, &municipality)?;

    println!("{:<28} {:>8} {:>8}", "column", "all", municipality);
    for ((column, all), (_, here)) in table.null_counts().into_iter().zip(local.null_counts()) {
        println!("{column:<28} {all:>8} {here:>8}");
    }
    println!("{:<28} {:>8} {:>8}", "rows", table.len(), local.len());

    let missing = null_rows(&local, columns::JOB_TITLE_NL)?;
    tracing::info!(
        rows = missing.len(),
        "{} postings in {} lack a Dutch job title",
        missing.len(),
        municipality
    );

    // preview of the postings that will be dropped
    let preview = missing.head(PREVIEW_ROWS);
    let shown: Vec<usize> = [columns::JOB_ID, columns::JOB_TITLE_FR, columns::PUBLICATION_DATE]
        .iter()
        .filter_map(|c| preview.headers().iter().position(|h| h == c))
        .collect();
    for row in preview.rows() {
        let cells: Vec<&str> = shown
            .iter()
            .map(|&i| row[i].as_deref().unwrap_or("-"))
            .collect();
        println!("  {}", cells.join(" | "));
    }
    if missing.len() > preview.len() {
        println!("  ... {} more", missing.len() - preview.len());
    }
    Ok(())
}

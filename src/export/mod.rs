// src/export/mod.rs
pub mod parquet;
pub mod report;

use csv::WriterBuilder;
use std::{
    fs::File,
    io::BufWriter,
    path::Path,
};
use tracing::{info, instrument};

use crate::error::{PipelineError, Result, Stage};
use crate::table::Table;

pub use self::parquet::write_parquet;
pub use report::{write_report, ChartSeries, Report};

/// Delimiter of the cleaned export.
pub const EXPORT_DELIMITER: u8 = b',';

/// Write `table` as delimited text: header line, one line per row, no index
/// column. Nulls become empty fields. An existing file is replaced.
#[instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display(), rows = table.len()))]
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let access = |source| PipelineError::FileAccess {
        stage: Stage::Export,
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source| PipelineError::Csv {
        stage: Stage::Export,
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(access)?;
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(BufWriter::new(file));

    wtr.write_record(table.headers()).map_err(csv_err)?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))
            .map_err(csv_err)?;
    }

    wtr.flush().map_err(access)?;

    info!("wrote cleaned table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::load::load_table;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Table {
        Table::new(
            vec!["JobTitleNL".into(), "Address".into(), "GeoShape".into()],
            vec![
                vec![
                    Some("Technieker".into()),
                    Some("Rue de France, 85".into()),
                    Some("{\"type\": \"Point\"}".into()),
                ],
                vec![Some("Planner".into()), None, Some("x".into())],
            ],
        )
    }

    #[test]
    fn test_write_then_load_round_trips() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cleaned_job_listings.csv");
        let table = sample();

        write_csv(&table, &path, EXPORT_DELIMITER)?;
        let back = load_table(&path, EXPORT_DELIMITER)?;
        assert_eq!(back, table);
        Ok(())
    }

    #[test]
    fn test_header_and_no_index_column() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        write_csv(&sample(), &path, EXPORT_DELIMITER)?;

        let text = fs::read_to_string(&path)?;
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("JobTitleNL,Address,GeoShape"));
        assert_eq!(lines.nth(1), Some("Planner,,x"));
        Ok(())
    }

    #[test]
    fn test_overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is longer than the export\n".repeat(10))?;

        let empty = Table::new(vec!["JobTitleNL".into()], vec![]);
        write_csv(&empty, &path, EXPORT_DELIMITER)?;
        assert_eq!(fs::read_to_string(&path)?, "JobTitleNL\n");
        Ok(())
    }

    #[test]
    fn test_unwritable_destination() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing").join("out.csv");
        let err = write_csv(&sample(), &path, EXPORT_DELIMITER).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::FileAccess {
                stage: Stage::Export,
                ..
            }
        ));
        Ok(())
    }
}

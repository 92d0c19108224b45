// src/export/parquet.rs
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use std::{fs::File, path::Path};
use tracing::{info, instrument};

use crate::error::{PipelineError, Result, Stage};
use crate::table::{arrow::to_record_batch, Table};

/// Write `table` as a single-row-group Parquet file, every column nullable Utf8.
#[instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display(), rows = table.len()))]
pub fn write_parquet<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let batch = to_record_batch(table)?;

    let file = File::create(path).map_err(|source| PipelineError::FileAccess {
        stage: Stage::Export,
        path: path.to_path_buf(),
        source,
    })?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    info!("wrote parquet");
    Ok(())
}

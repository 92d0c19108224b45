// src/table/arrow.rs

use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use super::Table;
use crate::error::Result;

/// Arrow schema for a table: every column nullable Utf8.
pub fn build_arrow_schema(table: &Table) -> Schema {
    Schema::new(
        table
            .headers()
            .iter()
            .map(|h| Field::new(h, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    )
}

/// Convert a table into a single record batch, nulls preserved.
pub fn to_record_batch(table: &Table) -> Result<RecordBatch> {
    let schema = Arc::new(build_arrow_schema(table));
    let columns: Vec<ArrayRef> = (0..table.headers().len())
        .map(|i| Arc::new(table.column(i).collect::<StringArray>()) as ArrayRef)
        .collect();
    Ok(RecordBatch::try_new(schema, columns)?)
}

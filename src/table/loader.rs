use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, Float32Array, Float64Array, LargeStringArray, StringArray};
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;

use crate::schema::{columns, validate_schema, SchemaValidationError};

use super::{LoadError, QuantTable};

/// Rows per record batch while materializing the table
const BATCH_SIZE: usize = 65_536;

impl QuantTable {
    /// Load a quantification table from a Parquet file.
    ///
    /// The file schema is validated against [`columns::REQUIRED_COLUMNS`]
    /// before any data is read, and the read is projected to exactly those
    /// columns; a full DIA-NN report carries dozens more that are never
    /// touched.
    pub fn load(path: impl AsRef<Path>) -> Result<QuantTable, LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        validate_schema(builder.schema())?;

        let indices: Vec<usize> = builder
            .schema()
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, field)| columns::REQUIRED_COLUMNS.contains(&field.name().as_str()))
            .map(|(index, _)| index)
            .collect();
        let projection = ProjectionMask::roots(builder.parquet_schema(), indices);

        let reader = builder
            .with_projection(projection)
            .with_batch_size(BATCH_SIZE)
            .build()?;

        let mut table = QuantTable::default();
        for batch in reader {
            append_batch(&mut table, &batch?)?;
        }

        info!("loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }
}

fn append_batch(table: &mut QuantTable, batch: &RecordBatch) -> Result<(), LoadError> {
    extend_strings(&mut table.run, batch, columns::RUN)?;
    extend_strings(&mut table.protein_group, batch, columns::PROTEIN_GROUP)?;
    extend_floats(&mut table.pg_maxlfq, batch, columns::PG_MAXLFQ)?;
    extend_strings(&mut table.precursor_id, batch, columns::PRECURSOR_ID)?;
    extend_floats(
        &mut table.precursor_normalised,
        batch,
        columns::PRECURSOR_NORMALISED,
    )?;
    extend_floats(
        &mut table.precursor_quantity,
        batch,
        columns::PRECURSOR_QUANTITY,
    )?;
    extend_strings(&mut table.stripped_sequence, batch, columns::STRIPPED_SEQUENCE)?;
    extend_strings(&mut table.modified_sequence, batch, columns::MODIFIED_SEQUENCE)?;
    extend_strings(&mut table.genes, batch, columns::GENES)?;
    Ok(())
}

/// Append a string column, accepting Utf8 or LargeUtf8 source data.
fn extend_strings(
    dst: &mut Vec<Option<String>>,
    batch: &RecordBatch,
    name: &str,
) -> Result<(), LoadError> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| SchemaValidationError::MissingColumn(name.to_string()))?;

    if let Some(array) = column.as_any().downcast_ref::<StringArray>() {
        dst.extend((0..array.len()).map(|i| array.is_valid(i).then(|| array.value(i).to_string())));
        Ok(())
    } else if let Some(array) = column.as_any().downcast_ref::<LargeStringArray>() {
        dst.extend((0..array.len()).map(|i| array.is_valid(i).then(|| array.value(i).to_string())));
        Ok(())
    } else {
        Err(LoadError::ColumnType {
            column: name.to_string(),
            expected: "utf8",
            actual: column.data_type().to_string(),
        })
    }
}

/// Append a numeric column, widening Float32 source data to f64.
fn extend_floats(
    dst: &mut Vec<Option<f64>>,
    batch: &RecordBatch,
    name: &str,
) -> Result<(), LoadError> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| SchemaValidationError::MissingColumn(name.to_string()))?;

    if let Some(array) = column.as_any().downcast_ref::<Float64Array>() {
        dst.extend((0..array.len()).map(|i| array.is_valid(i).then(|| array.value(i))));
        Ok(())
    } else if let Some(array) = column.as_any().downcast_ref::<Float32Array>() {
        dst.extend((0..array.len()).map(|i| array.is_valid(i).then(|| array.value(i) as f64)));
        Ok(())
    } else {
        Err(LoadError::ColumnType {
            column: name.to_string(),
            expected: "float",
            actual: column.data_type().to_string(),
        })
    }
}

/// Memoization cache for loaded quantification tables, keyed by path.
///
/// The cache is an explicit value owned by the caller rather than process
/// global state, so its lifetime is caller-controlled and tests can reset
/// it between cases. It grows with the number of distinct paths loaded and
/// has no eviction; the expected table set per process is small and fixed.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: HashMap<PathBuf, Arc<QuantTable>>,
}

impl TableCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table, returning the cached copy when the same path was
    /// loaded before. The returned table is shared read-only.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Arc<QuantTable>, LoadError> {
        let key = path.as_ref().to_path_buf();
        if let Some(table) = self.tables.get(&key) {
            debug!("table cache hit: {}", key.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(QuantTable::load(&key)?);
        self.tables.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every cached table
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

use crate::schema::SchemaValidationError;

/// Errors that can occur while loading a quantification table
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Arrow error
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// Required column missing from the file schema
    #[error(transparent)]
    SchemaError(#[from] SchemaValidationError),

    /// Column present but with an unusable Arrow type
    #[error("column '{column}' has unexpected type {actual} (expected {expected})")]
    ColumnType {
        /// Column name
        column: String,
        /// Acceptable type family
        expected: &'static str,
        /// Type found in the file
        actual: String,
    },
}

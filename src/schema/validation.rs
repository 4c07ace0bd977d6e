use arrow::datatypes::Schema;

use super::columns::REQUIRED_COLUMNS;

/// Error raised when a quantification table schema is unusable
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// A required column is absent from the file schema
    #[error("required column not found: {0}")]
    MissingColumn(String),
}

/// Check that an Arrow schema carries every required quantification column.
///
/// Only presence is checked here; per-column type coercion (Float32 vs
/// Float64, Utf8 vs LargeUtf8) is handled during materialization.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaValidationError> {
    for name in REQUIRED_COLUMNS {
        if schema.field_with_name(name).is_err() {
            return Err(SchemaValidationError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

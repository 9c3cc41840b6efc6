//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry and validators.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// Text could not be parsed as JSON.
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed {
        /// Individual error messages from the validator, prefixed with the
        /// JSON pointer of the offending value.
        errors: Vec<String>,
    },

    /// Value passed the schema but could not be deserialized into the target type.
    #[error("Deserialization failed: {0}")]
    Deserialize(String),

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

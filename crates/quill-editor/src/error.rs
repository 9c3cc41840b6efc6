//! Operation error types.

use quill_core::CoreError;
use quill_genai::GenerationError;
use quill_schema::SchemaError;
use thiserror::Error;

/// Errors returned by the editorial operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The request failed boundary checks. Never retried.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),

    /// The generator failed, or its output stayed invalid after repair.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A response schema could not be compiled.
    #[error("schema setup failed: {0}")]
    Schema(#[from] SchemaError),
}

impl EditorError {
    /// Whether the caller is at fault (4xx) rather than the service (5xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

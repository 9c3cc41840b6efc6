//! Generation error types.

use thiserror::Error;

/// Errors from a single call to the text-generation service.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The service answered but produced no text (blocked or empty candidate).
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// Failed to decode the service envelope.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Terminal failure of a structured generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service could not be reached or rejected the call.
    #[error("generation service error: {0}")]
    Service(#[from] GenAiError),

    /// Both the original answer and the single repair answer failed to
    /// parse or to satisfy the schema.
    #[error("output for '{schema}' did not match the schema after repair: {reason}")]
    RepairFailed {
        /// Registry name of the expected shape.
        schema: &'static str,
        /// Parse or validation message of the repair answer.
        reason: String,
    },
}

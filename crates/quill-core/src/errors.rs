//! Cross-cutting error types for Quill.
//!
//! Domain-specific errors (`SchemaError`, `GenerationError`, ...) are defined
//! in their respective crates. `quill-cli` converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while checking request payloads at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required text field was absent or blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The prompt chain exceeds the accepted size.
    #[error("Prompt chain is too long (max 200k chars): got {len} characters, limit is {max}")]
    ChainTooLong { len: usize, max: usize },
}

//! # quill-editor
//!
//! The three editorial operations over a prompt chain:
//!
//! - **analyze**: digest, claim map, and three framing options
//! - **draft**: a full article for a chosen option, with SEO metadata, a
//!   research checklist, and source placeholders
//! - **rewrite**: a revised article body for a free-text instruction
//!
//! Each operation checks its request, composes a prompt, and delegates to
//! [`quill_genai::StructuredClient`] with the matching response schema.
//! Operations are stateless: nothing is kept between calls.

mod analyze;
mod draft;
mod error;
mod placeholders;
mod prompts;
mod rewrite;

pub use analyze::compose_analyze_prompt;
pub use draft::compose_draft_prompt;
pub use error::EditorError;
pub use placeholders::source_placeholders;
pub use rewrite::compose_rewrite_prompt;

use std::sync::Arc;

use quill_core::entities::{AnalysisResult, DraftResult, RewriteResult};
use quill_genai::{StructuredClient, TextGenerator};
use quill_schema::SchemaValidator;

/// Prompt composition switches for the draft operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftSettings {
    /// Render the `length` constraint into the drafting prompt.
    pub include_length: bool,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            include_length: true,
        }
    }
}

impl From<&quill_config::DraftConfig> for DraftSettings {
    fn from(config: &quill_config::DraftConfig) -> Self {
        Self {
            include_length: config.include_length,
        }
    }
}

/// Entry point for the three operations.
///
/// Build once at start-up with the process-wide generator and share it
/// behind an `Arc`; it holds no per-request state.
#[derive(Debug)]
pub struct Editor {
    client: StructuredClient,
    analysis_schema: SchemaValidator<AnalysisResult>,
    draft_schema: SchemaValidator<DraftResult>,
    rewrite_schema: SchemaValidator<RewriteResult>,
    settings: DraftSettings,
}

impl Editor {
    /// Compile the response validators and wrap `generator`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Schema`] if a response schema fails to compile.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        settings: DraftSettings,
    ) -> Result<Self, EditorError> {
        Ok(Self {
            client: StructuredClient::new(generator),
            analysis_schema: SchemaValidator::new("analysis_result")?,
            draft_schema: SchemaValidator::new("draft_result")?,
            rewrite_schema: SchemaValidator::new("rewrite_result")?,
            settings,
        })
    }
}

//! # quill-genai
//!
//! Text-generation client and schema-enforced structured generation.
//!
//! - [`TextGenerator`]: the external collaborator seam. One prompt in, raw
//!   response text out.
//! - [`GeminiClient`]: `TextGenerator` over the Generative Language REST API.
//! - [`StructuredClient`]: asks for JSON-only output, validates it against a
//!   [`quill_schema::SchemaValidator`], and issues at most one repair call
//!   when the first answer is malformed.

mod api_error;
mod error;
mod gemini;
mod generator;
mod structured;

#[cfg(any(test, feature = "testing"))]
mod scripted;

pub use error::{GenAiError, GenerationError};
pub use gemini::GeminiClient;
pub use generator::{GenerationRequest, TextGenerator};
pub use structured::{Attempt, StructuredClient, repair_prompt};

#[cfg(any(test, feature = "testing"))]
pub use scripted::ScriptedGenerator;

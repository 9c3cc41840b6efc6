//! Schema-enforced structured generation with a single repair round.
//!
//! ```text
//! attempt ─┬─ Valid(T) ───────────────────────────────► Ok(T)
//!          └─ Repairable{raw, reason} ─► repair attempt ─┬─ Valid(T) ─► Ok(T)
//!                                                        └─ Repairable ─► RepairFailed
//! ```
//!
//! Service failures in either phase are terminal. A `generate` call makes at
//! most two requests to the generator.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use quill_schema::SchemaValidator;

use crate::error::GenerationError;
use crate::generator::{GenerationRequest, TextGenerator};

/// Outcome of one generation attempt.
#[derive(Debug)]
pub enum Attempt<T> {
    /// The response parsed and satisfied the schema.
    Valid(T),
    /// The response was not usable; `raw` is the verbatim text and `reason`
    /// the parse or validation message.
    Repairable { raw: String, reason: String },
}

/// Wraps a [`TextGenerator`] and demands schema-valid JSON from it.
///
/// Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct StructuredClient {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for StructuredClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuredClient").finish_non_exhaustive()
    }
}

impl StructuredClient {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate a value of type `T` from `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Service`] if either call fails at the
    /// service, or [`GenerationError::RepairFailed`] if the repair answer is
    /// still not schema-valid JSON.
    pub async fn generate<T>(
        &self,
        prompt: &str,
        schema: &SchemaValidator<T>,
    ) -> Result<T, GenerationError>
    where
        T: JsonSchema + DeserializeOwned + Send,
    {
        debug!(schema = schema.name(), prompt_chars = prompt.len(), "structured generation");

        let (raw, reason) = match self.attempt(prompt.to_owned(), schema).await? {
            Attempt::Valid(value) => return Ok(value),
            Attempt::Repairable { raw, reason } => (raw, reason),
        };

        warn!(
            schema = schema.name(),
            %reason,
            "structured output rejected; sending repair request"
        );
        let repair = repair_prompt(&raw, &reason, schema.schema());

        match self.attempt(repair, schema).await? {
            Attempt::Valid(value) => {
                info!(schema = schema.name(), "repair attempt produced valid output");
                Ok(value)
            }
            Attempt::Repairable { reason, .. } => Err(GenerationError::RepairFailed {
                schema: schema.name(),
                reason,
            }),
        }
    }

    /// One call to the generator, classified against the schema.
    async fn attempt<T>(
        &self,
        prompt: String,
        schema: &SchemaValidator<T>,
    ) -> Result<Attempt<T>, GenerationError>
    where
        T: JsonSchema + DeserializeOwned + Send,
    {
        let raw = self
            .generator
            .generate_text(GenerationRequest::json(prompt))
            .await?;

        Ok(match schema.parse(&raw) {
            Ok(value) => Attempt::Valid(value),
            Err(error) => Attempt::Repairable {
                raw,
                reason: error.to_string(),
            },
        })
    }
}

/// Build the repair prompt for a rejected response.
///
/// Embeds the error message, the expected JSON Schema, and the original
/// response verbatim. The generator keeps no memory between calls, so the
/// prompt must be self-contained.
#[must_use]
pub fn repair_prompt(raw: &str, reason: &str, schema: &serde_json::Value) -> String {
    let schema = serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
    format!(
        "The previous JSON response was invalid or did not match the required schema.\n\
         Error: {reason}\n\
         \n\
         Fix the JSON so it matches this JSON Schema exactly. Keep every value that is \
         already correct. Output ONLY the fixed JSON, with no commentary and no code fences.\n\
         \n\
         JSON Schema:\n\
         {schema}\n\
         \n\
         Original Response:\n\
         {raw}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenAiError;
    use crate::scripted::ScriptedGenerator;
    use pretty_assertions::assert_eq;
    use quill_core::entities::RewriteResult;

    fn validator() -> SchemaValidator<RewriteResult> {
        SchemaValidator::new("rewrite_result").unwrap()
    }

    fn client(generator: &Arc<ScriptedGenerator>) -> StructuredClient {
        StructuredClient::new(generator.clone())
    }

    #[tokio::test]
    async fn valid_first_answer_makes_one_call() {
        let generator = Arc::new(ScriptedGenerator::with_texts([
            r###"{"articleMarkdown": "## Done"}"###,
        ]));
        let result = client(&generator)
            .generate("prompt", &validator())
            .await
            .unwrap();
        assert_eq!(result.article_markdown, "## Done");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_then_valid_is_repaired() {
        let generator = Arc::new(ScriptedGenerator::with_texts([
            "Sure! Here is the JSON: {articleMarkdown: oops",
            r###"{"articleMarkdown": "## Fixed"}"###,
        ]));
        let result = client(&generator)
            .generate("prompt", &validator())
            .await
            .unwrap();
        assert_eq!(result.article_markdown, "## Fixed");

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("Sure! Here is the JSON: {articleMarkdown: oops"));
        assert!(prompts[1].contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn service_error_is_terminal_without_repair() {
        let generator = Arc::new(ScriptedGenerator::new([Err(GenAiError::Api {
            status: 503,
            message: "overloaded".into(),
        })]));
        let err = client(&generator)
            .generate("prompt", &validator())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Service(GenAiError::Api { status: 503, .. })
        ));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn service_error_during_repair_is_terminal() {
        let generator = Arc::new(ScriptedGenerator::new([
            Ok("not json".to_string()),
            Err(GenAiError::RateLimited {
                retry_after_secs: 5,
            }),
        ]));
        let err = client(&generator)
            .generate("prompt", &validator())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Service(GenAiError::RateLimited { .. })
        ));
        assert_eq!(generator.calls(), 2);
    }

    #[test]
    fn repair_prompt_embeds_error_schema_and_original() {
        let schema = serde_json::json!({"type": "object", "required": ["articleMarkdown"]});
        let prompt = repair_prompt(
            "{\"body\": 1}",
            "at /: \"articleMarkdown\" is a required property",
            &schema,
        );
        assert!(prompt.contains("Error: at /: \"articleMarkdown\" is a required property"));
        assert!(prompt.contains("\"required\""));
        assert!(prompt.ends_with("Original Response:\n{\"body\": 1}\n"));
    }
}

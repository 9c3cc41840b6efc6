//! Request payloads accepted by the three editorial operations.
//!
//! JSON Schema (via `quill-schema`) enforces presence and types. The `check`
//! methods add the boundary rules a schema cannot express well: blank
//! required text and the transcript length ceiling measured in characters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::ConstraintSet;
use crate::errors::CoreError;

/// Maximum accepted prompt chain length, in characters.
pub const MAX_CHAIN_CHARS: usize = 200_000;

/// Request for the analyze operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[schemars(length(max = 200000))]
    pub chain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keyword: Option<String>,
}

impl AnalyzeRequest {
    /// Build a request from a transcript and a constraint set.
    #[must_use]
    pub fn new(chain_text: impl Into<String>, constraints: ConstraintSet) -> Self {
        Self {
            chain_text: chain_text.into(),
            audience: constraints.audience,
            tone: constraints.tone,
            length: constraints.length,
            platform: constraints.platform,
            seo_keyword: constraints.seo_keyword,
        }
    }

    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        ConstraintSet {
            audience: self.audience.clone(),
            tone: self.tone.clone(),
            length: self.length.clone(),
            platform: self.platform.clone(),
            seo_keyword: self.seo_keyword.clone(),
        }
    }

    /// Boundary checks: non-blank transcript within the length ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] when the transcript is blank or too long.
    pub fn check(&self) -> Result<(), CoreError> {
        check_chain_text(&self.chain_text)
    }
}

/// Request for the draft operation.
///
/// `option_id` is not cross-checked against any earlier analysis: each
/// operation re-derives its context from the transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[schemars(length(max = 200000))]
    pub chain_text: String,
    pub option_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl DraftRequest {
    /// Build a request from a transcript, an option id and a constraint set.
    ///
    /// The SEO keyword of the constraint set is not part of the draft request.
    #[must_use]
    pub fn new(
        chain_text: impl Into<String>,
        option_id: impl Into<String>,
        constraints: ConstraintSet,
    ) -> Self {
        Self {
            chain_text: chain_text.into(),
            option_id: option_id.into(),
            audience: constraints.audience,
            tone: constraints.tone,
            length: constraints.length,
            platform: constraints.platform,
        }
    }

    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        ConstraintSet {
            audience: self.audience.clone(),
            tone: self.tone.clone(),
            length: self.length.clone(),
            platform: self.platform.clone(),
            seo_keyword: None,
        }
    }

    /// Boundary checks: transcript as for analyze, non-blank option id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] when a required field is blank or the
    /// transcript is too long.
    pub fn check(&self) -> Result<(), CoreError> {
        check_chain_text(&self.chain_text)?;
        require("optionId", &self.option_id)
    }
}

/// Request for the rewrite operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub article_markdown: String,
    pub instruction: String,
}

impl RewriteRequest {
    #[must_use]
    pub fn new(article_markdown: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            article_markdown: article_markdown.into(),
            instruction: instruction.into(),
        }
    }

    /// Boundary checks: both fields must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] naming the first blank field.
    pub fn check(&self) -> Result<(), CoreError> {
        require("articleMarkdown", &self.article_markdown)?;
        require("instruction", &self.instruction)
    }
}

fn check_chain_text(chain_text: &str) -> Result<(), CoreError> {
    require("chainText", chain_text)?;
    let len = chain_text.chars().count();
    if len > MAX_CHAIN_CHARS {
        return Err(CoreError::ChainTooLong {
            len,
            max: MAX_CHAIN_CHARS,
        });
    }
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::MissingField { field })
    } else {
        Ok(())
    }
}

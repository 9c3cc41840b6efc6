use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of the rewrite operation: a complete replacement article body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    /// Must contain at least one non-whitespace character.
    #[schemars(length(min = 1), regex(pattern = r"\S"))]
    pub article_markdown: String,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Claim;

/// SEO metadata proposed for a draft.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub meta_title: String,
    pub meta_description: String,
    pub slug: String,
}

/// A verification task attached to a draft.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchItem {
    pub question: String,
    pub why_it_matters: String,
    pub how_to_verify: String,
}

/// Output of the draft operation.
///
/// `article_markdown` is the only field a later rewrite replaces; the caller
/// keeps everything else.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftResult {
    pub title: String,
    pub lede: String,
    pub article_markdown: String,
    pub seo: SeoMetadata,
    pub research_checklist: Vec<ResearchItem>,
    pub claim_map: Vec<Claim>,
    pub source_placeholders: Vec<String>,
}

impl DraftResult {
    /// Replace the article body with a rewrite, keeping all other fields.
    pub fn apply_rewrite(&mut self, rewrite: super::RewriteResult) {
        self.article_markdown = rewrite.article_markdown;
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AngleKind;

/// One editorial framing offered for a prompt chain.
///
/// `id` is free text on the wire; by prompt convention it is one of
/// `explainer`, `meta`, `research_brief`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Angle {
    pub id: String,
    pub title: String,
    pub thesis: String,
    pub outline: Vec<String>,
    pub best_for: String,
    pub research_to_do: Vec<String>,
    pub sources_to_check: Vec<String>,
    pub keywords: Vec<String>,
}

impl Angle {
    /// The conventional angle this option claims to be, if recognised.
    #[must_use]
    pub fn kind(&self) -> Option<AngleKind> {
        AngleKind::from_id(&self.id)
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Angle, Claim};

/// Output of the analyze operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub topic_title: String,
    pub chain_digest: Vec<String>,
    pub core_question: String,
    pub claim_map: Vec<Claim>,
    /// Exactly three framings.
    #[schemars(length(min = 3, max = 3))]
    pub options: Vec<Angle>,
}

impl AnalysisResult {
    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&Angle> {
        self.options.iter().find(|option| option.id == id)
    }
}

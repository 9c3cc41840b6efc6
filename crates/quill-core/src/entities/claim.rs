use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EvidenceLevel;

/// An assertion extracted from the prompt chain, tagged by evidentiary strength.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub claim: String,
    pub evidence_level: EvidenceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

//! Evidence levels and editorial angles.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the literal strings the generator is instructed to emit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EvidenceLevel
// ---------------------------------------------------------------------------

/// How strongly a claim is supported by the prompt chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceLevel {
    /// Explicitly stated in the conversation.
    FromChain,
    /// Common knowledge context.
    GeneralBackground,
    /// Specific stats, quotes, or bold claims that need external checking.
    NeedsVerification,
}

impl EvidenceLevel {
    pub const ALL: [Self; 3] = [
        Self::FromChain,
        Self::GeneralBackground,
        Self::NeedsVerification,
    ];

    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FromChain => "from_chain",
            Self::GeneralBackground => "general_background",
            Self::NeedsVerification => "needs_verification",
        }
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AngleKind
// ---------------------------------------------------------------------------

/// The three editorial framings the analysis prompt asks for.
///
/// Option ids on the wire stay free text; this enum only recognises the
/// conventional ids so prompts can describe the chosen angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AngleKind {
    Explainer,
    Meta,
    ResearchBrief,
}

impl AngleKind {
    pub const ALL: [Self; 3] = [Self::Explainer, Self::Meta, Self::ResearchBrief];

    /// Return the conventional option id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explainer => "explainer",
            Self::Meta => "meta",
            Self::ResearchBrief => "research_brief",
        }
    }

    /// Recognise a conventional option id (case-insensitive, surrounding
    /// whitespace ignored).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(id))
    }

    /// One-line editorial description used when composing prompts.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Explainer => "Explainer: educational, clear, foundational.",
            Self::Meta => {
                "Meta Analysis: reflective, analyzes the process or the implications of the chain's topic."
            }
            Self::ResearchBrief => {
                "Research Brief: academic/professional, focuses on what is known vs unknown, future directions."
            }
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_level_serializes_to_wire_strings() {
        for level in EvidenceLevel::ALL {
            let json = serde_json::to_value(level).unwrap();
            assert_eq!(json, serde_json::Value::String(level.as_str().to_string()));
        }
    }

    #[test]
    fn evidence_level_rejects_unknown_value() {
        let parsed: Result<EvidenceLevel, _> = serde_json::from_str("\"probably_true\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn angle_kind_recognises_conventional_ids() {
        assert_eq!(AngleKind::from_id("explainer"), Some(AngleKind::Explainer));
        assert_eq!(AngleKind::from_id(" META "), Some(AngleKind::Meta));
        assert_eq!(
            AngleKind::from_id("research_brief"),
            Some(AngleKind::ResearchBrief)
        );
        assert_eq!(AngleKind::from_id("listicle"), None);
    }
}

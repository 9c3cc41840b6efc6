//! Optional editorial constraints supplied with a request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Free-text constraints passed through to prompt composition.
///
/// No field is normalised or enumerated: the values are natural-language
/// hints for the generator. Absent values are replaced with display
/// fallbacks only when a prompt is rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
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

impl ConstraintSet {
    /// Value of `field` or `fallback` when the field is absent or blank.
    #[must_use]
    pub fn or<'a>(field: Option<&'a str>, fallback: &'a str) -> &'a str {
        field
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(fallback)
    }

    #[must_use]
    pub fn audience_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        Self::or(self.audience.as_deref(), fallback)
    }

    #[must_use]
    pub fn tone_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        Self::or(self.tone.as_deref(), fallback)
    }

    #[must_use]
    pub fn length_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        Self::or(self.length.as_deref(), fallback)
    }

    #[must_use]
    pub fn platform_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        Self::or(self.platform.as_deref(), fallback)
    }

    #[must_use]
    pub fn seo_keyword_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        Self::or(self.seo_keyword.as_deref(), fallback)
    }
}

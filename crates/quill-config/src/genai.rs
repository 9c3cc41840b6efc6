//! Text-generation service configuration.

use serde::{Deserialize, Serialize};

/// Default model: cost-effective and fast, with a context window large
/// enough for a 200k-character transcript.
fn default_model() -> String {
    String::from("gemini-1.5-flash")
}

/// Default Generative Language API base URL.
fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenAiConfig {
    /// API key. Also read from `GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model name (e.g., `gemini-1.5-flash`, `gemini-1.5-pro`).
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL, without the `/models/...` suffix.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout, in seconds. Applies to each of the (at most two)
    /// calls made for one structured generation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature. Left to the service default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: None,
        }
    }
}

impl GenAiConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

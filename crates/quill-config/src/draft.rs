//! Drafting prompt options.

use serde::{Deserialize, Serialize};

const fn default_include_length() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftConfig {
    /// Render the request's `length` constraint into the drafting prompt.
    /// Set to `false` to ignore it, as earlier releases did.
    #[serde(default = "default_include_length")]
    pub include_length: bool,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            include_length: default_include_length(),
        }
    }
}

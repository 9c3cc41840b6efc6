//! `[SOURCE NEEDED: query]` markers in article bodies.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[SOURCE NEEDED:\s*([^\]]*?)\s*\]").expect("placeholder pattern is valid")
});

/// Queries of every placeholder in `markdown`, in order, without duplicates.
#[must_use]
pub fn source_placeholders(markdown: &str) -> Vec<String> {
    let mut queries: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(markdown) {
        let query = captures[1].to_string();
        if !query.is_empty() && !queries.contains(&query) {
            queries.push(query);
        }
    }
    queries
}

//! Central schema registry for all Quill payloads.
//!
//! The `SchemaRegistry` builds JSON Schemas from quill-core types at
//! construction time using [`schemars::schema_for!`] and compiles a
//! `jsonschema` validator for each one.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;
use crate::validator::collect_errors;

struct Entry {
    schema: serde_json::Value,
    validator: jsonschema::Validator,
}

/// Central store of all JSON Schemas in the Quill system.
///
/// Built from quill-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    entries: HashMap<&'static str, Entry>,
}

/// Generate, convert and compile a schema, then insert it into the map.
/// Panics if `schemars` output fails to serialise or compile (not expected
/// for derived schemas).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {{
        let schema = serde_json::to_value(schema_for!($ty)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        $map.insert($name, Entry { schema, validator });
    }};
}

impl SchemaRegistry {
    /// Build a new registry containing every request, response and shared
    /// sub-shape schema.
    ///
    /// # Panics
    ///
    /// Panics if a `schemars`-generated schema cannot be converted to a
    /// `serde_json::Value` or compiled. This is not expected in practice
    /// because derived schemas are always valid draft 2020-12 documents.
    #[must_use]
    pub fn new() -> Self {
        use quill_core::entities::{
            AnalysisResult, Angle, Claim, DraftResult, ResearchItem, RewriteResult, SeoMetadata,
        };
        use quill_core::requests::{AnalyzeRequest, DraftRequest, RewriteRequest};

        let mut entries = HashMap::new();

        // --- Shared sub-shapes (5) ---
        register!(entries, "constraint_set", quill_core::ConstraintSet);
        register!(entries, "claim", Claim);
        register!(entries, "research_item", ResearchItem);
        register!(entries, "option", Angle);
        register!(entries, "seo_metadata", SeoMetadata);

        // --- Requests (3) ---
        register!(entries, "analyze_request", AnalyzeRequest);
        register!(entries, "draft_request", DraftRequest);
        register!(entries, "rewrite_request", RewriteRequest);

        // --- Responses (3) ---
        register!(entries, "analysis_result", AnalysisResult);
        register!(entries, "draft_result", DraftResult);
        register!(entries, "rewrite_result", RewriteResult);

        Self { entries }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.entries.get(name).map(|entry| &entry.schema)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        collect_errors(&entry.validator, instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    fn option(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Title",
            "thesis": "Thesis",
            "outline": ["Intro", "Body"],
            "bestFor": "Everyone",
            "researchToDo": [],
            "sourcesToCheck": [],
            "keywords": []
        })
    }

    fn analysis(options: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "topicTitle": "Photosynthesis",
            "chainDigest": ["Plants use light"],
            "coreQuestion": "What is photosynthesis?",
            "claimMap": [{"claim": "Plants use light", "evidenceLevel": "from_chain"}],
            "options": options
        })
    }

    #[test]
    fn registry_has_expected_count() {
        // 5 sub-shapes + 3 requests + 3 responses = 11
        assert_eq!(registry().schema_count(), 11);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn validate_valid_analysis() {
        let value = analysis(vec![option("explainer"), option("meta"), option("research_brief")]);
        assert!(registry().validate("analysis_result", &value).is_ok());
    }

    #[test]
    fn analysis_requires_exactly_three_options() {
        let reg = registry();
        let two = analysis(vec![option("explainer"), option("meta")]);
        let four = analysis(vec![
            option("explainer"),
            option("meta"),
            option("research_brief"),
            option("bonus"),
        ]);
        assert!(reg.validate("analysis_result", &two).is_err());
        assert!(reg.validate("analysis_result", &four).is_err());
    }

    #[test]
    fn option_ids_are_not_structurally_enforced() {
        let value = analysis(vec![option("a"), option("b"), option("c")]);
        assert!(registry().validate("analysis_result", &value).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_enum() {
        let mut value = analysis(vec![
            option("explainer"),
            option("meta"),
            option("research_brief"),
        ]);
        value["claimMap"][0]["evidenceLevel"] = json!("confirmed_by_vibes");
        let result = registry().validate("analysis_result", &value);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(errors.iter().any(|e| e.contains("/claimMap/0/evidenceLevel")));
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let invalid = json!({"articleMarkdown": "## Body"});
        let result = registry().validate("rewrite_request", &invalid);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(errors.iter().any(|e| e.contains("instruction")));
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_wrong_type() {
        let invalid = json!({"chainText": 42});
        assert!(registry().validate("analyze_request", &invalid).is_err());
    }

    #[test]
    fn analyze_request_constraints_are_optional() {
        let valid = json!({"chainText": "User: hi", "tone": "Playful"});
        assert!(registry().validate("analyze_request", &valid).is_ok());
    }

    #[test]
    fn all_expected_schemas_present() {
        let reg = registry();
        let expected = [
            "constraint_set",
            "claim",
            "research_item",
            "option",
            "seo_metadata",
            "analyze_request",
            "draft_request",
            "rewrite_request",
            "analysis_result",
            "draft_result",
            "rewrite_result",
        ];
        for name in &expected {
            assert!(reg.get(name).is_some(), "Missing expected schema: {name}");
        }
    }
}

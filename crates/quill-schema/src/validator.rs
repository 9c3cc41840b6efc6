//! Typed, pre-compiled validator for a single payload type.

use std::fmt;
use std::marker::PhantomData;

use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;

use crate::error::SchemaError;

/// Compiled JSON Schema for `T`, built once and reused for every check.
///
/// `validate` runs the schema first so callers get every violation with its
/// JSON pointer, then deserializes into `T`.
pub struct SchemaValidator<T> {
    name: &'static str,
    schema: serde_json::Value,
    validator: jsonschema::Validator,
    _target: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for SchemaValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> SchemaValidator<T>
where
    T: JsonSchema + DeserializeOwned,
{
    /// Generate and compile the schema for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Generation`] if the generated schema cannot be
    /// serialized or compiled.
    pub fn new(name: &'static str) -> Result<Self, SchemaError> {
        let schema = serde_json::to_value(schema_for!(T))
            .map_err(|e| SchemaError::Generation(format!("{name}: {e}")))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaError::Generation(format!("{name}: {e}")))?;
        Ok(Self {
            name,
            schema,
            validator,
            _target: PhantomData,
        })
    }

    /// Registry name of the validated shape.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The generated JSON Schema.
    #[must_use]
    pub const fn schema(&self) -> &serde_json::Value {
        &self.schema
    }

    /// Check a value against the schema without deserializing.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ValidationFailed`] with every violation found.
    pub fn check(&self, instance: &serde_json::Value) -> Result<(), SchemaError> {
        collect_errors(&self.validator, instance)
    }

    /// Check a value and deserialize it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ValidationFailed`] on schema violations, or
    /// [`SchemaError::Deserialize`] if serde rejects a schema-valid value.
    pub fn validate(&self, instance: serde_json::Value) -> Result<T, SchemaError> {
        self.check(&instance)?;
        serde_json::from_value(instance).map_err(|e| SchemaError::Deserialize(e.to_string()))
    }

    /// Parse JSON text, then [`validate`](Self::validate) it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] if the text is not JSON, otherwise the
    /// errors of [`validate`](Self::validate).
    pub fn parse(&self, text: &str) -> Result<T, SchemaError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| SchemaError::Parse(e.to_string()))?;
        self.validate(value)
    }
}

/// Run a compiled validator and collect pointer-prefixed messages.
pub(crate) fn collect_errors(
    validator: &jsonschema::Validator,
    instance: &serde_json::Value,
) -> Result<(), SchemaError> {
    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| {
            let path = e.instance_path.to_string();
            let path = if path.is_empty() { "/".to_string() } else { path };
            format!("at {path}: {e}")
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ValidationFailed { errors })
    }
}

//! # quill-schema
//!
//! JSON Schema generation, validation, and registry for Quill.
//!
//! This crate provides:
//! - `SchemaRegistry`: named schemas for every request, response, and shared
//!   sub-shape, used at the HTTP boundary and by `quill schema`
//! - `SchemaValidator<T>`: a compiled validator that checks a JSON value
//!   against the schema of `T` and then deserializes it
//!
//! Payload types are defined in `quill-core` with `#[derive(JsonSchema)]`.

mod error;
mod registry;
mod validator;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use validator::SchemaValidator;

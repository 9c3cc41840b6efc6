//! # quill-core
//!
//! Core types, request checks, and error types for Quill.
//!
//! This crate provides the foundational types shared across all Quill crates:
//! - Generated payload structs (analysis, draft, rewrite results and their parts)
//! - Request payloads for the three editorial operations
//! - The evidence-level and angle enums
//! - The constraint set rendered into prompts
//! - Cross-cutting error types
//!
//! Field names follow the camelCase wire contract of the HTTP surface. Every
//! payload derives `JsonSchema` so `quill-schema` can build validators from it.

pub mod constraints;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod requests;

pub use constraints::ConstraintSet;
pub use errors::CoreError;
pub use requests::MAX_CHAIN_CHARS;

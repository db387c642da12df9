//! Interoperability with JSON Schema tooling.
//!
//! Converted documents are plain Rust values; this module renders them into
//! `serde_json::Value` for any standard JSON encoder.

pub mod json_schema;

pub use json_schema::ToJsonSchema;

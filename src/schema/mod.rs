//! Schema documents produced by a conversion.
//!
//! A [`SchemaDocument`] is an object schema whose `properties` hold one
//! [`PropertySchema`] per converted form field. Render it to JSON with
//! [`ToJsonSchema`](crate::ToJsonSchema).

mod document;
mod property;

pub use document::{SchemaDocument, DRAFT_04_SCHEMA_URI};
pub use property::{Format, JsonType, PropertySchema};

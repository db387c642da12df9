//! JSON Schema rendering.
//!
//! Converts [`SchemaDocument`] and [`PropertySchema`] into `serde_json`
//! values using the draft-03/04 vocabulary: `required` is a per-property
//! boolean rather than a top-level array.

use serde_json::{json, Map, Value};

use crate::schema::{PropertySchema, SchemaDocument};

/// Trait for types that render to a JSON Schema value.
pub trait ToJsonSchema {
    /// Renders this schema as a `serde_json::Value`.
    fn to_json_schema(&self) -> Value;
}

impl ToJsonSchema for PropertySchema {
    fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();

        schema.insert("title".to_string(), json!(self.title));
        schema.insert("description".to_string(), json!(self.description));
        schema.insert("readonly".to_string(), json!(self.readonly));
        schema.insert("required".to_string(), json!(self.required));

        if let Some(default) = &self.default {
            schema.insert("default".to_string(), default.clone());
        }
        if let Some(max) = self.max_length {
            schema.insert("maxLength".to_string(), json!(max));
        }
        if let Some(min) = self.min_length {
            schema.insert("minLength".to_string(), json!(min));
        }
        if let Some(max) = &self.maximum {
            schema.insert("maximum".to_string(), Value::Number(max.clone()));
        }
        if let Some(min) = &self.minimum {
            schema.insert("minimum".to_string(), Value::Number(min.clone()));
        }
        if let Some(values) = &self.enum_values {
            schema.insert("enum".to_string(), Value::Array(values.clone()));
        }
        if let Some(pattern) = &self.pattern {
            schema.insert("pattern".to_string(), json!(pattern));
        }

        schema.insert("type".to_string(), json!(self.json_type.as_str()));
        if let Some(format) = self.format {
            schema.insert("format".to_string(), json!(format.as_str()));
        }

        Value::Object(schema)
    }
}

impl ToJsonSchema for SchemaDocument {
    fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();

        if let Some(uri) = &self.schema_uri {
            schema.insert("$schema".to_string(), json!(uri));
        }
        schema.insert("title".to_string(), json!(self.title));
        schema.insert("description".to_string(), json!(self.description));
        schema.insert("type".to_string(), json!(self.schema_type()));

        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, property)| (name.clone(), property.to_json_schema()))
            .collect();
        schema.insert("properties".to_string(), Value::Object(properties));

        Value::Object(schema)
    }
}

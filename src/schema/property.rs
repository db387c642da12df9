//! Per-field property schemas.

use std::fmt::{self, Display};

use serde_json::{Number, Value};

/// The JSON Schema `type` of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
}

impl JsonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Array => "array",
        }
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The JSON Schema `format` of a string property.
///
/// These are the draft-03 era names (`url`, `datetime`), not the later
/// `uri`/`date-time` spellings, except for file fields which use `uri`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Url,
    Uri,
    Date,
    DateTime,
    Email,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Url => "url",
            Format::Uri => "uri",
            Format::Date => "date",
            Format::DateTime => "datetime",
            Format::Email => "email",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The schema describing one form field.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    pub title: String,
    pub description: String,
    pub readonly: bool,
    pub required: bool,
    pub default: Option<Value>,
    pub json_type: JsonType,
    pub format: Option<Format>,
    pub max_length: Option<u64>,
    pub min_length: Option<u64>,
    pub maximum: Option<Number>,
    pub minimum: Option<Number>,
    pub enum_values: Option<Vec<Value>>,
    pub pattern: Option<String>,
}

impl PropertySchema {
    /// Creates a string property with the given title and nothing else set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            readonly: false,
            required: false,
            default: None,
            json_type: JsonType::String,
            format: None,
            max_length: None,
            min_length: None,
            maximum: None,
            minimum: None,
            enum_values: None,
            pattern: None,
        }
    }
}

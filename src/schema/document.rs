//! The top-level object schema produced for a form.

use indexmap::IndexMap;
use serde_json::Value;

use super::property::PropertySchema;

/// `$schema` URI emitted when a builder is configured to include it.
pub const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// An object schema describing a whole form.
///
/// `properties` keeps the form's field declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub schema_uri: Option<String>,
    pub title: String,
    pub description: String,
    pub properties: IndexMap<String, PropertySchema>,
}

impl SchemaDocument {
    /// Creates an empty document.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            schema_uri: None,
            title: title.into(),
            description: description.into(),
            properties: IndexMap::new(),
        }
    }

    /// The document's JSON type, always `"object"`.
    pub fn schema_type(&self) -> &'static str {
        "object"
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Overwrites a property's default. Returns false when there is no such
    /// property.
    pub fn set_default(&mut self, name: &str, value: Value) -> bool {
        match self.properties.get_mut(name) {
            Some(property) => {
                property.default = Some(value);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_default() {
        let mut document = SchemaDocument::new("Signup form", "");
        document
            .properties
            .insert("name".to_string(), PropertySchema::new("Name"));

        assert!(document.set_default("name", json!("Alice")));
        assert!(!document.set_default("email", json!("a@b.c")));
        assert_eq!(
            document.property("name").unwrap().default,
            Some(json!("Alice"))
        );
    }

    #[test]
    fn test_property_names_in_insertion_order() {
        let mut document = SchemaDocument::new("Form", "");
        for name in ["b", "a", "c"] {
            document
                .properties
                .insert(name.to_string(), PropertySchema::new(name));
        }

        let names: Vec<&str> = document.property_names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(document.schema_type(), "object");
    }
}

//! Form to JSON Schema conversion.
//!
//! [`SchemaBuilder`] walks a form's fields in declaration order, builds one
//! [`PropertySchema`] per field from its base properties and its type
//! mapping, and optionally overwrites defaults from a bound instance.
//!
//! # Example
//!
//! ```rust
//! use formschema::{FormField, FormType, SchemaBuilder, ToJsonSchema};
//! use serde_json::json;
//!
//! let form = FormType::new("SignupForm")
//!     .field("name", FormField::char())
//!     .field("age", FormField::integer().min_value(0).max_value(120))
//!     .field("country", FormField::choice([("us", "US"), ("ca", "CA")]));
//!
//! let schema = SchemaBuilder::new().convert(&form, None).unwrap().to_json_schema();
//!
//! assert_eq!(schema["title"], "Signupform");
//! assert_eq!(schema["properties"]["age"]["type"], "integer");
//! assert_eq!(schema["properties"]["country"]["enum"], json!(["us", "ca"]));
//! ```

mod base;
mod mapping;

pub use base::get_base_properties;
pub use mapping::{get_field_properties, input_type_to_json_type, FieldType};

use std::collections::HashSet;
use std::sync::Arc;

use stillwater::prelude::*;
use stillwater::Validation;
use tracing::{debug, trace, warn};

use crate::error::ConversionErrors;
use crate::form::{FormField, FormFields};
use crate::instance::Instance;
use crate::model::ModelDefinition;
use crate::naming::pretty_name;
use crate::schema::{PropertySchema, SchemaDocument, DRAFT_04_SCHEMA_URI};
use crate::value::display_value;

/// Where a property's `default` comes from.
#[derive(Debug, Clone, Default)]
pub enum DefaultStrategy {
    /// The form field's initial value, or `""` when it is not truthy.
    #[default]
    FormInitial,
    /// The default declared on the same-named field of a model, or `""`
    /// when the model field declares none. The form's initial value is
    /// never consulted. A form field with no model counterpart is an error.
    ModelField(Arc<ModelDefinition>),
}

/// Converts forms into [`SchemaDocument`]s.
///
/// Configuration is set up front with the builder methods; a configured
/// builder can then convert any number of forms.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    exclude: HashSet<String>,
    default_strategy: DefaultStrategy,
    schema_uri: bool,
}

impl SchemaBuilder {
    /// A builder that converts every field, takes defaults from the form
    /// and emits no `$schema` key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Omits the named fields from every converted document.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_default_strategy(mut self, strategy: DefaultStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Emits the draft-04 `$schema` URI on converted documents.
    pub fn with_schema_uri(mut self, enabled: bool) -> Self {
        self.schema_uri = enabled;
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }

    pub fn default_strategy(&self) -> &DefaultStrategy {
        &self.default_strategy
    }

    /// Converts a form type or form instance into a schema document.
    ///
    /// When `instance` is given, every property whose name is an attribute
    /// of the instance gets that attribute's text as its `default`.
    ///
    /// # Errors
    ///
    /// Returns every per-field failure of the conversion: fields missing
    /// from the model under [`DefaultStrategy::ModelField`] and widget
    /// `pattern` attributes that are not valid regular expressions.
    pub fn convert<'a, F>(
        &self,
        form: F,
        instance: Option<&dyn Instance>,
    ) -> Result<SchemaDocument, ConversionErrors>
    where
        F: Into<FormFields<'a>>,
    {
        let form = form.into();
        debug!(form = form.name(), fields = form.len(), "converting form");

        let mut document = self.get_base_json_schema(&form);
        let mut errors: Option<ConversionErrors> = None;

        for (name, field) in form.iter() {
            if self.is_excluded(name) {
                trace!(field = name, "field excluded");
                continue;
            }

            match self.build_property(name, field) {
                Validation::Success(property) => {
                    trace!(field = name, json_type = %property.json_type, "field mapped");
                    document.properties.insert(name.to_string(), property);
                }
                Validation::Failure(failure) => {
                    errors = Some(match errors {
                        Some(existing) => existing.combine(failure),
                        None => failure,
                    });
                }
            }
        }

        if let Some(errors) = errors {
            warn!(form = form.name(), errors = errors.len(), "form conversion failed");
            return Err(errors);
        }

        if let Some(instance) = instance {
            populate_schema_defaults_from_instance(&mut document, instance);
        }

        debug!(
            form = form.name(),
            properties = document.properties.len(),
            "form converted"
        );
        Ok(document)
    }

    /// Builds the empty object schema for a form: title and description.
    pub fn get_base_json_schema(&self, form: &FormFields<'_>) -> SchemaDocument {
        let mut document =
            SchemaDocument::new(pretty_name(form.name()), form.doc().unwrap_or_default());
        if self.schema_uri {
            document.schema_uri = Some(DRAFT_04_SCHEMA_URI.to_string());
        }
        document
    }

    /// Builds the complete property schema of one field.
    pub fn build_property(
        &self,
        name: &str,
        field: &FormField,
    ) -> Validation<PropertySchema, ConversionErrors> {
        get_base_properties(name, field, &self.default_strategy).map(|mut property| {
            let field_type = get_field_properties(field);
            property.json_type = field_type.json_type;
            property.format = field_type.format;
            property
        })
    }
}

/// Overwrites defaults with the current attribute values of an instance.
///
/// Properties without a same-named instance attribute keep their default.
/// A `null` attribute is written as `""`.
/// Returns the number of properties that were updated.
pub fn populate_schema_defaults_from_instance(
    document: &mut SchemaDocument,
    instance: &dyn Instance,
) -> usize {
    let mut updated = 0;
    for (name, property) in document.properties.iter_mut() {
        if let Some(value) = instance.attribute(name) {
            property.default = Some(serde_json::Value::String(display_value(&value)));
            updated += 1;
        }
    }
    trace!(updated, "defaults populated from instance");
    updated
}

//! Data models backing forms.
//!
//! A form built from a model can take its schema defaults from the model's
//! field declarations instead of the form's own initial values. See
//! [`DefaultStrategy::ModelField`](crate::DefaultStrategy::ModelField).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ConversionError;

/// A zero-argument function producing a fresh default value.
pub type DefaultProducer = Arc<dyn Fn() -> Value + Send + Sync>;

/// The default declared on a model field.
#[derive(Clone)]
pub enum ModelDefault {
    /// A fixed value.
    Value(Value),
    /// A producer invoked every time the default is read.
    Producer(DefaultProducer),
}

impl ModelDefault {
    /// Resolves the default, invoking the producer if there is one.
    pub fn resolve(&self) -> Value {
        match self {
            ModelDefault::Value(value) => value.clone(),
            ModelDefault::Producer(produce) => produce(),
        }
    }
}

impl fmt::Debug for ModelDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelDefault::Value(value) => f.debug_tuple("Value").field(value).finish(),
            ModelDefault::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// A single field declaration on a model.
#[derive(Debug, Clone, Default)]
pub struct ModelField {
    default: Option<ModelDefault>,
}

impl ModelField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(ModelDefault::Value(value.into()));
        self
    }

    pub fn default_with<F>(mut self, produce: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(ModelDefault::Producer(Arc::new(produce)));
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns the declared default, resolved, or `None` if none is declared.
    pub fn get_default(&self) -> Option<Value> {
        self.default.as_ref().map(ModelDefault::resolve)
    }
}

/// A named model with ordered field declarations.
///
/// # Example
///
/// ```rust
/// use formschema::{ModelDefinition, ModelField};
/// use serde_json::json;
///
/// let profile = ModelDefinition::new("Profile")
///     .field("country", ModelField::new().default_value("us"))
///     .field("bio", ModelField::new());
///
/// assert_eq!(profile.get_field("country").unwrap().get_default(), Some(json!("us")));
/// assert!(profile.get_field("nickname").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ModelDefinition {
    name: String,
    fields: IndexMap<String, ModelField>,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, field: ModelField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a field by name.
    ///
    /// # Errors
    ///
    /// Returns a `model_field_not_found` error when the model declares no
    /// such field.
    pub fn get_field(&self, name: &str) -> Result<&ModelField, ConversionError> {
        self.fields
            .get(name)
            .ok_or_else(|| ConversionError::model_field_not_found(name, &self.name))
    }
}

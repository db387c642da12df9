//! Named form storage and bulk export.
//!
//! [`FormRegistry`] keeps form types under their names so a whole catalogue
//! of forms can be converted and published as one JSON document.

use parking_lot::RwLock;
use rayon::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::builder::SchemaBuilder;
use crate::error::ConversionErrors;
use crate::form::{FormFields, FormType};
use crate::instance::Instance;
use crate::interop::ToJsonSchema;
use crate::schema::{SchemaDocument, DRAFT_04_SCHEMA_URI};

type FormMap = Arc<RwLock<HashMap<String, Arc<FormType>>>>;

/// A thread-safe registry of form types.
///
/// Clones share the same storage. All forms are converted with the
/// registry's [`SchemaBuilder`].
///
/// # Example
///
/// ```rust
/// use formschema::{FormField, FormRegistry, FormType};
///
/// let registry = FormRegistry::new();
/// registry
///     .register(FormType::new("LoginForm").field("username", FormField::char()))
///     .unwrap();
///
/// let document = registry.convert("LoginForm", None).unwrap();
/// assert_eq!(document.title, "Loginform");
///
/// // Names are unique.
/// assert!(registry.register(FormType::new("LoginForm")).is_err());
/// ```
pub struct FormRegistry {
    forms: FormMap,
    builder: Arc<SchemaBuilder>,
}

impl FormRegistry {
    /// Creates an empty registry using a default [`SchemaBuilder`].
    pub fn new() -> Self {
        Self {
            forms: Arc::new(RwLock::new(HashMap::new())),
            builder: Arc::new(SchemaBuilder::new()),
        }
    }

    /// Replaces the builder used for conversions.
    pub fn with_builder(mut self, builder: SchemaBuilder) -> Self {
        self.builder = Arc::new(builder);
        self
    }

    /// Registers a form under its own name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already taken.
    pub fn register(&self, form: FormType) -> Result<(), RegistryError> {
        let mut forms = self.forms.write();
        let name = form.name().to_string();

        if forms.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!(form = %name, "form registered");
        forms.insert(name, Arc::new(form));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<FormType>> {
        self.forms.read().get(name).cloned()
    }

    /// Registered form names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.forms.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.forms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.read().is_empty()
    }

    /// Converts a registered form.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::FormNotFound` for an unknown name and
    /// `RegistryError::Conversion` when the conversion itself fails.
    pub fn convert(
        &self,
        name: &str,
        instance: Option<&dyn Instance>,
    ) -> Result<SchemaDocument, RegistryError> {
        let form = self
            .get(name)
            .ok_or_else(|| RegistryError::FormNotFound(name.to_string()))?;

        self.builder
            .convert(FormFields::from_form_type(&form), instance)
            .map_err(|errors| RegistryError::Conversion(name.to_string(), errors))
    }

    /// Converts every registered form into one JSON document.
    ///
    /// Forms are converted in parallel and listed under `definitions` sorted
    /// by name. The `$schema` URI is emitted when the registry's builder is
    /// configured with it.
    ///
    /// # Errors
    ///
    /// Returns the conversion error of the first failing form, by name order.
    pub fn export_all(&self) -> Result<Value, RegistryError> {
        let mut forms: Vec<(String, Arc<FormType>)> = self
            .forms
            .read()
            .iter()
            .map(|(name, form)| (name.clone(), Arc::clone(form)))
            .collect();
        forms.sort_by(|a, b| a.0.cmp(&b.0));

        let builder = &self.builder;
        let converted: Vec<(String, Result<SchemaDocument, ConversionErrors>)> = forms
            .par_iter()
            .map(|(name, form)| {
                let document = builder.convert(FormFields::from_form_type(form), None);
                (name.clone(), document)
            })
            .collect();

        let mut definitions = Map::new();
        let mut with_uri = false;
        for (name, result) in converted {
            let mut document =
                result.map_err(|errors| RegistryError::Conversion(name.clone(), errors))?;
            with_uri |= document.schema_uri.take().is_some();
            definitions.insert(name, document.to_json_schema());
        }

        debug!(forms = definitions.len(), "forms exported");

        let mut export = Map::new();
        if with_uri {
            export.insert("$schema".to_string(), json!(DRAFT_04_SCHEMA_URI));
        }
        export.insert("definitions".to_string(), Value::Object(definitions));
        Ok(Value::Object(export))
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FormRegistry {
    fn clone(&self) -> Self {
        Self {
            forms: Arc::clone(&self.forms),
            builder: Arc::clone(&self.builder),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a form with a name that already exists.
    #[error("form '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to convert a form name that doesn't exist.
    #[error("form '{0}' not found")]
    FormNotFound(String),

    /// The named form failed to convert.
    #[error("form '{0}' failed to convert: {1}")]
    Conversion(String, ConversionErrors),
}

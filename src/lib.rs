//! # Formschema
//!
//! Converts web form definitions into JSON Schema documents.
//!
//! ## Overview
//!
//! A form is a set of named fields, each with a semantic kind (email,
//! integer, date, ...), a widget (checkbox, select, text input) and
//! validation attributes. Conversion produces an object schema with one
//! property per field, describing its type, format, constraints and
//! default. Defaults can be filled in from a bound data instance.
//!
//! ## Core Types
//!
//! - [`FormType`] / [`FormInstance`]: the form being converted
//! - [`SchemaBuilder`]: configured converter
//! - [`SchemaDocument`] / [`PropertySchema`]: the result
//! - [`ToJsonSchema`]: renders results as `serde_json::Value`
//! - [`FormRegistry`]: named forms converted and exported together
//!
//! ## Example
//!
//! ```rust
//! use formschema::{FormField, FormType, SchemaBuilder, ToJsonSchema};
//! use serde_json::json;
//!
//! let form = FormType::new("ContactForm")
//!     .doc("Get in touch")
//!     .field("email", FormField::email())
//!     .field("subscribe", FormField::boolean().required(false));
//!
//! let instance = json!({"email": "ada@example.com"});
//! let document = SchemaBuilder::new().convert(&form, Some(&instance)).unwrap();
//! let schema = document.to_json_schema();
//!
//! assert_eq!(schema["properties"]["email"]["format"], "email");
//! assert_eq!(schema["properties"]["email"]["default"], "ada@example.com");
//! assert_eq!(schema["properties"]["subscribe"]["type"], "boolean");
//! ```

pub mod builder;
pub mod error;
pub mod form;
pub mod instance;
pub mod interop;
pub mod model;
pub mod naming;
pub mod path;
pub mod registry;
pub mod schema;
pub mod value;

pub use builder::{
    get_base_properties, get_field_properties, input_type_to_json_type,
    populate_schema_defaults_from_instance, DefaultStrategy, FieldType, SchemaBuilder,
};
pub use error::{ConversionError, ConversionErrors};
pub use form::{
    Choice, FieldKind, FormField, FormFields, FormInstance, FormType, NumericBound, Widget,
    WidgetKind,
};
pub use instance::Instance;
pub use interop::ToJsonSchema;
pub use model::{DefaultProducer, ModelDefault, ModelDefinition, ModelField};
pub use naming::pretty_name;
pub use path::SchemaPath;
pub use registry::{FormRegistry, RegistryError};
pub use schema::{Format, JsonType, PropertySchema, SchemaDocument, DRAFT_04_SCHEMA_URI};

/// Type alias for conversion results.
pub type ConversionResult<T> = Result<T, ConversionErrors>;

//! Form definitions: the input side of a conversion.
//!
//! A form can be handed over in two shapes. A [`FormType`] is the declared
//! form with its class-level base fields; a [`FormInstance`] is one live
//! copy of it whose fields may have been adjusted at runtime. Both reduce to
//! the same ordered [`FormFields`] view before conversion.
//!
//! # Example
//!
//! ```rust
//! use formschema::{FormField, FormFields, FormType};
//!
//! let signup = FormType::new("SignupForm")
//!     .doc("Create an account")
//!     .field("name", FormField::char())
//!     .field("email", FormField::email());
//!
//! let mut instance = signup.instance();
//! instance.remove_field("email");
//!
//! assert_eq!(FormFields::from_form_type(&signup).len(), 2);
//! assert_eq!(FormFields::from_form_instance(&instance).len(), 1);
//! ```

mod field;
mod widget;

pub use field::{Choice, FieldKind, FormField, NumericBound};
pub use widget::{Widget, WidgetKind};

use indexmap::IndexMap;

/// A declared form: name, documentation and ordered base fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormType {
    name: String,
    doc: Option<String>,
    base_fields: IndexMap<String, FormField>,
}

impl FormType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            base_fields: IndexMap::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declares a field. Redeclaring a name replaces the field in place.
    pub fn field(mut self, name: impl Into<String>, field: FormField) -> Self {
        self.base_fields.insert(name.into(), field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn base_fields(&self) -> impl Iterator<Item = (&str, &FormField)> {
        self.base_fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Creates an instance with its own copy of the base fields.
    pub fn instance(&self) -> FormInstance {
        FormInstance {
            form_name: self.name.clone(),
            doc: self.doc.clone(),
            fields: self.base_fields.clone(),
        }
    }
}

/// A form instance whose field set can diverge from its type.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInstance {
    form_name: String,
    doc: Option<String>,
    fields: IndexMap<String, FormField>,
}

impl FormInstance {
    pub fn form_name(&self) -> &str {
        &self.form_name
    }

    pub fn get_doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FormField)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_field(&self, name: &str) -> Option<&FormField> {
        self.fields.get(name)
    }

    /// Replaces a field in place, or appends it when the name is new.
    pub fn set_field(&mut self, name: impl Into<String>, field: FormField) {
        self.fields.insert(name.into(), field);
    }

    /// Removes a field, keeping the order of the remaining ones.
    pub fn remove_field(&mut self, name: &str) -> Option<FormField> {
        self.fields.shift_remove(name)
    }
}

/// The ordered field collection a conversion runs over.
#[derive(Debug, Clone)]
pub struct FormFields<'a> {
    name: &'a str,
    doc: Option<&'a str>,
    fields: Vec<(&'a str, &'a FormField)>,
}

impl<'a> FormFields<'a> {
    /// Reads the class-level base fields of a form type.
    pub fn from_form_type(form: &'a FormType) -> Self {
        Self {
            name: &form.name,
            doc: form.doc.as_deref(),
            fields: form.base_fields().collect(),
        }
    }

    /// Reads the instance-level fields of a form instance.
    pub fn from_form_instance(form: &'a FormInstance) -> Self {
        Self {
            name: &form.form_name,
            doc: form.doc.as_deref(),
            fields: form.fields().collect(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn doc(&self) -> Option<&'a str> {
        self.doc
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a FormField)> + '_ {
        self.fields.iter().copied()
    }
}

impl<'a> From<&'a FormType> for FormFields<'a> {
    fn from(form: &'a FormType) -> Self {
        FormFields::from_form_type(form)
    }
}

impl<'a> From<&'a FormInstance> for FormFields<'a> {
    fn from(form: &'a FormInstance) -> Self {
        FormFields::from_form_instance(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> FormType {
        FormType::new("ContactForm")
            .doc("Reach the team")
            .field("name", FormField::char())
            .field("email", FormField::email())
            .field("message", FormField::char().widget(WidgetKind::Other))
    }

    #[test]
    fn test_form_type_keeps_declaration_order() {
        let form = contact_form();
        let names: Vec<&str> = FormFields::from_form_type(&form)
            .iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_redeclared_field_keeps_position() {
        let form = contact_form().field("name", FormField::email());
        let fields = FormFields::from_form_type(&form);
        let (first, field) = fields.iter().next().unwrap();

        assert_eq!(first, "name");
        assert_eq!(field.kind(), FieldKind::Email);
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_instance_fields_diverge_from_type() {
        let form = contact_form();
        let mut instance = form.instance();
        instance.remove_field("email");
        instance.set_field("phone", FormField::char());

        let names: Vec<&str> = FormFields::from_form_instance(&instance)
            .iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["name", "message", "phone"]);

        // The type is untouched.
        assert_eq!(FormFields::from_form_type(&form).len(), 3);
    }

    #[test]
    fn test_both_shapes_share_metadata() {
        let form = contact_form();
        let instance = form.instance();

        let from_type = FormFields::from(&form);
        let from_instance = FormFields::from(&instance);

        assert_eq!(from_type.name(), "ContactForm");
        assert_eq!(from_instance.name(), "ContactForm");
        assert_eq!(from_type.doc(), Some("Reach the team"));
        assert_eq!(from_instance.doc(), Some("Reach the team"));
    }

    #[test]
    fn test_empty_form() {
        let form = FormType::new("EmptyForm");
        let fields = FormFields::from_form_type(&form);

        assert!(fields.is_empty());
        assert_eq!(fields.doc(), None);
    }
}

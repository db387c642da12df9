//! Base properties shared by every field, whatever its type.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ConversionError, ConversionErrors};
use crate::form::FormField;
use crate::naming::pretty_name;
use crate::schema::PropertySchema;
use crate::value::{as_length, is_truthy};

use super::DefaultStrategy;

/// Extracts the type-independent properties of a field.
///
/// Absent widget attributes, bounds and choices simply leave the matching
/// keys unset. Fails only when the default strategy cannot find the field
/// on its model or when a `pattern` attribute does not compile; both
/// failures are reported together.
pub fn get_base_properties(
    name: &str,
    field: &FormField,
    strategy: &DefaultStrategy,
) -> Validation<PropertySchema, ConversionErrors> {
    let widget = field.get_widget();
    let mut errors = Vec::new();
    let mut property = PropertySchema::new(pretty_name(name));

    property.description = field.get_help_text().unwrap_or_default().to_string();
    property.readonly = widget.get_attr("readonly").is_some_and(is_truthy);
    property.required = field.is_required();

    property.default = Some(match strategy {
        DefaultStrategy::FormInitial => form_initial_default(field),
        DefaultStrategy::ModelField(model) => match model.get_field(name) {
            Ok(model_field) => model_field.get_default().unwrap_or_else(empty_default),
            Err(error) => {
                errors.push(error);
                empty_default()
            }
        },
    });

    property.max_length = widget.get_attr("maxlength").and_then(as_length);
    property.min_length = widget.get_attr("minlength").and_then(as_length);
    // A declared bound of zero is still a bound.
    property.maximum = field.get_max_value().cloned();
    property.minimum = field.get_min_value().cloned();

    if !field.get_choices().is_empty() {
        property.enum_values = Some(
            field
                .get_choices()
                .iter()
                .filter(|choice| !choice.is_blank())
                .map(|choice| choice.value.clone())
                .collect(),
        );
    }

    if let Some(pattern) = widget.get_attr("pattern").and_then(Value::as_str) {
        match Regex::new(pattern) {
            Ok(_) => property.pattern = Some(pattern.to_string()),
            Err(source) => errors.push(ConversionError::invalid_pattern(name, pattern, &source)),
        }
    }

    match ConversionErrors::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(property),
    }
}

/// The field's initial value when truthy, else the empty string.
fn form_initial_default(field: &FormField) -> Value {
    field
        .get_initial()
        .filter(|value| is_truthy(value))
        .cloned()
        .unwrap_or_else(empty_default)
}

fn empty_default() -> Value {
    Value::String(String::new())
}

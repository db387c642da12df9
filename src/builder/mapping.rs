//! Field-kind and widget-kind to JSON type mapping.

use crate::form::{FieldKind, FormField, WidgetKind};
use crate::schema::{Format, JsonType};

/// The `type` and `format` a field maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    pub json_type: JsonType,
    pub format: Option<Format>,
}

impl FieldType {
    fn plain(json_type: JsonType) -> Self {
        Self {
            json_type,
            format: None,
        }
    }

    fn formatted(format: Format) -> Self {
        Self {
            json_type: JsonType::String,
            format: Some(format),
        }
    }
}

/// Maps a field to its schema type.
///
/// The field kind decides first; only generic fields fall through to their
/// widget. Unknown widgets map to `string`.
///
/// # Example
///
/// ```rust
/// use formschema::{get_field_properties, Format, FormField, JsonType, WidgetKind};
///
/// let email = FormField::email().widget(WidgetKind::Checkbox);
/// let mapped = get_field_properties(&email);
///
/// assert_eq!(mapped.json_type, JsonType::String);
/// assert_eq!(mapped.format, Some(Format::Email));
/// ```
pub fn get_field_properties(field: &FormField) -> FieldType {
    match field.kind() {
        FieldKind::Url => FieldType::formatted(Format::Url),
        FieldKind::File => FieldType::formatted(Format::Uri),
        FieldKind::Date => FieldType::formatted(Format::Date),
        FieldKind::DateTime => FieldType::formatted(Format::DateTime),
        FieldKind::Decimal | FieldKind::Float => FieldType::plain(JsonType::Number),
        FieldKind::Integer => FieldType::plain(JsonType::Integer),
        FieldKind::Email => FieldType::formatted(Format::Email),
        FieldKind::NullBoolean => FieldType::plain(JsonType::Boolean),
        FieldKind::Generic => match field.get_widget().kind() {
            WidgetKind::Checkbox => FieldType::plain(JsonType::Boolean),
            WidgetKind::Select { multiple: false } => FieldType::plain(JsonType::String),
            WidgetKind::Select { multiple: true } => FieldType::plain(JsonType::Array),
            WidgetKind::Input { input_type } => {
                FieldType::plain(input_type_to_json_type(input_type))
            }
            WidgetKind::Other => FieldType::plain(JsonType::String),
        },
    }
}

/// Looks up the JSON type for an `<input type="...">` value.
pub fn input_type_to_json_type(input_type: &str) -> JsonType {
    match input_type {
        "number" => JsonType::Number,
        // text, password, hidden, search, tel, email, url, ...
        _ => JsonType::String,
    }
}

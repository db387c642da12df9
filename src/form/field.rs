//! Form field definitions.

use serde_json::{Number, Value};

use super::widget::{Widget, WidgetKind};

/// The semantic data type of a form field.
///
/// Kinds the converter has no dedicated rule for (text, boolean, choice,
/// slug, ...) are `Generic`; their schema type then comes from the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Url,
    File,
    Date,
    DateTime,
    Decimal,
    Float,
    Integer,
    Email,
    NullBoolean,
    Generic,
}

/// A value usable as a `min_value`/`max_value` bound.
///
/// Integers always convert. Floats convert when finite; a NaN or infinite
/// bound has no JSON representation and leaves the bound unset.
pub trait NumericBound {
    fn into_bound(self) -> Option<Number>;
}

macro_rules! integer_bound {
    ($($t:ty),*) => {
        $(impl NumericBound for $t {
            fn into_bound(self) -> Option<Number> {
                Some(Number::from(self))
            }
        })*
    };
}

integer_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl NumericBound for f64 {
    fn into_bound(self) -> Option<Number> {
        Number::from_f64(self)
    }
}

impl NumericBound for f32 {
    fn into_bound(self) -> Option<Number> {
        Number::from_f64(f64::from(self))
    }
}

impl NumericBound for Number {
    fn into_bound(self) -> Option<Number> {
        Some(self)
    }
}

/// One `(value, label)` entry of a choice list.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub value: Value,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Returns true for the blank "----" entry of a select box.
    pub fn is_blank(&self) -> bool {
        matches!(&self.value, Value::String(s) if s.is_empty())
    }
}

impl<V: Into<Value>, L: Into<String>> From<(V, L)> for Choice {
    fn from((value, label): (V, L)) -> Self {
        Choice::new(value, label)
    }
}

/// A single field of a form.
///
/// Each constructor picks the field kind and the widget a form framework
/// would render it with by default; the builder methods adjust the rest.
///
/// # Example
///
/// ```rust
/// use formschema::{FieldKind, FormField};
///
/// let age = FormField::integer()
///     .min_value(0)
///     .max_value(120)
///     .help_text("Age in years");
///
/// assert_eq!(age.kind(), FieldKind::Integer);
/// assert!(age.is_required());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    kind: FieldKind,
    widget: Widget,
    help_text: Option<String>,
    required: bool,
    initial: Option<Value>,
    min_value: Option<Number>,
    max_value: Option<Number>,
    choices: Vec<Choice>,
}

impl FormField {
    /// Creates a required field of the given kind rendered with `widget`.
    pub fn new(kind: FieldKind, widget: WidgetKind) -> Self {
        Self {
            kind,
            widget: Widget::new(widget),
            help_text: None,
            required: true,
            initial: None,
            min_value: None,
            max_value: None,
            choices: Vec::new(),
        }
    }

    /// Free text rendered as a text input.
    pub fn char() -> Self {
        Self::new(FieldKind::Generic, WidgetKind::text_input())
    }

    pub fn url() -> Self {
        Self::new(FieldKind::Url, WidgetKind::input("url"))
    }

    pub fn file() -> Self {
        Self::new(FieldKind::File, WidgetKind::input("file"))
    }

    pub fn date() -> Self {
        Self::new(FieldKind::Date, WidgetKind::text_input())
    }

    pub fn datetime() -> Self {
        Self::new(FieldKind::DateTime, WidgetKind::text_input())
    }

    pub fn decimal() -> Self {
        Self::new(FieldKind::Decimal, WidgetKind::input("number"))
    }

    pub fn float() -> Self {
        Self::new(FieldKind::Float, WidgetKind::input("number"))
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer, WidgetKind::input("number"))
    }

    pub fn email() -> Self {
        Self::new(FieldKind::Email, WidgetKind::input("email"))
    }

    /// Yes / no / unknown, rendered as a three-way select.
    pub fn null_boolean() -> Self {
        Self::new(FieldKind::NullBoolean, WidgetKind::select())
    }

    /// A boolean rendered as a checkbox.
    pub fn boolean() -> Self {
        Self::new(FieldKind::Generic, WidgetKind::Checkbox)
    }

    /// A single-select choice field.
    pub fn choice<I, C>(choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self::new(FieldKind::Generic, WidgetKind::select()).choices(choices)
    }

    /// A multi-select choice field.
    pub fn multiple_choice<I, C>(choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self::new(FieldKind::Generic, WidgetKind::select_multiple()).choices(choices)
    }

    /// Replaces the widget kind, keeping its attributes.
    pub fn widget(mut self, kind: WidgetKind) -> Self {
        self.widget.set_kind(kind);
        self
    }

    /// Sets a widget attribute such as `maxlength` or `readonly`.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.widget.set_attr(key.into(), value.into());
        self
    }

    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn initial(mut self, value: impl Into<Value>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Sets the lower bound; `0.5` and `0` both work.
    pub fn min_value(mut self, value: impl NumericBound) -> Self {
        self.min_value = value.into_bound();
        self
    }

    pub fn max_value(mut self, value: impl NumericBound) -> Self {
        self.max_value = value.into_bound();
        self
    }

    /// Replaces the choice list.
    pub fn choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn get_widget(&self) -> &Widget {
        &self.widget
    }

    pub fn get_help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn get_initial(&self) -> Option<&Value> {
        self.initial.as_ref()
    }

    pub fn get_min_value(&self) -> Option<&Number> {
        self.min_value.as_ref()
    }

    pub fn get_max_value(&self) -> Option<&Number> {
        self.max_value.as_ref()
    }

    pub fn get_choices(&self) -> &[Choice] {
        &self.choices
    }
}

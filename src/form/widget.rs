//! Widgets: the UI controls that render form fields.

use indexmap::IndexMap;
use serde_json::Value;

/// The UI control used to render a field, independent of its data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// A single checkbox.
    Checkbox,
    /// A select box; `multiple` allows several selected values.
    Select { multiple: bool },
    /// An `<input>` element with the given `type` attribute.
    Input { input_type: String },
    /// Any other control (textarea, custom widgets).
    Other,
}

impl WidgetKind {
    pub fn input(input_type: impl Into<String>) -> Self {
        WidgetKind::Input {
            input_type: input_type.into(),
        }
    }

    pub fn text_input() -> Self {
        Self::input("text")
    }

    pub fn select() -> Self {
        WidgetKind::Select { multiple: false }
    }

    pub fn select_multiple() -> Self {
        WidgetKind::Select { multiple: true }
    }
}

/// A widget together with its HTML attributes.
///
/// Attributes keep insertion order. Lookups of absent attributes return
/// `None`; nothing about a widget is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    kind: WidgetKind,
    attrs: IndexMap<String, Value>,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            attrs: IndexMap::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn get_attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn set_attr(&mut self, key: String, value: Value) {
        self.attrs.insert(key, value);
    }

    pub(crate) fn set_kind(&mut self, kind: WidgetKind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_attrs_keep_order() {
        let widget = Widget::new(WidgetKind::text_input())
            .attr("maxlength", 20)
            .attr("readonly", true)
            .attr("class", "wide");

        let keys: Vec<&str> = widget.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["maxlength", "readonly", "class"]);
        assert_eq!(widget.get_attr("maxlength"), Some(&json!(20)));
        assert_eq!(widget.get_attr("minlength"), None);
    }

    #[test]
    fn test_widget_kind_constructors() {
        assert_eq!(
            WidgetKind::text_input(),
            WidgetKind::Input {
                input_type: "text".to_string()
            }
        );
        assert_eq!(WidgetKind::select(), WidgetKind::Select { multiple: false });
        assert_eq!(
            WidgetKind::select_multiple(),
            WidgetKind::Select { multiple: true }
        );
    }
}

//! Bound data instances that supply schema defaults.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A data object whose named attributes can be read.
///
/// Implemented for the common map types and for JSON objects. Instances are
/// only ever read.
///
/// # Example
///
/// ```rust
/// use formschema::Instance;
/// use serde_json::json;
///
/// let user = json!({"name": "Alice", "age": 30});
/// assert_eq!(user.attribute("age"), Some(json!(30)));
/// assert_eq!(user.attribute("email"), None);
/// ```
pub trait Instance {
    /// Returns the current value of the attribute, or `None` when the
    /// instance has no such attribute.
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl Instance for Value {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}

impl Instance for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<V, S> Instance for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V> Instance for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V, S> Instance for IndexMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<T: Instance + ?Sized> Instance for &T {
    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }
}

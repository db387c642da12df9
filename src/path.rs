//! Paths into a generated schema document.
//!
//! [`SchemaPath`] names a location inside a [`SchemaDocument`](crate::SchemaDocument),
//! such as `properties.age.default`, so conversion errors can point at the
//! exact key they concern.

use std::fmt::{self, Display};

/// A location inside a generated schema document.
///
/// # Example
///
/// ```rust
/// use formschema::SchemaPath;
///
/// let path = SchemaPath::property("age").push_key("default");
/// assert_eq!(path.to_string(), "properties.age.default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SchemaPath {
    segments: Vec<String>,
}

impl SchemaPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to the entry of a named property: `properties.<name>`.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            segments: vec!["properties".to_string(), name.into()],
        }
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }

    /// Returns true if this is the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Name of the property this path points into, if any.
    pub fn property_name(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [root, name, ..] if root == "properties" => Some(name.as_str()),
            _ => None,
        }
    }
}

impl Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

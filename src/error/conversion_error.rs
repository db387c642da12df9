//! Conversion error types.
//!
//! This module provides [`ConversionError`] for a single failed field and
//! [`ConversionErrors`] for accumulating the failures of one conversion.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::SchemaPath;

/// Code used when a form field has no same-named model field.
pub const MODEL_FIELD_NOT_FOUND: &str = "model_field_not_found";

/// Code used when a widget `pattern` attribute is not a valid regex.
pub const INVALID_PATTERN: &str = "invalid_pattern";

/// A single conversion failure with context.
///
/// - **path**: the schema key the failure concerns
/// - **message**: human-readable description
/// - **got** / **expected**: optional detail
/// - **code**: machine-readable error code
///
/// # Example
///
/// ```rust
/// use formschema::{ConversionError, SchemaPath};
///
/// let error = ConversionError::new(
///     SchemaPath::property("nickname").push_key("default"),
///     "no model field named 'nickname'",
/// )
/// .with_code("model_field_not_found")
/// .with_expected("field of model 'Profile'");
///
/// assert_eq!(error.code, "model_field_not_found");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionError {
    /// Location in the output document.
    pub path: SchemaPath,
    /// Human-readable error message.
    pub message: String,
    /// The offending input, formatted as a string.
    pub got: Option<String>,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// Machine-readable error code.
    pub code: String,
}

impl ConversionError {
    /// Creates an error with the generic `conversion_error` code.
    pub fn new(path: SchemaPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "conversion_error".to_string(),
        }
    }

    /// A form field that has no counterpart on the backing model.
    pub fn model_field_not_found(field: &str, model: &str) -> Self {
        Self::new(
            SchemaPath::property(field).push_key("default"),
            format!("model '{}' has no field named '{}'", model, field),
        )
        .with_code(MODEL_FIELD_NOT_FOUND)
        .with_got(field)
        .with_expected(format!("field of model '{}'", model))
    }

    /// A widget `pattern` attribute that does not compile.
    pub fn invalid_pattern(field: &str, pattern: &str, source: &regex::Error) -> Self {
        Self::new(
            SchemaPath::property(field).push_key("pattern"),
            format!("invalid pattern: {}", source),
        )
        .with_code(INVALID_PATTERN)
        .with_got(pattern)
        .with_expected("valid regular expression")
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {}", path_str, self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for ConversionError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConversionError>();
    assert_sync::<ConversionError>();
};

/// A non-empty collection of conversion errors.
///
/// Wraps a `NonEmptyVec<ConversionError>` so that a failed conversion always
/// carries at least one error. Implements `Semigroup` so per-field failures
/// combine into one report:
///
/// ```rust
/// use formschema::{ConversionError, ConversionErrors, SchemaPath};
/// use stillwater::prelude::*;
///
/// let a = ConversionErrors::single(ConversionError::new(SchemaPath::property("a"), "bad"));
/// let b = ConversionErrors::single(ConversionError::new(SchemaPath::property("b"), "bad"));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionErrors(NonEmptyVec<ConversionError>);

impl ConversionErrors {
    pub fn single(error: ConversionError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds a collection from a vec, returning `None` when it is empty.
    pub fn from_vec(errors: Vec<ConversionError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = errors.next()?;
        Some(errors.fold(Self::single(first), |acc, error| {
            acc.combine(Self::single(error))
        }))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionError> {
        self.0.iter()
    }

    pub fn first(&self) -> &ConversionError {
        self.0.head()
    }

    /// Returns all errors with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&ConversionError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns all errors concerning the named property.
    pub fn for_property(&self, name: &str) -> Vec<&ConversionError> {
        self.0
            .iter()
            .filter(|e| e.path.property_name() == Some(name))
            .collect()
    }

    pub fn into_vec(self) -> Vec<ConversionError> {
        self.0.into_vec()
    }
}

impl Semigroup for ConversionErrors {
    fn combine(self, other: Self) -> Self {
        ConversionErrors(self.0.combine(other.0))
    }
}

impl Display for ConversionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConversionErrors {}

impl IntoIterator for ConversionErrors {
    type Item = ConversionError;
    type IntoIter = std::vec::IntoIter<ConversionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConversionErrors>();
    assert_sync::<ConversionErrors>();
};

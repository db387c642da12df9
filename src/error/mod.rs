//! Error types for conversion failures.
//!
//! Conversion of a well-formed form always succeeds. Errors only arise from
//! a form/model mismatch or an unusable widget attribute, and every failing
//! field of a conversion is reported together.

mod conversion_error;

pub use conversion_error::{ConversionError, ConversionErrors};

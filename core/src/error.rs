//! Builder errors.
//!
//! Both error kinds are raised synchronously by the constructor call that
//! received the bad input; nothing is deferred and there is no recovery
//! path beyond fixing the call site.

use thiserror::Error;

/// Fail-fast construction errors.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::*;
///
/// let err = obj(
///     [("name", Property::from("string"))],
///     ObjOptions { required: Some(serde_json::json!("name")), ..Default::default() },
/// )
/// .unwrap_err();
/// assert!(matches!(err, BuilderError::InvalidRequiredList(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// The `required` option of `obj`/`strict_obj` was not an array.
    #[error("object `required` option must be an array of property names, got {0}")]
    InvalidRequiredList(String),
    /// A `string` pattern carried regex flags, which have no JSON Schema
    /// representation and must not be dropped silently.
    #[error("pattern /{pattern}/{flags} has regex flags, which cannot be represented in a JSON Schema pattern")]
    UnsupportedPatternFlags {
        /// The regex source of the rejected pattern.
        pattern: String,
        /// The flags that made it unrepresentable.
        flags: String,
    },
}

//! Fragment data model for built schemas.
//!
//! This module defines the value types that flow through the builder:
//!
//! - [`Schema`] — one JSON-Schema-shaped node, backed by an ordered JSON map.
//! - [`Property`] — the accepted forms of an object property value
//!   (shorthand string or an already-built fragment).
//! - [`Pattern`] — a string `pattern` input, either a literal source or a
//!   regex carrying explicit flags.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A single schema fragment: one JSON-Schema-shaped node.
///
/// Fragments are plain ordered maps of schema keywords to values, produced
/// by the constructor functions in this crate and composable into a full
/// schema document. Conversion to [`serde_json::Value`] is lossless.
///
/// A fragment additionally carries a required marker that is *not* part of
/// the serialized document: it records that the fragment was built through a
/// `required` chain and should be promoted into the `required` list of the
/// enclosing object. Only [`obj`](crate::obj) and
/// [`strict_obj`](crate::strict_obj) read it; serialization never emits it.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::*;
///
/// let fragment = boolean();
/// assert_eq!(fragment.to_value(), serde_json::json!({"type": "boolean"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    map: Map<String, Value>,
    required: bool,
}

impl Schema {
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self {
            map,
            required: false,
        }
    }

    /// Looks up a top-level keyword in this fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    ///
    /// let fragment = ref_to("#/definitions/user");
    /// assert_eq!(fragment.get("$ref").and_then(|v| v.as_str()), Some("#/definitions/user"));
    /// assert!(fragment.get("type").is_none());
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Returns the fragment as a JSON value, cloning the underlying map.
    pub fn to_value(&self) -> Value {
        Value::Object(self.map.clone())
    }

    /// Consumes the fragment into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }

    pub(crate) fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.map.insert(key.to_string(), value.into());
    }

    pub(crate) fn into_map(self) -> Map<String, Value> {
        self.map
    }

    pub(crate) fn mark_required(&mut self) {
        self.required = true;
    }

    pub(crate) fn required_in_parent(&self) -> bool {
        self.required
    }
}

impl From<Schema> for Value {
    fn from(schema: Schema) -> Self {
        schema.into_value()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

/// Accepted forms of an object property value or combinator item.
///
/// Object constructors and the union combinators accept either a compact
/// shorthand string (e.g. `"string:required"`) or a fragment built by
/// another constructor. Conversions exist from string types and from
/// [`Schema`], so call sites write `"string".into()` or
/// `boolean().into()`.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::*;
///
/// let schema = obj(
///     [
///         ("name", Property::from("string:required")),
///         ("active", boolean().into()),
///     ],
///     ObjOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(schema.get("required"), Some(&serde_json::json!(["name"])));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// A compact `"type[:option]*"` string, parsed by the shorthand parser.
    Shorthand(String),
    /// An already-built fragment, embedded as-is.
    Schema(Schema),
}

impl From<&str> for Property {
    fn from(shorthand: &str) -> Self {
        Property::Shorthand(shorthand.to_string())
    }
}

impl From<String> for Property {
    fn from(shorthand: String) -> Self {
        Property::Shorthand(shorthand)
    }
}

impl From<Schema> for Property {
    fn from(schema: Schema) -> Self {
        Property::Schema(schema)
    }
}

/// A `pattern` input for [`string`](crate::string).
///
/// JSON Schema patterns are bare regex sources with no flag channel, so a
/// regex carrying flags cannot be represented and is rejected by the
/// constructor rather than silently loosened. Rust's [`regex::Regex`] keeps
/// flags inline in the source, so conversion from it is always flagless;
/// the `Regex` variant exists for callers porting patterns from formats
/// that separate source and flags.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::*;
///
/// let from_literal = Pattern::from("[a-z]+");
/// let from_regex = Pattern::from(&regex::Regex::new("[a-z]+").unwrap());
///
/// let a = string(StringOptions { pattern: Some(from_literal), ..Default::default() }).unwrap();
/// let b = string(StringOptions { pattern: Some(from_regex), ..Default::default() }).unwrap();
/// assert_eq!(a.to_value(), b.to_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A literal pattern source, used verbatim.
    Literal(String),
    /// A regex source with separately carried flags.
    Regex {
        /// The regex source text.
        source: String,
        /// Flags attached to the regex (e.g. `"i"`); must be empty to be
        /// representable in a schema.
        flags: String,
    },
}

impl Pattern {
    /// Creates a regex pattern with explicit flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    ///
    /// let flagged = Pattern::regex("[a-z]+", "i");
    /// let err = string(StringOptions { pattern: Some(flagged), ..Default::default() })
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("[a-z]+"));
    /// ```
    pub fn regex(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Pattern::Regex {
            source: source.into(),
            flags: flags.into(),
        }
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Pattern::Literal(source.to_string())
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Pattern::Literal(source)
    }
}

impl From<&regex::Regex> for Pattern {
    fn from(re: &regex::Regex) -> Self {
        Pattern::Regex {
            source: re.as_str().to_string(),
            flags: String::new(),
        }
    }
}

impl From<regex::Regex> for Pattern {
    fn from(re: regex::Regex) -> Self {
        Pattern::from(&re)
    }
}

/// Infers the schema `type` name for a JSON value.
///
/// Used by `enum_of` and `constant`: strings map to `"string"`, arrays to
/// `"array"`, numbers to `"number"`, null to `"null"`, and everything else
/// (objects, booleans) to `"object"`.
pub(crate) fn infer_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Number(_) => "number",
        Value::Null => "null",
        _ => "object",
    }
}

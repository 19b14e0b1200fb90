//! Chain state and descriptor constructors.
//!
//! Constructors are pure: each call builds a fresh fragment from its
//! arguments plus the chain state captured on the [`Builder`] it was
//! invoked on. The free functions at the bottom of this module invoke the
//! same constructors with empty chain state, so most call sites never name
//! a builder at all.
//!
//! Chain state is obtained through [`required`], [`id`], and
//! [`definitions`] (or their [`Builder`] methods) and rides along until the
//! next constructor call consumes it:
//!
//! - `required` marks the next fragment for promotion into the enclosing
//!   object's `required` list;
//! - `id` and `definitions` merge `$id`/`definitions` keys into the next
//!   fragment itself.
//!
//! # Examples
//!
//! ```
//! use json_schema_builder_core::*;
//! use serde_json::json;
//!
//! let schema = strict_obj(
//!     [
//!         ("name", Property::from("string:required")),
//!         ("email", required().string(StringOptions::default()).unwrap().into()),
//!         ("age", integer(NumberOptions::default()).into()),
//!     ],
//!     ObjOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(schema.get("required"), Some(&json!(["name", "email"])));
//! assert_eq!(schema.get("additionalProperties"), Some(&json!(false)));
//! ```

use serde_json::{Map, Number, Value, json};

use crate::error::BuilderError;
use crate::merge;
use crate::schema::{Pattern, Property, Schema, infer_type};
use crate::shorthand;

/// Pending annotations carried by a derived [`Builder`].
#[derive(Debug, Clone, Default, PartialEq)]
struct ChainState {
    required: bool,
    id: Option<String>,
    definitions: Option<Map<String, Value>>,
}

/// A constructor surface with pending chain state.
///
/// The default builder carries no state; the chaining methods consume it
/// and return a new builder with the accumulated state. Constructors take
/// `&self`, so a builder can be kept and reused — every call re-applies the
/// same pending state to a fresh fragment.
///
/// Accumulation is order-insensitive: `required().id("x")` and
/// `id("x").required()` carry identical state.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::*;
/// use serde_json::json;
///
/// let user_id = id("https://example.com/user.json")
///     .strict_obj([("name", Property::from("string:required"))], ObjOptions::default())
///     .unwrap();
/// assert_eq!(
///     user_id.get("$id"),
///     Some(&json!("https://example.com/user.json"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Builder {
    state: ChainState,
}

impl Builder {
    /// Creates a builder with empty chain state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the next fragment built through this builder as required.
    ///
    /// Required-ness is carried, not applied: it only takes effect once the
    /// fragment is placed as a named property of an enclosing
    /// [`obj`](Builder::obj)/[`strict_obj`](Builder::strict_obj), which
    /// promotes the property name into the parent's `required` list.
    pub fn required(mut self) -> Self {
        self.state.required = true;
        self
    }

    /// Sets the `$id` to merge into the next fragment built through this
    /// builder.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.state.id = Some(id.into());
        self
    }

    /// Sets the `definitions` map to merge into the next fragment built
    /// through this builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let address = obj([("city", Property::from("string"))], ObjOptions::default()).unwrap();
    /// let schema = definitions([("address", address)])
    ///     .obj(
    ///         [("home", Property::from(ref_to("#/definitions/address")))],
    ///         ObjOptions::default(),
    ///     )
    ///     .unwrap();
    ///
    /// assert!(schema.get("definitions").is_some());
    /// assert_eq!(schema.get("type"), Some(&json!("object")));
    /// ```
    pub fn definitions<K, I>(mut self, definitions: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        let map: Map<String, Value> = definitions
            .into_iter()
            .map(|(name, schema)| (name.into(), schema.into_value()))
            .collect();
        self.state.definitions = Some(map);
        self
    }

    /// Merges the pending chain state into a freshly built fragment.
    ///
    /// Applied at the end of every constructor.
    fn decorate(&self, mut schema: Schema) -> Schema {
        if let Some(id) = &self.state.id {
            schema.insert("$id", id.as_str());
        }
        if let Some(definitions) = &self.state.definitions {
            schema.insert("definitions", Value::Object(definitions.clone()));
        }
        if self.state.required {
            schema.mark_required();
        }
        schema
    }

    /// Builds an object fragment from named properties.
    ///
    /// Property values are shorthand strings or fragments (see
    /// [`Property`]). The produced `required` list merges, in order: the
    /// explicit [`ObjOptions::required`] list, then each property carrying
    /// a `:required` shorthand option or a required chain mark, in property
    /// order. Names are not deduplicated beyond natural insertion.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidRequiredList`] if
    /// [`ObjOptions::required`] is present and not an array.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let schema = obj(
    ///     [("name", Property::from("string:required"))],
    ///     ObjOptions { title: Some("User".into()), ..Default::default() },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     schema.to_value(),
    ///     json!({
    ///         "type": "object",
    ///         "properties": {"name": {"type": "string"}},
    ///         "title": "User",
    ///         "required": ["name"],
    ///     })
    /// );
    /// ```
    pub fn obj<K, P, I>(&self, properties: I, options: ObjOptions) -> Result<Schema, BuilderError>
    where
        K: Into<String>,
        P: Into<Property>,
        I: IntoIterator<Item = (K, P)>,
    {
        let mut required = match options.required {
            None => Vec::new(),
            Some(Value::Array(names)) => names,
            Some(other) => return Err(BuilderError::InvalidRequiredList(other.to_string())),
        };

        let mut property_map = Map::new();
        for (name, property) in properties {
            let name = name.into();
            let fragment = to_fragment(property.into());
            if fragment.required_in_parent() {
                required.push(Value::String(name.clone()));
            }
            property_map.insert(name, fragment.into_value());
        }

        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", "object");
        schema.insert("properties", Value::Object(property_map));
        if let Some(title) = options.title {
            schema.insert("title", title);
        }
        if let Some(description) = options.description {
            schema.insert("description", description);
        }
        if options.strict {
            schema.insert("additionalProperties", false);
        }
        if let Some(dependencies) = options.dependencies {
            schema.insert("dependencies", dependencies);
        }
        if let Some(default) = options.default {
            schema.insert("default", default);
        }
        if !required.is_empty() {
            schema.insert("required", Value::Array(required));
        }

        Ok(self.decorate(schema))
    }

    /// Builds an object fragment that forbids undeclared properties.
    ///
    /// Identical to [`obj`](Builder::obj) with
    /// [`ObjOptions::strict`] forced on, so the fragment always carries
    /// `additionalProperties: false`.
    pub fn strict_obj<K, P, I>(
        &self,
        properties: I,
        options: ObjOptions,
    ) -> Result<Schema, BuilderError>
    where
        K: Into<String>,
        P: Into<Property>,
        I: IntoIterator<Item = (K, P)>,
    {
        self.obj(
            properties,
            ObjOptions {
                strict: true,
                ..options
            },
        )
    }

    /// Builds a string fragment.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnsupportedPatternFlags`] if the pattern is
    /// a regex carrying flags: a JSON Schema `pattern` is a bare source
    /// with no flag channel, and dropping flags silently would loosen the
    /// pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let schema = string(StringOptions {
    ///     pattern: Some("[a-z]+".into()),
    ///     min_length: Some(1),
    ///     ..Default::default()
    /// })
    /// .unwrap();
    /// assert_eq!(
    ///     schema.to_value(),
    ///     json!({"type": "string", "pattern": "[a-z]+", "minLength": 1})
    /// );
    ///
    /// let flagged = StringOptions {
    ///     pattern: Some(Pattern::regex("[a-z]+", "i")),
    ///     ..Default::default()
    /// };
    /// assert!(string(flagged).is_err());
    /// ```
    pub fn string(&self, options: StringOptions) -> Result<Schema, BuilderError> {
        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", "string");
        match options.pattern {
            Some(Pattern::Literal(source)) => schema.insert("pattern", source),
            Some(Pattern::Regex { source, flags }) => {
                if !flags.is_empty() {
                    return Err(BuilderError::UnsupportedPatternFlags {
                        pattern: source,
                        flags,
                    });
                }
                schema.insert("pattern", source);
            }
            None => {}
        }
        if let Some(format) = options.format {
            schema.insert("format", format);
        }
        if let Some(min_length) = options.min_length {
            schema.insert("minLength", min_length);
        }
        if let Some(max_length) = options.max_length {
            schema.insert("maxLength", max_length);
        }
        Ok(self.decorate(schema))
    }

    /// Builds a number fragment.
    ///
    /// Bounds are emitted whenever present, so zero is a valid bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let schema = number(NumberOptions { min: Some(0.into()), ..Default::default() });
    /// assert_eq!(schema.to_value(), json!({"type": "number", "minimum": 0}));
    /// ```
    pub fn number(&self, options: NumberOptions) -> Schema {
        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", if options.integer { "integer" } else { "number" });
        if let Some(min) = options.min {
            schema.insert("minimum", Value::Number(min));
        }
        if let Some(max) = options.max {
            schema.insert("maximum", Value::Number(max));
        }
        self.decorate(schema)
    }

    /// Builds an integer fragment; [`number`](Builder::number) with the
    /// integer type forced.
    pub fn integer(&self, options: NumberOptions) -> Schema {
        self.number(NumberOptions {
            integer: true,
            ..options
        })
    }

    /// Builds a boolean fragment.
    pub fn boolean(&self) -> Schema {
        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", "boolean");
        self.decorate(schema)
    }

    /// Builds a null fragment.
    pub fn null(&self) -> Schema {
        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", "null");
        self.decorate(schema)
    }

    /// Builds an enumeration fragment from a list of allowed values.
    ///
    /// The `type` is inferred from the first value; the list is expected to
    /// be homogeneous and non-empty but neither is enforced. An empty list
    /// degrades to `type: "null"` with an empty `enum`.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let schema = enum_of(["json", "yaml", "toml"]);
    /// assert_eq!(
    ///     schema.to_value(),
    ///     json!({"type": "string", "enum": ["json", "yaml", "toml"]})
    /// );
    /// ```
    pub fn enum_of<I>(&self, values: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let type_name = values.first().map(infer_type).unwrap_or("null");

        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", type_name);
        schema.insert("enum", Value::Array(values));
        self.decorate(schema)
    }

    /// Builds a constant fragment, with `type` inferred from the value.
    pub fn constant(&self, value: impl Into<Value>) -> Schema {
        let value = value.into();
        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", infer_type(&value));
        schema.insert("const", value);
        self.decorate(schema)
    }

    /// Builds an array fragment from an item type.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let schema = array_of("integer", ArrayOptions { min_items: Some(1), ..Default::default() });
    /// assert_eq!(
    ///     schema.to_value(),
    ///     json!({"type": "array", "items": {"type": "integer"}, "minItems": 1})
    /// );
    /// ```
    pub fn array_of(&self, items: impl Into<Property>, options: ArrayOptions) -> Schema {
        let item_fragment = to_fragment(items.into());

        let mut schema = Schema::from_map(Map::new());
        schema.insert("type", "array");
        schema.insert("items", item_fragment.into_value());
        if let Some(min_items) = options.min_items {
            schema.insert("minItems", min_items);
        }
        if let Some(max_items) = options.max_items {
            schema.insert("maxItems", max_items);
        }
        if let Some(unique_items) = options.unique_items {
            schema.insert("uniqueItems", unique_items);
        }
        self.decorate(schema)
    }

    /// Merges fragments into a union-typed fragment.
    ///
    /// Keys merge last-wins, except `type`, which accumulates into an
    /// ordered list preserving declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// assert_eq!(types(["string", "null"]).to_value(), json!({"type": ["string", "null"]}));
    ///
    /// let merged = types([
    ///     Property::from(enum_of(["foo"])),
    ///     number(NumberOptions { min: Some(0.into()), ..Default::default() }).into(),
    /// ]);
    /// assert_eq!(
    ///     merged.to_value(),
    ///     json!({"type": ["string", "number"], "enum": ["foo"], "minimum": 0})
    /// );
    /// ```
    pub fn types<I>(&self, parts: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Property>,
    {
        let mut merged = Map::new();
        for part in parts {
            let fragment = to_fragment(part.into());
            merge::merge_into(&mut merged, fragment.into_map());
        }
        self.decorate(Schema::from_map(merged))
    }

    /// Builds a `$ref` fragment pointing at another schema.
    pub fn ref_to(&self, reference: impl Into<String>) -> Schema {
        let mut schema = Schema::from_map(Map::new());
        schema.insert("$ref", reference.into());
        self.decorate(schema)
    }

    /// Builds an `anyOf` combinator fragment.
    ///
    /// Bare shorthand strings are normalized to `{"type": s}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_schema_builder_core::*;
    /// use serde_json::json;
    ///
    /// let schema = any_of([
    ///     Property::from("number"),
    ///     obj([("foo", Property::from("string"))], ObjOptions::default())
    ///         .unwrap()
    ///         .into(),
    /// ]);
    /// assert_eq!(
    ///     schema.to_value(),
    ///     json!({"anyOf": [
    ///         {"type": "number"},
    ///         {"type": "object", "properties": {"foo": {"type": "string"}}},
    ///     ]})
    /// );
    /// ```
    pub fn any_of<I>(&self, items: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Property>,
    {
        self.combinator("anyOf", items, true)
    }

    /// Builds a `oneOf` combinator fragment.
    ///
    /// Bare shorthand strings are normalized to `{"type": s}`.
    pub fn one_of<I>(&self, items: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Property>,
    {
        self.combinator("oneOf", items, true)
    }

    /// Builds an `allOf` combinator fragment.
    ///
    /// Unlike [`any_of`](Builder::any_of)/[`one_of`](Builder::one_of),
    /// bare strings are passed through as-is, not normalized to type
    /// fragments.
    pub fn all_of<I>(&self, items: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Property>,
    {
        self.combinator("allOf", items, false)
    }

    fn combinator<I>(&self, keyword: &str, items: I, normalize_shorthand: bool) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Property>,
    {
        let normalized: Vec<Value> = items
            .into_iter()
            .map(|item| match item.into() {
                Property::Shorthand(s) if normalize_shorthand => json!({"type": s}),
                Property::Shorthand(s) => Value::String(s),
                Property::Schema(schema) => schema.into_value(),
            })
            .collect();

        let mut schema = Schema::from_map(Map::new());
        schema.insert(keyword, Value::Array(normalized));
        self.decorate(schema)
    }
}

/// Resolves a property input to a fragment, parsing shorthand strings.
fn to_fragment(property: Property) -> Schema {
    match property {
        Property::Shorthand(shorthand) => shorthand::parse(&shorthand),
        Property::Schema(schema) => schema,
    }
}

/// Options for [`obj`]/[`strict_obj`].
#[derive(Debug, Clone, Default)]
pub struct ObjOptions {
    /// Schema `title`.
    pub title: Option<String>,
    /// Schema `description`.
    pub description: Option<String>,
    /// Emit `additionalProperties: false`.
    pub strict: bool,
    /// Schema `dependencies`, passed through verbatim.
    pub dependencies: Option<Value>,
    /// Schema `default`, passed through verbatim.
    pub default: Option<Value>,
    /// Explicit `required` list, merged ahead of shorthand and chain
    /// marks. Must be an array when present.
    pub required: Option<Value>,
}

/// Options for [`string`].
#[derive(Debug, Clone, Default)]
pub struct StringOptions {
    /// Schema `pattern`; flagged regexes are rejected.
    pub pattern: Option<Pattern>,
    /// Schema `format`.
    pub format: Option<String>,
    /// Schema `minLength`.
    pub min_length: Option<u64>,
    /// Schema `maxLength`.
    pub max_length: Option<u64>,
}

/// Options for [`number`]/[`integer`].
#[derive(Debug, Clone, Default)]
pub struct NumberOptions {
    /// Schema `minimum`.
    pub min: Option<Number>,
    /// Schema `maximum`.
    pub max: Option<Number>,
    /// Emit `type: "integer"` instead of `type: "number"`.
    pub integer: bool,
}

/// Options for [`array_of`].
#[derive(Debug, Clone, Default)]
pub struct ArrayOptions {
    /// Schema `minItems`.
    pub min_items: Option<u64>,
    /// Schema `maxItems`.
    pub max_items: Option<u64>,
    /// Schema `uniqueItems`.
    pub unique_items: Option<bool>,
}

/// Starts a chain whose next fragment is marked required in its parent
/// object.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::*;
/// use serde_json::json;
///
/// let schema = obj(
///     [("name", Property::from(required().string(StringOptions::default()).unwrap()))],
///     ObjOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(schema.get("required"), Some(&json!(["name"])));
/// ```
pub fn required() -> Builder {
    Builder::new().required()
}

/// Starts a chain that merges `$id` into the next fragment.
pub fn id(id: impl Into<String>) -> Builder {
    Builder::new().id(id)
}

/// Starts a chain that merges a `definitions` map into the next fragment.
pub fn definitions<K, I>(definitions: I) -> Builder
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Schema)>,
{
    Builder::new().definitions(definitions)
}

/// Builds an object fragment. See [`Builder::obj`].
pub fn obj<K, P, I>(properties: I, options: ObjOptions) -> Result<Schema, BuilderError>
where
    K: Into<String>,
    P: Into<Property>,
    I: IntoIterator<Item = (K, P)>,
{
    Builder::new().obj(properties, options)
}

/// Builds a strict object fragment. See [`Builder::strict_obj`].
pub fn strict_obj<K, P, I>(properties: I, options: ObjOptions) -> Result<Schema, BuilderError>
where
    K: Into<String>,
    P: Into<Property>,
    I: IntoIterator<Item = (K, P)>,
{
    Builder::new().strict_obj(properties, options)
}

/// Builds a string fragment. See [`Builder::string`].
pub fn string(options: StringOptions) -> Result<Schema, BuilderError> {
    Builder::new().string(options)
}

/// Builds a number fragment. See [`Builder::number`].
pub fn number(options: NumberOptions) -> Schema {
    Builder::new().number(options)
}

/// Builds an integer fragment. See [`Builder::integer`].
pub fn integer(options: NumberOptions) -> Schema {
    Builder::new().integer(options)
}

/// Builds a boolean fragment.
pub fn boolean() -> Schema {
    Builder::new().boolean()
}

/// Builds a null fragment.
pub fn null() -> Schema {
    Builder::new().null()
}

/// Builds an enumeration fragment. See [`Builder::enum_of`].
pub fn enum_of<I>(values: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Builder::new().enum_of(values)
}

/// Builds a constant fragment. See [`Builder::constant`].
pub fn constant(value: impl Into<Value>) -> Schema {
    Builder::new().constant(value)
}

/// Builds an array fragment. See [`Builder::array_of`].
pub fn array_of(items: impl Into<Property>, options: ArrayOptions) -> Schema {
    Builder::new().array_of(items, options)
}

/// Merges fragments into a union-typed fragment. See [`Builder::types`].
pub fn types<I>(parts: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Property>,
{
    Builder::new().types(parts)
}

/// Builds a `$ref` fragment.
pub fn ref_to(reference: impl Into<String>) -> Schema {
    Builder::new().ref_to(reference)
}

/// Builds an `anyOf` combinator fragment. See [`Builder::any_of`].
pub fn any_of<I>(items: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Property>,
{
    Builder::new().any_of(items)
}

/// Builds a `oneOf` combinator fragment. See [`Builder::one_of`].
pub fn one_of<I>(items: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Property>,
{
    Builder::new().one_of(items)
}

/// Builds an `allOf` combinator fragment. See [`Builder::all_of`].
pub fn all_of<I>(items: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Property>,
{
    Builder::new().all_of(items)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_obj_promotes_shorthand_required() {
        let schema = obj([("f", "string:required")], ObjOptions::default()).unwrap();
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": {"f": {"type": "string"}},
                "required": ["f"],
            })
        );
    }

    #[test]
    fn test_chain_required_matches_shorthand_required() {
        let via_shorthand = obj([("f", "string:required")], ObjOptions::default()).unwrap();
        let via_chain = obj(
            [(
                "f",
                Property::from(required().string(StringOptions::default()).unwrap()),
            )],
            ObjOptions::default(),
        )
        .unwrap();

        assert_eq!(via_chain.to_value(), via_shorthand.to_value());
    }

    #[test]
    fn test_required_merge_order_option_then_properties() {
        let schema = obj(
            [("a", "string"), ("b", "string:required"), ("c", "string:required")],
            ObjOptions {
                required: Some(json!(["a"])),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(schema.get("required"), Some(&json!(["a", "b", "c"])));
    }

    #[test]
    fn test_required_list_not_deduplicated() {
        let schema = obj(
            [("a", "string:required")],
            ObjOptions {
                required: Some(json!(["a"])),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(schema.get("required"), Some(&json!(["a", "a"])));
    }

    #[test]
    fn test_obj_rejects_non_array_required_option() {
        let err = obj(
            [("a", "string")],
            ObjOptions {
                required: Some(json!("a")),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, BuilderError::InvalidRequiredList(_)));
    }

    #[test]
    fn test_strict_obj_equals_obj_with_strict_option() {
        let strict = strict_obj([("a", "string")], ObjOptions::default()).unwrap();
        let opted = obj(
            [("a", "string")],
            ObjOptions {
                strict: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(strict.to_value(), opted.to_value());
        assert_eq!(strict.get("additionalProperties"), Some(&json!(false)));
    }

    #[test]
    fn test_obj_passes_dependencies_and_default_through() {
        let schema = obj(
            [("a", "string")],
            ObjOptions {
                dependencies: Some(json!({"a": ["b"]})),
                default: Some(json!({"a": "x"})),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(schema.get("dependencies"), Some(&json!({"a": ["b"]})));
        assert_eq!(schema.get("default"), Some(&json!({"a": "x"})));
    }

    #[test]
    fn test_string_literal_and_flagless_regex_patterns_agree() {
        let literal = string(StringOptions {
            pattern: Some("[a-z]+".into()),
            ..Default::default()
        })
        .unwrap();
        let flagless = string(StringOptions {
            pattern: Some(Pattern::from(&regex::Regex::new("[a-z]+").unwrap())),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(literal.to_value(), flagless.to_value());
        assert_eq!(literal.to_value(), json!({"type": "string", "pattern": "[a-z]+"}));
    }

    #[test]
    fn test_string_rejects_flagged_pattern_and_names_it() {
        let err = string(StringOptions {
            pattern: Some(Pattern::regex("[a-z]+", "i")),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(
            err,
            BuilderError::UnsupportedPatternFlags {
                pattern: "[a-z]+".to_string(),
                flags: "i".to_string(),
            }
        );
        assert!(err.to_string().contains("[a-z]+"));
    }

    #[test]
    fn test_number_zero_is_a_valid_bound() {
        let schema = number(NumberOptions {
            min: Some(0.into()),
            max: Some(0.into()),
            ..Default::default()
        });
        assert_eq!(
            schema.to_value(),
            json!({"type": "number", "minimum": 0, "maximum": 0})
        );
    }

    #[test]
    fn test_integer_forces_type() {
        let schema = integer(NumberOptions {
            min: Some(1.into()),
            ..Default::default()
        });
        assert_eq!(schema.to_value(), json!({"type": "integer", "minimum": 1}));
    }

    #[test]
    fn test_boolean_and_null_fragments() {
        assert_eq!(boolean().to_value(), json!({"type": "boolean"}));
        assert_eq!(null().to_value(), json!({"type": "null"}));
    }

    #[test]
    fn test_enum_infers_type_from_first_value() {
        assert_eq!(
            enum_of(["a", "b"]).to_value(),
            json!({"type": "string", "enum": ["a", "b"]})
        );
        assert_eq!(
            enum_of([1, 2, 3]).to_value(),
            json!({"type": "number", "enum": [1, 2, 3]})
        );
    }

    #[test]
    fn test_enum_empty_degrades_to_null_type() {
        assert_eq!(
            enum_of(Vec::<Value>::new()).to_value(),
            json!({"type": "null", "enum": []})
        );
    }

    #[test]
    fn test_constant_infers_type() {
        assert_eq!(
            constant("fixed").to_value(),
            json!({"type": "string", "const": "fixed"})
        );
        assert_eq!(
            constant(Value::Null).to_value(),
            json!({"type": "null", "const": null})
        );
    }

    #[test]
    fn test_array_of_shorthand_item() {
        assert_eq!(
            array_of("integer", ArrayOptions::default()).to_value(),
            json!({"type": "array", "items": {"type": "integer"}})
        );
    }

    #[test]
    fn test_array_of_fragment_with_all_bounds() {
        let schema = array_of(
            string(StringOptions::default()).unwrap(),
            ArrayOptions {
                min_items: Some(1),
                max_items: Some(3),
                unique_items: Some(true),
            },
        );
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "array",
                "items": {"type": "string"},
                "minItems": 1,
                "maxItems": 3,
                "uniqueItems": true,
            })
        );
    }

    #[test]
    fn test_types_preserves_declaration_order() {
        assert_eq!(
            types(["string", "null"]).to_value(),
            json!({"type": ["string", "null"]})
        );
        assert_eq!(
            types(["string", "null", "number"]).to_value(),
            json!({"type": ["string", "null", "number"]})
        );
    }

    #[test]
    fn test_types_merges_fragment_keys() {
        let schema = types([
            Property::from(enum_of(["foo"])),
            number(NumberOptions {
                min: Some(0.into()),
                ..Default::default()
            })
            .into(),
        ]);
        assert_eq!(
            schema.to_value(),
            json!({"type": ["string", "number"], "enum": ["foo"], "minimum": 0})
        );
    }

    #[test]
    fn test_types_single_operand_keeps_scalar_type() {
        assert_eq!(types(["string"]).to_value(), json!({"type": "string"}));
    }

    #[test]
    fn test_any_of_normalizes_shorthand() {
        let schema = any_of([
            Property::from("number"),
            obj([("foo", "string")], ObjOptions::default()).unwrap().into(),
        ]);
        assert_eq!(
            schema.to_value(),
            json!({"anyOf": [
                {"type": "number"},
                {"type": "object", "properties": {"foo": {"type": "string"}}},
            ]})
        );
    }

    #[test]
    fn test_one_of_normalizes_shorthand() {
        assert_eq!(
            one_of(["string", "null"]).to_value(),
            json!({"oneOf": [{"type": "string"}, {"type": "null"}]})
        );
    }

    #[test]
    fn test_all_of_passes_strings_through() {
        let schema = all_of([Property::from("number"), ref_to("#/definitions/base").into()]);
        assert_eq!(
            schema.to_value(),
            json!({"allOf": ["number", {"$ref": "#/definitions/base"}]})
        );
    }

    #[test]
    fn test_ref_fragment() {
        assert_eq!(
            ref_to("#/definitions/user").to_value(),
            json!({"$ref": "#/definitions/user"})
        );
    }

    #[test]
    fn test_definitions_chain_decorates_next_fragment() {
        let user = obj([("name", "string")], ObjOptions::default()).unwrap();
        let schema = definitions([("u", user)])
            .strict_obj(
                [(
                    "foo",
                    Property::from(required().ref_to("#/definitions/u")),
                )],
                ObjOptions::default(),
            )
            .unwrap();

        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": {"foo": {"$ref": "#/definitions/u"}},
                "additionalProperties": false,
                "required": ["foo"],
                "definitions": {
                    "u": {"type": "object", "properties": {"name": {"type": "string"}}},
                },
            })
        );
    }

    #[test]
    fn test_chain_state_accumulates_in_any_order() {
        assert_eq!(required().id("x"), id("x").required());
    }

    #[test]
    fn test_builder_reuse_reapplies_pending_state() {
        let builder = id("https://example.com/s.json");
        let first = builder.boolean();
        let second = builder.null();

        assert_eq!(
            first.to_value(),
            json!({"type": "boolean", "$id": "https://example.com/s.json"})
        );
        assert_eq!(
            second.to_value(),
            json!({"type": "null", "$id": "https://example.com/s.json"})
        );
    }

    #[test]
    fn test_required_mark_does_not_escape_into_serialized_fragment() {
        let marked = required().boolean();
        assert_eq!(marked.to_value(), json!({"type": "boolean"}));
        assert_eq!(serde_json::to_value(&marked).unwrap(), json!({"type": "boolean"}));
    }

    #[test]
    fn test_repeated_calls_produce_independent_fragments() {
        let a = obj([("f", "string:required")], ObjOptions::default()).unwrap();
        let b = obj([("f", "string:required")], ObjOptions::default()).unwrap();
        assert_eq!(a, b);

        let mut mutated = a.to_value();
        mutated["type"] = json!("mutated");
        assert_eq!(b.get("type"), Some(&json!("object")));
    }
}

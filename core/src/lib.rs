//! Fluent, composable builder for JSON Schema documents.
//!
//! This crate assembles nested schema descriptors through constructor calls
//! instead of hand-written JSON:
//!
//! - [`Schema`] — one produced schema fragment, convertible to
//!   [`serde_json::Value`].
//! - [`Builder`] — carries pending chain state ([`required`], [`id`],
//!   [`definitions`]) onto the next constructor call.
//! - Constructors — [`obj`], [`strict_obj`], [`string`], [`number`],
//!   [`integer`], [`boolean`], [`null`], [`enum_of`], [`constant`],
//!   [`array_of`], [`types`], [`ref_to`], [`any_of`], [`one_of`],
//!   [`all_of`].
//! - Shorthand — property values written as `"type[:option]*"` strings,
//!   e.g. `"string:required"` or `"string:uri"`.
//!
//! Constructors are pure and synchronous; each call returns a fresh,
//! independently owned fragment. The only failure modes are a non-array
//! `required` option and a flag-carrying regex pattern, both rejected at
//! construction time with a [`BuilderError`].
//!
//! # Example
//!
//! ```
//! use json_schema_builder_core::*;
//! use serde_json::json;
//!
//! let account = definitions([(
//!     "tag",
//!     string(StringOptions { max_length: Some(32), ..Default::default() }).unwrap(),
//! )])
//! .strict_obj(
//!     [
//!         ("name", Property::from("string:required")),
//!         ("homepage", "string:uri".into()),
//!         ("age", integer(NumberOptions { min: Some(0.into()), ..Default::default() }).into()),
//!         ("tags", array_of(ref_to("#/definitions/tag"), ArrayOptions::default()).into()),
//!     ],
//!     ObjOptions { title: Some("Account".into()), ..Default::default() },
//! )
//! .unwrap();
//!
//! assert_eq!(account.get("required"), Some(&json!(["name"])));
//! assert_eq!(account.get("additionalProperties"), Some(&json!(false)));
//! assert!(account.get("definitions").is_some());
//! ```

mod builder;
mod error;
mod merge;
mod schema;
mod shorthand;

pub use builder::{
    ArrayOptions, Builder, NumberOptions, ObjOptions, StringOptions, all_of, any_of, array_of,
    boolean, constant, definitions, enum_of, id, integer, null, number, obj, one_of, ref_to,
    required, strict_obj, string, types,
};
pub use error::BuilderError;
pub use schema::{Pattern, Property, Schema};

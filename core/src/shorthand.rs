//! Compact string shorthand for fragments.
//!
//! A shorthand is `"type[:option]*"` where `type` is any schema type name
//! and each option is one of:
//!
//! - `required` — mark the fragment for promotion into the enclosing
//!   object's `required` list;
//! - `uri` — set `format: "uri"`;
//! - a positive integer `n` — set `minLength: 1` and `maxLength: n`.
//!
//! Unrecognized options are ignored so that new options can be introduced
//! without breaking older parsers. Parsing is purely syntactic: the type
//! name is not checked against any allow-list, and malformed input degrades
//! to a best-effort fragment rather than failing.

use serde_json::Map;

use crate::schema::Schema;

/// Parses a shorthand string into a fragment.
pub(crate) fn parse(shorthand: &str) -> Schema {
    let mut parts = shorthand.split(':');
    let type_name = parts.next().unwrap_or_default();

    let mut schema = Schema::from_map(Map::new());
    schema.insert("type", type_name);

    for option in parts {
        match option {
            "required" => schema.mark_required(),
            "uri" => schema.insert("format", "uri"),
            other => {
                if let Ok(max) = other.parse::<u64>() {
                    if max > 0 {
                        schema.insert("minLength", 1);
                        schema.insert("maxLength", max);
                    }
                }
            }
        }
    }

    schema
}

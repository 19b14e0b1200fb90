//! Fragment merging for the [`types`](crate::types) combinator.
//!
//! Merging two fragments overwrites keys last-wins, with one exception:
//! `type` accumulates into an ordered union list so that
//! `types("string", "null")` yields `{"type": ["string", "null"]}` while
//! every other keyword from later fragments replaces earlier ones.
//!
//! The union preserves exact declaration order for any number of operands
//! and does not deduplicate.

use serde_json::{Map, Value};

/// Merges `overlay` into `acc`, accumulating `type` and overwriting the rest.
pub(crate) fn merge_into(acc: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        if key == "type" && acc.contains_key("type") {
            let mut union = acc.remove("type").map(type_names).unwrap_or_default();
            union.extend(type_names(value));
            acc.insert(key, Value::Array(union));
        } else {
            acc.insert(key, value);
        }
    }
}

/// Flattens a `type` value into its list of names.
///
/// A scalar type is a one-element list; an already-unioned type contributes
/// its elements in order.
fn type_names(value: Value) -> Vec<Value> {
    match value {
        Value::Array(names) => names,
        scalar => vec![scalar],
    }
}

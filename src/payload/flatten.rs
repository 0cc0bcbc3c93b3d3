//! Nested object → dotted-path entries.
//!
//! Every object key and every first array element becomes an entry. A
//! container is recorded after its descendants, so `{"d": {"d1": 1}}` yields
//! `d.d1` then `d`. Later array elements are treated as repeats of the first
//! and contribute nothing.

use super::{top_level, zero_value, FlatParams, Path, Segment};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// Flatten a top-level object into [`FlatParams`].
///
/// Fails with `TypeMismatch` when `tree` is not an object.
pub fn flatten(tree: &Value) -> Result<FlatParams> {
    let root = top_level(tree)?;

    let mut flat = FlatParams::new();
    let mut path = Path::root();
    for (key, value) in root {
        path.push(Segment::Key(key.clone()));
        walk(value, &mut path, &mut flat);
        path.pop();
    }

    debug!(entries = flat.len(), "flattened payload");
    Ok(flat)
}

fn walk(value: &Value, path: &mut Path, flat: &mut FlatParams) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(Segment::Key(key.clone()));
                walk(child, path, flat);
                path.pop();
            }
        }
        Value::Array(items) => {
            if let Some(first) = items.first() {
                path.push(Segment::Index(0));
                walk(first, path, flat);
                path.pop();
            }
        }
        _ => {}
    }
    flat.insert(path.to_string(), zero_value(value));
}

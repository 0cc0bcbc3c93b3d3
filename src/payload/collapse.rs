//! Cut repeated array elements down to one representative sample.
//!
//! The input is only borrowed. A container is copied only when something
//! beneath it changed; untouched subtrees are handed back as borrows, so
//! collapsing a tree without multi-element arrays allocates nothing.

use super::{top_level, Path, Segment};
use crate::error::Result;
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Collapse every array in a top-level object to its first element,
/// recursively.
///
/// Fails with `TypeMismatch` when `tree` is not an object.
pub fn collapse(tree: &Value) -> Result<Cow<'_, Value>> {
    top_level(tree)?;
    let mut path = Path::root();
    Ok(shrink(tree, &mut path))
}

fn shrink<'a>(value: &'a Value, path: &mut Path) -> Cow<'a, Value> {
    match value {
        Value::Array(items) => {
            let Some(first) = items.first() else {
                return Cow::Borrowed(value);
            };

            path.push(Segment::Index(0));
            let kept = shrink(first, path);
            path.pop();

            if items.len() == 1 && matches!(kept, Cow::Borrowed(_)) {
                return Cow::Borrowed(value);
            }
            if items.len() > 1 {
                debug!(path = %path, dropped = items.len() - 1, "collapsed array");
            }
            Cow::Owned(Value::Array(vec![kept.into_owned()]))
        }
        Value::Object(map) => {
            let children: Vec<(&String, Cow<'a, Value>)> = map
                .iter()
                .map(|(key, child)| {
                    path.push(Segment::Key(key.clone()));
                    let shrunk = shrink(child, path);
                    path.pop();
                    (key, shrunk)
                })
                .collect();

            if children.iter().all(|(_, c)| matches!(c, Cow::Borrowed(_))) {
                return Cow::Borrowed(value);
            }
            Cow::Owned(Value::Object(
                children
                    .into_iter()
                    .map(|(key, c)| (key.clone(), c.into_owned()))
                    .collect(),
            ))
        }
        _ => Cow::Borrowed(value),
    }
}

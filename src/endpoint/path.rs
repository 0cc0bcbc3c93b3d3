//! URL path cleanup and the stub function name derived from it.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Stub name for paths without a single identifier segment.
pub const FALLBACK_NAME: &str = "index";

static RE_SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/+").unwrap());

// Query string is not part of the documented path.
static RE_URL_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(/[^?]+)\??").unwrap());

static RE_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Collapse repeated slashes and strip the query string.
///
/// Fails with `IllegalPath` unless the result is an absolute path with at
/// least one character after the leading `/`.
pub fn normalize(path: &str) -> Result<String> {
    let squeezed = RE_SLASHES.replace_all(path, "/");
    RE_URL_PATH
        .captures(&squeezed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::IllegalPath(path.to_string()))
}

/// `/users/{id}/list` → `users_list`. Segments that are not identifiers are
/// dropped; a path left with none is named [`FALLBACK_NAME`].
pub fn function_name(path: &str) -> String {
    let name = path
        .split('/')
        .filter(|segment| RE_IDENT.is_match(segment))
        .collect::<Vec<_>>()
        .join("_");
    if name.is_empty() {
        warn!(path, fallback = FALLBACK_NAME, "no identifier segments in path");
        return FALLBACK_NAME.to_string();
    }
    name
}

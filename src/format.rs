//! Payload → annotation text.
//!
//! `format_params` renders one `@api<Section>` line per documented field;
//! `format_example` renders a pretty-printed JSON example block.

use crate::error::Result;
use crate::explain::Explanations;
use crate::payload::{is_blank, ParamType};
use crate::vocab::Keyword;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::collections::BTreeSet;

/// Width of one indent level in generated text.
pub const INDENT: usize = 4;

/// Render parameter lines for every entry of `params`, deduplicated and
/// sorted by field name.
///
/// `group` is left out of the lines when empty.
pub fn format_params(
    params: &Map<String, Value>,
    keyword: Keyword,
    group: &str,
    explanations: &Explanations,
) -> String {
    let lines = params.iter().map(|(name, value)| {
        let line = keyword.param(ParamType::of(value), name, explanations.get(name), group);
        (name.clone(), line)
    });
    sorted_lines(lines).join("\n")
}

/// Unique `(field name, line)` pairs, ordered by name and then by line text.
fn sorted_lines<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let unique: BTreeSet<(String, String)> = entries.into_iter().collect();
    unique.into_iter().map(|(_, line)| line).collect()
}

/// Render `obj` as an example block, or nothing when `obj` carries no data.
///
/// The label is `<section>-example`, suffixed with `-<group>` when a group is
/// given.
pub fn format_example(obj: &Value, keyword: Keyword, group: &str) -> Result<String> {
    if is_blank(obj) {
        return Ok(String::new());
    }

    let json = pretty_json(obj)?;
    let mut label = format!("{}-example", keyword.label());
    if !group.is_empty() {
        label.push('-');
        label.push_str(group);
    }
    Ok(keyword.example(&label, &indent(&json, INDENT)))
}

/// Four-space indented JSON, non-ASCII kept as is.
pub fn pretty_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Prefix every line of `content` with `width` spaces.
pub fn indent(content: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    content
        .split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join the non-empty parts with newlines.
pub fn join_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

//! Several payload variants documented under one endpoint.
//!
//! Each [`SectionItem`] contributes its own parameter and example blocks to
//! every section. Groups keep the variants apart; for each section an item's
//! group is, in order of preference, the item's section group, the item's
//! shared `group`, then the endpoint-level group at the same position, then
//! `<section>-<n>`.

use super::Section;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Payloads of one variant. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionItem {
    pub group: String,
    pub header: Value,
    pub header_group: String,
    pub params: Value,
    pub params_group: String,
    pub success_example: Value,
    pub success_params: Value,
    pub success_group: String,
    pub error_example: Value,
    pub error_params: Value,
    pub error_group: String,
}

impl SectionItem {
    /// `(example, params)` payloads this item gives `section`.
    pub(crate) fn payloads(&self, section: Section) -> (&Value, &Value) {
        match section {
            Section::Header => (&self.header, &self.header),
            Section::Params => (&self.params, &self.params),
            Section::Success => (&self.success_example, &self.success_params),
            Section::Error => (&self.error_example, &self.error_params),
        }
    }

    fn section_group(&self, section: Section) -> &str {
        match section {
            Section::Header => &self.header_group,
            Section::Params => &self.params_group,
            Section::Success => &self.success_group,
            Section::Error => &self.error_group,
        }
    }
}

/// Fail with `NotEnoughGroups` when explicit groups are given but fewer than
/// the items they label.
pub(crate) fn check_groups(groups: &[String], items: &[SectionItem]) -> Result<()> {
    if !groups.is_empty() && groups.len() < items.len() {
        return Err(Error::NotEnoughGroups {
            groups: groups.len(),
            items: items.len(),
        });
    }
    Ok(())
}

/// Group label of every item for `section`, positionally.
pub(crate) fn resolve_groups(
    section: Section,
    groups: &[String],
    items: &[SectionItem],
) -> Result<Vec<String>> {
    check_groups(groups, items)?;

    Ok(items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let local = item.section_group(section);
            if !local.is_empty() {
                local.to_string()
            } else if !item.group.is_empty() {
                item.group.clone()
            } else if let Some(shared) = groups.get(i) {
                shared.clone()
            } else {
                format!("{}-{}", section.name(), i + 1)
            }
        })
        .collect())
}

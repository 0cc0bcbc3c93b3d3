//! JSON manifests describing a documentation unit and its endpoints.
//!
//! ```json
//! {
//!   "name": "users",
//!   "group": "User",
//!   "permissions": {"editor": "Editor role required"},
//!   "explanations": {"page": "page index"},
//!   "endpoints": [
//!     {
//!       "path": "/users/list",
//!       "method": "get",
//!       "title": "List users",
//!       "query": {"page": 1},
//!       "response": {"items": [{"id": 1, "name": "a"}]}
//!     }
//!   ]
//! }
//! ```
//!
//! Method and permission names are resolved when the unit is built, so an
//! unknown name surfaces as `EnumMember` rather than a parse error.

use crate::endpoint::SectionItem;
use crate::error::Result;
use crate::explain::Explanations;
use crate::permission::{CustomPermission, Permissions};
use crate::unit::{Call, DocUnit, UnitDefaults};
use crate::vocab::RequestMethod;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub name: String,
    pub group: String,
    pub permission: Option<String>,
    /// Extra permission levels: name → explanation.
    pub permissions: IndexMap<String, String>,
    pub explanations: Explanations,
    pub header_group: String,
    pub params_group: String,
    pub success_group: String,
    pub error_group: String,
    pub error_example: Value,
    pub error_params: Value,
    pub endpoints: Vec<EndpointEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointEntry {
    pub path: String,
    pub method: String,
    pub title: String,
    pub group: String,
    pub description: String,
    pub permission: Option<String>,
    pub explanations: Explanations,
    pub headers: Value,
    pub query: Value,
    pub form: Value,
    pub json: Value,
    pub response: Value,
    pub success_params: Value,
    pub error_example: Value,
    pub error_params: Value,
    pub header_group: String,
    pub params_group: String,
    pub success_group: String,
    pub error_group: String,
    /// Shared labels for `items`, by position.
    pub groups: Vec<String>,
    pub items: Vec<SectionItem>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Permission registry: built-in levels plus the manifest's own.
    pub fn permissions(&self) -> Permissions {
        let mut permissions = Permissions::new();
        for (name, explain) in &self.permissions {
            permissions.register(Arc::new(CustomPermission::new(name, explain)));
        }
        permissions
    }

    /// Build the unit and document every endpoint in order.
    ///
    /// `overrides` win over the manifest's own explanations.
    pub fn into_unit(self, overrides: &Explanations) -> Result<DocUnit> {
        let permissions = self.permissions();

        let mut explanations = self.explanations;
        explanations.merge(overrides);

        let defaults = UnitDefaults {
            group: self.group,
            permission: self
                .permission
                .as_deref()
                .map(|name| permissions.resolve(name))
                .transpose()?,
            explanations,
            header_group: self.header_group,
            params_group: self.params_group,
            success_group: self.success_group,
            error_group: self.error_group,
            error_example: self.error_example,
            error_params: self.error_params,
        };
        let mut unit = DocUnit::with_defaults(self.name, defaults)?;

        for entry in self.endpoints {
            let method: RequestMethod = entry.method.parse()?;
            let (call, groups, items) = entry.into_call(&permissions)?;
            let endpoint = unit
                .builder(method, call)?
                .groups(groups)
                .items(items)
                .build()?;
            unit.document(&endpoint)?;
        }

        debug!(unit = unit.name(), blocks = unit.len(), "built unit from manifest");
        Ok(unit)
    }
}

impl EndpointEntry {
    fn into_call(self, permissions: &Permissions) -> Result<(Call, Vec<String>, Vec<SectionItem>)> {
        let permission = self
            .permission
            .as_deref()
            .map(|name| permissions.resolve(name))
            .transpose()?;
        let call = Call {
            path: self.path,
            title: self.title,
            group: self.group,
            description: self.description,
            permission,
            explanations: self.explanations,
            headers: self.headers,
            query: self.query,
            form: self.form,
            json: self.json,
            response: self.response,
            success_params: self.success_params,
            error_example: self.error_example,
            error_params: self.error_params,
            header_group: self.header_group,
            params_group: self.params_group,
            success_group: self.success_group,
            error_group: self.error_group,
        };
        Ok((call, self.groups, self.items))
    }
}

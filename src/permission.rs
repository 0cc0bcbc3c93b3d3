//! Permission levels attached to an endpoint.
//!
//! The set is open: hosts implement [`Permission`] for their own levels or
//! register [`CustomPermission`] values, and the generator only ever sees
//! the trait.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A permission level rendered into the `@apiPermission` line.
pub trait Permission: fmt::Debug + Send + Sync {
    /// Name of the level; lowercased when rendered.
    fn name(&self) -> &str;

    /// Human-readable requirement. Empty by default.
    fn explain(&self) -> &str {
        ""
    }
}

/// Built-in levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasePermission {
    #[default]
    Nothing,
    Admin,
}

impl Permission for BasePermission {
    fn name(&self) -> &str {
        match self {
            BasePermission::Nothing => "Nothing",
            BasePermission::Admin => "Admin",
        }
    }

    fn explain(&self) -> &str {
        match self {
            BasePermission::Nothing => "",
            BasePermission::Admin => "User admin is required",
        }
    }
}

/// A level defined at runtime, e.g. from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPermission {
    pub name: String,
    pub explain: String,
}

impl CustomPermission {
    pub fn new(name: impl Into<String>, explain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explain: explain.into(),
        }
    }
}

impl Permission for CustomPermission {
    fn name(&self) -> &str {
        &self.name
    }

    fn explain(&self) -> &str {
        &self.explain
    }
}

/// Shared handle to any permission level.
pub type PermissionRef = Arc<dyn Permission>;

/// The default level: no permission required.
pub fn nothing() -> PermissionRef {
    Arc::new(BasePermission::Nothing)
}

/// Name → permission lookup, case-insensitive.
#[derive(Debug, Clone)]
pub struct Permissions {
    levels: IndexMap<String, PermissionRef>,
}

impl Default for Permissions {
    fn default() -> Self {
        let mut permissions = Self {
            levels: IndexMap::new(),
        };
        permissions.register(Arc::new(BasePermission::Nothing));
        permissions.register(Arc::new(BasePermission::Admin));
        permissions
    }
}

impl Permissions {
    /// Registry holding the built-in levels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a level, keyed by its lowercased name.
    pub fn register(&mut self, permission: PermissionRef) {
        self.levels
            .insert(permission.name().to_lowercase(), permission);
    }

    /// Resolve a name. Unknown names fail with `EnumMember`.
    pub fn resolve(&self, name: &str) -> Result<PermissionRef> {
        self.levels
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::EnumMember {
                kind: "Permission",
                value: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }
}

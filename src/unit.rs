//! Documentation units: a named group of endpoint docs written out as one
//! generated source file.
//!
//! A unit holds defaults shared by its endpoints and an ordered set of
//! rendered doc blocks. Recording the same endpoint twice keeps one copy, and
//! blocks come out in the order they were first recorded.

use crate::endpoint::{Endpoint, EndpointBuilder};
use crate::error::{Error, Result};
use crate::explain::Explanations;
use crate::payload::{is_blank, top_level};
use crate::permission::PermissionRef;
use crate::vocab::RequestMethod;
use indexmap::IndexSet;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header of every written unit file.
pub const FILE_HEADER: &str = "#!/usr/bin/env python3\n# -*- coding: utf-8 -*-\n\n\n";

/// Placed before every doc block in the unit body.
pub const SEPARATOR: &str = "\n\n    @staticmethod\n";

/// Values an endpoint falls back to when its own are empty.
#[derive(Debug, Clone, Default)]
pub struct UnitDefaults {
    pub group: String,
    pub permission: Option<PermissionRef>,
    pub explanations: Explanations,
    pub header_group: String,
    pub params_group: String,
    pub success_group: String,
    pub error_group: String,
    pub error_example: Value,
    pub error_params: Value,
}

/// One recorded request/response exchange.
///
/// `query` documents GET and DELETE requests; `form` and `json` are merged
/// (json wins) for the other methods. `success_params` defaults to the
/// response body.
#[derive(Debug, Clone, Default)]
pub struct Call {
    pub path: String,
    pub title: String,
    pub group: String,
    pub description: String,
    pub permission: Option<PermissionRef>,
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
}

impl Call {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    fn request_params(&self, method: RequestMethod) -> Result<Value> {
        match method {
            RequestMethod::Get | RequestMethod::Delete => Ok(self.query.clone()),
            _ => merged([&self.form, &self.json]),
        }
    }
}

fn merged(bodies: [&Value; 2]) -> Result<Value> {
    let mut merged = Map::new();
    for body in bodies {
        if is_blank(body) {
            continue;
        }
        merged.extend(top_level(body)?.clone());
    }
    Ok(Value::Object(merged))
}

fn or_default(own: String, fallback: &str) -> String {
    if own.is_empty() {
        fallback.to_string()
    } else {
        own
    }
}

fn or_default_value(own: Value, fallback: &Value) -> Value {
    if is_blank(&own) {
        fallback.clone()
    } else {
        own
    }
}

#[derive(Debug, Clone)]
pub struct DocUnit {
    name: String,
    defaults: UnitDefaults,
    docs: IndexSet<String>,
}

impl DocUnit {
    /// Fails with `InvalidValue` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_defaults(name, UnitDefaults::default())
    }

    pub fn with_defaults(name: impl Into<String>, defaults: UnitDefaults) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidValue { field: "name" });
        }
        Ok(Self {
            name,
            defaults,
            docs: IndexSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defaults(&self) -> &UnitDefaults {
        &self.defaults
    }

    /// Document a GET exchange.
    pub fn get(&mut self, call: Call) -> Result<&str> {
        self.request(RequestMethod::Get, call)
    }

    /// Document a POST exchange.
    pub fn post(&mut self, call: Call) -> Result<&str> {
        self.request(RequestMethod::Post, call)
    }

    /// Document an exchange made with any method.
    pub fn request(&mut self, method: RequestMethod, call: Call) -> Result<&str> {
        let endpoint = self.endpoint(method, call)?;
        self.document(&endpoint)
    }

    /// Build the endpoint for `call`, unit defaults filling its gaps.
    pub fn endpoint(&self, method: RequestMethod, call: Call) -> Result<Endpoint> {
        self.builder(method, call)?.build()
    }

    /// Like [`endpoint`](Self::endpoint) but leaves the builder open, e.g. to
    /// add payload variants.
    pub fn builder(&self, method: RequestMethod, call: Call) -> Result<EndpointBuilder> {
        let d = &self.defaults;
        let params = call.request_params(method)?;

        let mut explanations = d.explanations.clone();
        explanations.merge(&call.explanations);

        let permission = call.permission.or_else(|| d.permission.clone());
        let success_params = if is_blank(&call.success_params) {
            call.response.clone()
        } else {
            call.success_params
        };

        let mut builder = Endpoint::builder(call.path, method, call.title)
            .group(or_default(call.group, &d.group))
            .description(call.description)
            .explanations(explanations)
            .header(call.headers)
            .header_group(or_default(call.header_group, &d.header_group))
            .params(params)
            .params_group(or_default(call.params_group, &d.params_group))
            .success_example(call.response)
            .success_params(success_params)
            .success_group(or_default(call.success_group, &d.success_group))
            .error_example(or_default_value(call.error_example, &d.error_example))
            .error_params(or_default_value(call.error_params, &d.error_params))
            .error_group(or_default(call.error_group, &d.error_group));
        if let Some(permission) = permission {
            builder = builder.permission(permission);
        }
        Ok(builder)
    }

    /// Render `endpoint` and record the block, returning the stored copy.
    pub fn document(&mut self, endpoint: &Endpoint) -> Result<&str> {
        let doc = endpoint.doc()?;
        let (index, inserted) = self.docs.insert_full(doc);
        if !inserted {
            debug!(unit = %self.name, path = endpoint.path(), "duplicate doc block dropped");
        }
        Ok(&self.docs[index])
    }

    /// Recorded blocks in insertion order.
    pub fn docs(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Generated class source holding every recorded block.
    pub fn output(&self) -> String {
        let mut out = format!("class ApiDoc{}(object):", capitalized(&self.name));
        if self.docs.is_empty() {
            out.push_str("\n    pass");
        }
        for doc in &self.docs {
            out.push_str(SEPARATOR);
            out.push_str(doc);
        }
        out
    }

    /// Complete file content: header, class source, trailing newline.
    pub fn source(&self) -> String {
        format!("{}{}\n", FILE_HEADER, self.output())
    }

    /// Write `<name>.py` into `directory`, replacing any existing file.
    pub fn write_on(&self, directory: &Path) -> Result<PathBuf> {
        let target = directory.join(format!("{}.py", self.name));
        fs::write(&target, self.source())?;
        info!(unit = %self.name, path = %target.display(), blocks = self.docs.len(), "wrote doc unit");
        Ok(target)
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::{BasePermission, CustomPermission};
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn users_call() -> Call {
        Call {
            query: json!({"page": 1}),
            response: json!({"items": [{"id": 1}, {"id": 2}]}),
            ..Call::new("/users/list", "List users")
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        let err = DocUnit::new("").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "name" }));
    }

    #[test]
    fn get_documents_query_and_response() {
        let mut unit = DocUnit::new("users").unwrap();
        let doc = unit.get(users_call()).unwrap().to_string();

        assert!(doc.starts_with("    def users_list() -> None:\n"));
        assert!(doc.contains("@api {get} /users/list List users"));
        assert!(doc.contains("@apiParam {Number} page"));
        assert!(doc.contains("@apiSuccess {Number} items.0.id"));
        assert!(!doc.contains("\"id\": 2"));
    }

    #[test]
    fn post_merges_form_and_json() {
        let mut unit = DocUnit::new("users").unwrap();
        let call = Call {
            form: json!({"name": "a", "role": "x"}),
            json: json!({"role": "admin"}),
            ..Call::new("/users", "Create user")
        };
        let doc = unit.post(call).unwrap();
        assert!(doc.contains("@api {post} /users Create user"));
        assert!(doc.contains("@apiParam {String} name"));
        assert!(doc.contains("\"role\": \"admin\""));
    }

    #[test]
    fn success_params_override_response() {
        let unit = DocUnit::new("users").unwrap();
        let call = Call {
            success_params: json!({"total": 3}),
            ..users_call()
        };
        let endpoint = unit.endpoint(RequestMethod::Get, call).unwrap();
        let doc = endpoint.doc().unwrap();
        assert!(doc.contains("@apiSuccess {Number} total"));
        assert!(!doc.contains("@apiSuccess {Array} items"));
        assert!(doc.contains("\"items\": ["));
    }

    #[test]
    fn unit_defaults_fill_gaps() {
        let defaults = UnitDefaults {
            group: "User".into(),
            permission: Some(Arc::new(BasePermission::Admin)),
            explanations: [("page", "page index")].into_iter().collect(),
            error_example: json!({"code": 401}),
            error_params: json!({"code": 0}),
            error_group: "auth".into(),
            ..UnitDefaults::default()
        };
        let mut unit = DocUnit::with_defaults("users", defaults).unwrap();
        let doc = unit.get(users_call()).unwrap();

        assert!(doc.contains("@apiGroup User"));
        assert!(doc.contains("@apiPermission admin User admin is required"));
        assert!(doc.contains("@apiParam {Number} page page index"));
        assert!(doc.contains("@apiError (auth) {Number} code"));
        assert!(doc.contains("@apiErrorExample {json} error-example-auth"));
    }

    #[test]
    fn call_values_win_over_defaults() {
        let defaults = UnitDefaults {
            group: "User".into(),
            permission: Some(Arc::new(BasePermission::Admin)),
            ..UnitDefaults::default()
        };
        let mut unit = DocUnit::with_defaults("users", defaults).unwrap();
        let call = Call {
            group: "Account".into(),
            permission: Some(Arc::new(CustomPermission::new("Owner", "Owner only"))),
            ..users_call()
        };
        let doc = unit.get(call).unwrap();
        assert!(doc.contains("@apiGroup Account"));
        assert!(doc.contains("@apiPermission owner Owner only"));
    }

    #[test]
    fn duplicate_blocks_are_kept_once_in_order() {
        let mut unit = DocUnit::new("users").unwrap();
        unit.get(users_call()).unwrap();
        unit.post(Call::new("/users", "Create user")).unwrap();
        unit.get(users_call()).unwrap();

        assert_eq!(unit.len(), 2);
        let first_lines: Vec<&str> = unit.docs().map(|d| d.lines().next().unwrap()).collect();
        assert_eq!(
            first_lines,
            ["    def users_list() -> None:", "    def users() -> None:"]
        );
    }

    #[test]
    fn output_wraps_blocks_in_a_class() {
        let mut unit = DocUnit::new("user").unwrap();
        unit.post(Call::new("/ping", "Ping")).unwrap();
        let out = unit.output();
        assert!(out.starts_with("class ApiDocUser(object):\n\n    @staticmethod\n    def ping() -> None:\n"));
    }

    #[test]
    fn empty_unit_output_is_valid() {
        let unit = DocUnit::new("empty").unwrap();
        assert_eq!(unit.output(), "class ApiDocEmpty(object):\n    pass");
        assert!(unit.is_empty());
    }

    #[test]
    fn write_on_overwrites_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.py"), "stale").unwrap();

        let mut unit = DocUnit::new("users").unwrap();
        unit.get(users_call()).unwrap();
        let path = unit.write_on(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("users.py"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with(FILE_HEADER));
        assert!(content.contains("class ApiDocUsers(object):"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalized("user_admin"), "User_admin");
        assert_eq!(capitalized(""), "");
    }
}

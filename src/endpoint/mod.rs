//! One documented endpoint and the doc block it renders to.
//!
//! The rendered block is a stub function declaration followed by a quoted
//! annotation block:
//!
//! ```text
//!     def users_list() -> None:
//!         """
//!         @api {get} /users/list List users
//!         @apiPermission nothing
//!         @apiParam {Number} page ready to fill in
//!         ...
//!         """
//! ```
//!
//! Sections are always emitted in the order header, params, success, error.
//! Within a section, each part renders its parameter lines and then its
//! example block; parts with nothing to say are left out entirely.

mod multi;
mod path;

pub use multi::SectionItem;
pub use path::{function_name, normalize};

use crate::error::Result;
use crate::explain::Explanations;
use crate::format::{format_example, format_params, indent, join_parts, INDENT};
use crate::payload::{collapse, flatten, is_blank, top_level, FlatParams};
use crate::permission::{self, PermissionRef};
use crate::vocab::{Keyword, RequestMethod};
use serde_json::Value;
use tracing::debug;

/// Opening and closing delimiter of the annotation block.
const QUOTES: &str = "\"\"\"";

/// Payload category documented by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Params,
    Success,
    Error,
}

impl Section {
    /// Rendering order.
    pub const ALL: [Section; 4] = [
        Section::Header,
        Section::Params,
        Section::Success,
        Section::Error,
    ];

    pub fn keyword(self) -> Keyword {
        match self {
            Section::Header => Keyword::Header,
            Section::Params => Keyword::Param,
            Section::Success => Keyword::Success,
            Section::Error => Keyword::Error,
        }
    }

    /// Used for positional group labels (`params-2`).
    pub fn name(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Params => "params",
            Section::Success => "success",
            Section::Error => "error",
        }
    }
}

/// One example/parameter pair of a section, ready to format.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPart {
    pub section: Section,
    pub group: String,
    pub example: Value,
    pub params: FlatParams,
}

impl SectionPart {
    /// Success payloads are normalized here: the example is collapsed and the
    /// parameters are flattened. Other sections use their payloads as given.
    fn new(section: Section, group: String, example: &Value, params: &Value) -> Result<Self> {
        let (example, params) = match section {
            Section::Success => (collapsed(example)?, flattened(params)?),
            _ => (example.clone(), as_params(params)?),
        };
        Ok(Self {
            section,
            group,
            example,
            params,
        })
    }

    fn render(&self, explanations: &Explanations) -> Result<[String; 2]> {
        let keyword = self.section.keyword();
        Ok([
            format_params(&self.params, keyword, &self.group, explanations),
            format_example(&self.example, keyword, &self.group)?,
        ])
    }
}

fn collapsed(example: &Value) -> Result<Value> {
    if is_blank(example) {
        return Ok(Value::Null);
    }
    Ok(collapse(example)?.into_owned())
}

fn flattened(params: &Value) -> Result<FlatParams> {
    if is_blank(params) {
        return Ok(FlatParams::new());
    }
    flatten(params)
}

fn as_params(params: &Value) -> Result<FlatParams> {
    if is_blank(params) {
        return Ok(FlatParams::new());
    }
    Ok(top_level(params)?.clone())
}

/// Immutable description of a documented endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    path: String,
    method: RequestMethod,
    title: String,
    group: String,
    description: String,
    permission: PermissionRef,
    explanations: Explanations,
    parts: Vec<SectionPart>,
}

impl Endpoint {
    pub fn builder(
        path: impl Into<String>,
        method: RequestMethod,
        title: impl Into<String>,
    ) -> EndpointBuilder {
        EndpointBuilder::new(path, method, title)
    }

    /// Normalized path.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parts(&self, section: Section) -> impl Iterator<Item = &SectionPart> {
        self.parts.iter().filter(move |p| p.section == section)
    }

    pub fn function_name(&self) -> String {
        function_name(&self.path)
    }

    /// `def users_list() -> None:`
    pub fn stub(&self) -> String {
        format!("def {}() -> None:", self.function_name())
    }

    /// The quoted annotation block, indented one level.
    pub fn annotations(&self) -> Result<String> {
        let mut parts = vec![
            QUOTES.to_string(),
            Keyword::Declare.statement(self.method, &self.path, &self.title),
            Keyword::Description.explain(&self.description),
            Keyword::Group.explain(&self.group),
            Keyword::Permission.instruction(self.permission.as_ref()),
        ];
        for part in &self.parts {
            parts.extend(part.render(&self.explanations)?);
        }
        parts.push(QUOTES.to_string());

        Ok(indent(&join_parts(parts), INDENT))
    }

    /// Stub declaration plus annotation block, the whole indented one level.
    pub fn doc(&self) -> Result<String> {
        let raw = format!("{}\n{}", self.stub(), self.annotations()?);
        Ok(indent(&raw, INDENT))
    }
}

/// Collects endpoint fields; [`EndpointBuilder::build`] validates them.
///
/// Single-variant payloads go through the section setters (`header`,
/// `params`, `success_example`, ...). Several variants go through
/// [`items`](EndpointBuilder::items) and [`groups`](EndpointBuilder::groups);
/// both may be combined, single-variant parts come first.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    path: String,
    method: RequestMethod,
    title: String,
    group: String,
    description: String,
    permission: PermissionRef,
    explanations: Explanations,
    header: Value,
    header_group: String,
    params: Value,
    params_group: String,
    success_example: Value,
    success_params: Value,
    success_group: String,
    error_example: Value,
    error_params: Value,
    error_group: String,
    groups: Vec<String>,
    items: Vec<SectionItem>,
}

impl EndpointBuilder {
    pub fn new(path: impl Into<String>, method: RequestMethod, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            title: title.into(),
            group: String::new(),
            description: String::new(),
            permission: permission::nothing(),
            explanations: Explanations::new(),
            header: Value::Null,
            header_group: String::new(),
            params: Value::Null,
            params_group: String::new(),
            success_example: Value::Null,
            success_params: Value::Null,
            success_group: String::new(),
            error_example: Value::Null,
            error_params: Value::Null,
            error_group: String::new(),
            groups: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn permission(mut self, permission: PermissionRef) -> Self {
        self.permission = permission;
        self
    }

    pub fn explanations(mut self, explanations: Explanations) -> Self {
        self.explanations = explanations;
        self
    }

    /// Request headers; documented and shown as the header example.
    pub fn header(mut self, header: Value) -> Self {
        self.header = header;
        self
    }

    pub fn header_group(mut self, group: impl Into<String>) -> Self {
        self.header_group = group.into();
        self
    }

    /// Request parameters; documented and shown as the param example.
    pub fn params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    pub fn params_group(mut self, group: impl Into<String>) -> Self {
        self.params_group = group.into();
        self
    }

    /// Response body; collapsed before it is shown.
    pub fn success_example(mut self, example: Value) -> Self {
        self.success_example = example;
        self
    }

    /// Response fields to document; flattened before they are listed.
    pub fn success_params(mut self, params: Value) -> Self {
        self.success_params = params;
        self
    }

    pub fn success_group(mut self, group: impl Into<String>) -> Self {
        self.success_group = group.into();
        self
    }

    pub fn error_example(mut self, example: Value) -> Self {
        self.error_example = example;
        self
    }

    pub fn error_params(mut self, params: Value) -> Self {
        self.error_params = params;
        self
    }

    pub fn error_group(mut self, group: impl Into<String>) -> Self {
        self.error_group = group.into();
        self
    }

    /// Shared group labels for [`items`](Self::items), by position.
    pub fn groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Payload variants, each rendered as its own group.
    pub fn items(mut self, items: Vec<SectionItem>) -> Self {
        self.items = items;
        self
    }

    /// Validate and normalize.
    ///
    /// Fails with `IllegalPath` for a malformed path, `NotEnoughGroups` when
    /// fewer groups than items are given, and `TypeMismatch` when a parameter
    /// payload is neither empty nor an object.
    pub fn build(self) -> Result<Endpoint> {
        let path = normalize(&self.path)?;
        multi::check_groups(&self.groups, &self.items)?;

        let mut parts = Vec::new();
        for section in Section::ALL {
            let (example, params, group) = match section {
                Section::Header => (&self.header, &self.header, &self.header_group),
                Section::Params => (&self.params, &self.params, &self.params_group),
                Section::Success => (
                    &self.success_example,
                    &self.success_params,
                    &self.success_group,
                ),
                Section::Error => (&self.error_example, &self.error_params, &self.error_group),
            };
            parts.push(SectionPart::new(section, group.clone(), example, params)?);

            let groups = multi::resolve_groups(section, &self.groups, &self.items)?;
            for (item, group) in self.items.iter().zip(groups) {
                let (example, params) = item.payloads(section);
                parts.push(SectionPart::new(section, group, example, params)?);
            }
        }

        debug!(path = %path, method = %self.method, items = self.items.len(), "built endpoint");
        Ok(Endpoint {
            path,
            method: self.method,
            title: self.title,
            group: self.group,
            description: self.description,
            permission: self.permission,
            explanations: self.explanations,
            parts,
        })
    }
}

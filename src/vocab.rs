//! apiDoc annotation keywords and the HTTP methods they describe.

use crate::error::{Error, Result};
use crate::payload::ParamType;
use crate::permission::Permission;
use std::fmt;
use std::str::FromStr;

/// HTTP method of a documented endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestMethod::Get => "get",
            RequestMethod::Post => "post",
            RequestMethod::Put => "put",
            RequestMethod::Patch => "patch",
            RequestMethod::Delete => "delete",
        }
    }

    /// `{get}` form used in the declaration line.
    pub fn formatted(self) -> String {
        format!("{{{}}}", self.as_str())
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(RequestMethod::Get),
            "post" => Ok(RequestMethod::Post),
            "put" => Ok(RequestMethod::Put),
            "patch" => Ok(RequestMethod::Patch),
            "delete" => Ok(RequestMethod::Delete),
            _ => Err(Error::EnumMember {
                kind: "RequestMethod",
                value: s.to_string(),
            }),
        }
    }
}

/// The fixed set of annotation keywords the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Declare,
    Permission,
    Group,
    Description,
    Header,
    Param,
    Success,
    Error,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Declare => "@api",
            Keyword::Permission => "@apiPermission",
            Keyword::Group => "@apiGroup",
            Keyword::Description => "@apiDescription",
            Keyword::Header => "@apiHeader",
            Keyword::Param => "@apiParam",
            Keyword::Success => "@apiSuccess",
            Keyword::Error => "@apiError",
        }
    }

    /// Lowercase member name, the stem of example labels (`success-example`).
    pub fn label(self) -> &'static str {
        match self {
            Keyword::Declare => "declare",
            Keyword::Permission => "permission",
            Keyword::Group => "group",
            Keyword::Description => "description",
            Keyword::Header => "header",
            Keyword::Param => "param",
            Keyword::Success => "success",
            Keyword::Error => "error",
        }
    }

    /// `@api {get} /users/list List users`
    pub fn statement(self, method: RequestMethod, path: &str, title: &str) -> String {
        [self.as_str(), &method.formatted(), path, title].join(" ")
    }

    /// `@apiPermission admin User admin is required`
    pub fn instruction(self, permission: &dyn Permission) -> String {
        let name = permission.name().to_lowercase();
        let explain = permission.explain();
        if explain.is_empty() {
            format!("{} {}", self.as_str(), name)
        } else {
            format!("{} {} {}", self.as_str(), name, explain)
        }
    }

    /// `<keyword> <content>`, or nothing at all for empty content.
    pub fn explain(self, content: &str) -> String {
        if content.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.as_str(), content)
        }
    }

    /// `@apiParam (group) {Number} page explanation`
    pub fn param(self, typing: ParamType, name: &str, explain: &str, group: &str) -> String {
        if group.is_empty() {
            format!("{} {} {} {}", self.as_str(), typing.formatted(), name, explain)
        } else {
            format!(
                "{} ({}) {} {} {}",
                self.as_str(),
                group,
                typing.formatted(),
                name,
                explain
            )
        }
    }

    /// `@apiSuccessExample {json} <label>` followed by the example body.
    pub fn example(self, label: &str, content: &str) -> String {
        format!("{}Example {{json}} {}\n{}", self.as_str(), label, content)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

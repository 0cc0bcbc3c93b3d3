//! adfmt: apiDoc annotation stubs from example payloads.
//!
//! Given an endpoint's path, method, title and sample header, parameter,
//! response and error payloads, adfmt renders a documentation block in the
//! apiDoc annotation convention plus a matching empty function stub:
//!
//! - [`payload`] normalizes example trees ([`flatten`], [`collapse`]).
//! - [`format`] turns payloads into sorted annotation lines and JSON examples.
//! - [`endpoint`] assembles one endpoint's doc block.
//! - [`unit`] collects blocks into a generated source file.
//! - [`manifest`] loads units from JSON, for the `adfmt` command.

pub mod endpoint;
pub mod error;
pub mod explain;
pub mod format;
pub mod manifest;
pub mod payload;
pub mod permission;
pub mod unit;
pub mod vocab;

pub use endpoint::{Endpoint, EndpointBuilder, Section, SectionItem};
pub use error::{Error, Result};
pub use explain::Explanations;
pub use format::{format_example, format_params};
pub use manifest::Manifest;
pub use payload::{collapse, flatten, FlatParams, ParamType, PayloadTree};
pub use permission::{BasePermission, CustomPermission, Permission, PermissionRef, Permissions};
pub use unit::{Call, DocUnit, UnitDefaults};
pub use vocab::{Keyword, RequestMethod};

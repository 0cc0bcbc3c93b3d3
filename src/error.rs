//! Error type shared by every stage of the pipeline.

use thiserror::Error;

/// Errors produced while normalizing payloads or assembling documentation.
#[derive(Debug, Error)]
pub enum Error {
    /// Flattener or collapser invoked on something other than an object.
    #[error("expected a JSON object at the top level, found {found}")]
    TypeMismatch { found: &'static str },

    #[error("illegal path `{0}`: expected an absolute path such as `/users/list`")]
    IllegalPath(String),

    /// A method or permission value is not a member of its enumeration.
    #[error("`{value}` is not a member of {kind}")]
    EnumMember { kind: &'static str, value: String },

    #[error("{groups} group(s) given for {items} item(s); give one group per item or none")]
    NotEnoughGroups { groups: usize, items: usize },

    #[error("{field} should be a non-empty string")]
    InvalidValue { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

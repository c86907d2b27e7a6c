//! Errors for representations that do not have the shape a renderer expects.

use crate::routes::Route;
use thiserror::Error;

/// A body was missing something its renderer needs.
///
/// Rendering checks everything up front, so when one of these is returned the
/// page has not been touched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    #[error("malformed response: missing field `{0}`")]
    MissingField(String),

    #[error("malformed response: missing control `{0}`")]
    MissingControl(String),

    #[error("malformed response: control `{0}` has no schema")]
    MissingSchema(String),

    #[error("malformed response: invalid item in `{field}`: {reason}")]
    InvalidItem { field: String, reason: String },

    #[error("no route for relation `{rel}` on the {from} page")]
    NoRoute { from: Route, rel: String },
}

//! Wire-to-request parsing for task bodies.
//!
//! Bodies are decoded into a JSON object first, then each known field is
//! taken out with an explicit type check. Anything left over is an unknown
//! field and rejects the request.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};

/// Wire name of the title field.
pub const TITLE_FIELD: &str = "title";

/// Wire name of the description field.
pub const DESCRIPTION_FIELD: &str = "description";

/// Structural problems with a request body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The body is not valid JSON.
    #[error("request body must be valid JSON: {0}")]
    InvalidJson(String),

    /// The body is JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    /// A field holds something other than a string.
    #[error("field '{0}' must be a string")]
    NotAString(&'static str),

    /// The body names a field clients may not set.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Decodes `body` as a JSON object.
///
/// # Errors
///
/// Returns [`PayloadError::InvalidJson`] or [`PayloadError::NotAnObject`].
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, PayloadError> {
    let value = serde_json::from_slice::<Value>(body)
        .map_err(|err| PayloadError::InvalidJson(err.to_string()))?;
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(PayloadError::NotAnObject),
    }
}

/// Builds a create request from a decoded body.
///
/// # Errors
///
/// Returns a [`PayloadError`] when `title` is missing, a field is not a
/// string, or an unknown field is present.
pub fn create_request(mut fields: Map<String, Value>) -> Result<CreateTaskRequest, PayloadError> {
    let title = take_string(&mut fields, TITLE_FIELD)?;
    let description = take_string(&mut fields, DESCRIPTION_FIELD)?;
    reject_unknown(&fields)?;

    let mut request =
        CreateTaskRequest::new(title.ok_or(PayloadError::MissingField(TITLE_FIELD))?);
    if let Some(value) = description {
        request = request.with_description(value);
    }
    Ok(request)
}

/// Builds a partial update request from a decoded body.
///
/// # Errors
///
/// Returns a [`PayloadError`] when a field is not a string or an unknown
/// field is present.
pub fn update_request(mut fields: Map<String, Value>) -> Result<UpdateTaskRequest, PayloadError> {
    let title = take_string(&mut fields, TITLE_FIELD)?;
    let description = take_string(&mut fields, DESCRIPTION_FIELD)?;
    reject_unknown(&fields)?;

    let mut request = UpdateTaskRequest::new();
    if let Some(value) = title {
        request = request.with_title(value);
    }
    if let Some(value) = description {
        request = request.with_description(value);
    }
    Ok(request)
}

/// Removes `name` from `fields`, returning its string value when present.
///
/// An explicit `null` counts as present and is rejected; clearing a field
/// through the API is not supported.
fn take_string(
    fields: &mut Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, PayloadError> {
    match fields.remove(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(PayloadError::NotAString(name)),
    }
}

fn reject_unknown(fields: &Map<String, Value>) -> Result<(), PayloadError> {
    match fields.keys().next() {
        Some(key) => Err(PayloadError::UnknownField(key.clone())),
        None => Ok(()),
    }
}

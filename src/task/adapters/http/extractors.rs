//! Custom Axum extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde_json::{Map, Value};

use super::error::ApiError;
use super::payload::parse_object;
use crate::task::domain::TaskId;

/// Extract a request body that must be a JSON object.
///
/// Failures render as `{"error": ...}` instead of Axum's plain-text
/// rejections. Malformed bodies are 400; buffering failures such as an
/// oversized body keep Axum's status.
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                let status = rejection.status();
                if status == StatusCode::BAD_REQUEST {
                    ApiError::Validation(rejection.body_text())
                } else {
                    ApiError::Rejected(status, rejection.body_text())
                }
            })?;
        Ok(Self(parse_object(&body)?))
    }
}

/// Extract a task id from the `{id}` path segment.
///
/// A segment that is not a positive integer cannot name a task, so it is
/// answered with 404 like any other unknown id.
pub struct TaskIdPath(pub TaskId);

impl<S> FromRequestParts<S> for TaskIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::TaskNotFound)?;

        let id = raw.parse::<TaskId>().map_err(|_| ApiError::TaskNotFound)?;
        Ok(Self(id))
    }
}

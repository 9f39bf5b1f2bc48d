//! API error type with JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::payload::PayloadError;
use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when a task id does not resolve.
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

/// API error type with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or constraint-violating input (400).
    Validation(String),

    /// The referenced task does not exist (404).
    TaskNotFound,

    /// No route matches the request path (404).
    RouteNotFound,

    /// The path exists but not for this method (405).
    MethodNotAllowed,

    /// The body could not be read, e.g. it exceeds the size limit.
    Rejected(StatusCode, String),

    /// Unanticipated failure (500). The detail is logged, never returned.
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::TaskNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Rejected(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Rejected(_, message) => message.clone(),
            Self::TaskNotFound => TASK_NOT_FOUND_MESSAGE.to_owned(),
            Self::RouteNotFound => "Not found".to_owned(),
            Self::MethodNotAllowed => "Method not allowed".to_owned(),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.client_message() });
        (status, Json(body)).into_response()
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(domain) => Self::Validation(domain.to_string()),
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => Self::TaskNotFound,
            TaskServiceError::Repository(repository @ TaskRepositoryError::Persistence(_)) => {
                Self::Internal(repository.to_string())
            }
        }
    }
}

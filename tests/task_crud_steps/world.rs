//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use eyre::WrapErr;
use rstest::fixture;
use serde_json::Value;
use tasktrack::server::build_app;
use tasktrack::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use tower::ServiceExt;

use crate::test_helpers::SteppingClock;

/// Response captured from the most recent request.
pub struct CapturedResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Decoded JSON body.
    pub body: Value,
}

/// Scenario world for task CRUD behaviour tests.
pub struct TaskApiWorld {
    pub app: Router,
    pub last_response: Option<CapturedResponse>,
}

impl TaskApiWorld {
    /// Creates a world serving an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(SteppingClock::new()),
        );
        Self {
            app: build_app(service),
            last_response: None,
        }
    }

    /// Sends a request and records the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or the body is not
    /// JSON.
    pub fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<(), eyre::Report> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map_or_else(Body::empty, Body::from))
            .wrap_err("build request")?;

        let app = self.app.clone();
        let captured = run_async(async move {
            let response = app.oneshot(request).await.wrap_err("route request")?;
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .wrap_err("read response body")?;
            let body = serde_json::from_slice(&bytes).wrap_err("decode response body")?;
            Ok::<_, eyre::Report>(CapturedResponse { status, body })
        })?;
        self.last_response = Some(captured);
        Ok(())
    }

    /// Returns the most recent response.
    ///
    /// # Errors
    ///
    /// Returns an error when no request has been sent yet.
    pub fn response(&self) -> Result<&CapturedResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been sent in this scenario"))
    }
}

impl Default for TaskApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskApiWorld {
    TaskApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

//! Task endpoints.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use mockable::Clock;
use serde_json::{Value, json};

use super::error::ApiError;
use super::extractors::{JsonObject, TaskIdPath};
use super::payload::{create_request, update_request};
use super::response::{DeleteResponse, TaskResponse};
use crate::task::{ports::TaskRepository, services::TaskService};

/// Collection route.
pub const TASKS_PATH: &str = "/tasks";

/// Single-task route.
pub const TASK_PATH: &str = "/tasks/{id}";

/// Health route.
pub const HEALTH_PATH: &str = "/health";

/// Shared state for task handlers.
pub struct TaskApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: Arc<TaskService<R, C>>,
}

impl<R, C> TaskApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task service for use by the router.
    #[must_use]
    pub fn new(service: TaskService<R, C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns the wrapped service.
    #[must_use]
    pub fn service(&self) -> &TaskService<R, C> {
        &self.service
    }
}

impl<R, C> Clone for TaskApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// POST /tasks - create a task
async fn create_task<R, C>(
    State(state): State<TaskApiState<R, C>>,
    JsonObject(body): JsonObject,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let request = create_request(body)?;
    let task = state.service().create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// GET /tasks - list all tasks
async fn list_tasks<R, C>(
    State(state): State<TaskApiState<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.service().list().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// GET /tasks/{id} - get a single task
async fn get_task<R, C>(
    State(state): State<TaskApiState<R, C>>,
    TaskIdPath(id): TaskIdPath,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state.service().get(id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// PUT /tasks/{id} - partially update a task
///
/// An unknown id is reported before any problem with the body.
async fn update_task<R, C>(
    State(state): State<TaskApiState<R, C>>,
    TaskIdPath(id): TaskIdPath,
    body: Result<JsonObject, ApiError>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.service().get(id).await?;
    let JsonObject(fields) = body?;
    let request = update_request(fields)?;
    let task = state.service().update(id, request).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /tasks/{id} - delete a task
async fn delete_task<R, C>(
    State(state): State<TaskApiState<R, C>>,
    TaskIdPath(id): TaskIdPath,
) -> Result<Json<DeleteResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.service().delete(id).await?;
    Ok(Json(DeleteResponse::default()))
}

/// GET /health - report store reachability
async fn health<R, C>(State(state): State<TaskApiState<R, C>>) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let count = state.service().count().await?;
    Ok(Json(json!({ "status": "ok", "tasks": count })))
}

/// Task and health routes with state applied.
pub fn router<R, C>(state: TaskApiState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            TASKS_PATH,
            get(list_tasks::<R, C>).post(create_task::<R, C>),
        )
        .route(
            TASK_PATH,
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route(HEALTH_PATH, get(health::<R, C>))
        .with_state(state)
}

//! HTTP application assembly and server lifecycle.
//!
//! - JSON fallbacks for unknown routes and methods
//! - Request tracing
//! - Panics rendered as 500 JSON errors
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::task::{
    adapters::{
        http::{self, ApiError, TaskApiState, docs},
        postgres::{PostgresTaskRepository, TaskPgPool},
    },
    ports::TaskRepository,
    services::TaskService,
};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Binding or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the complete application router around a task service.
pub fn build_app<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .merge(http::router(TaskApiState::new(service)))
        .merge(docs::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

/// Builds the r2d2 pool named by the configuration.
///
/// # Errors
///
/// Returns [`ServerError::Pool`] when no connection can be established.
pub fn connect_pool(config: &AppConfig) -> Result<TaskPgPool, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().max_size(config.pool_size).build(manager)?;
    Ok(pool)
}

/// Runs the HTTP server against `PostgreSQL` until a shutdown signal.
///
/// The schema is expected to be migrated already.
///
/// # Errors
///
/// Returns [`ServerError`] when the pool, listener, or server fails.
pub async fn run_server(config: AppConfig) -> Result<(), ServerError> {
    let pool = connect_pool(&config)?;
    let repository = PostgresTaskRepository::new(pool);
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let app = build_app(service);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, debug = config.debug, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, starting shutdown"),
        () = terminate => tracing::info!("received SIGTERM, starting shutdown"),
    }
}

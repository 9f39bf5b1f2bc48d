//! Tasktrack: task records over HTTP.
//!
//! Clients create, list, fetch, partially update, and delete tasks, each
//! carrying a title, an optional description, and server-managed
//! timestamps.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, storage, and HTTP routes
//! - [`server`]: Application router assembly and server lifecycle
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;

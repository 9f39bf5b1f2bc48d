//! Adapter implementations for task ports.
//!
//! - [`memory`]: in-process store for tests and local runs
//! - [`postgres`]: Diesel-backed `PostgreSQL` store
//! - [`http`]: inbound axum adapter exposing the task service

pub mod http;
pub mod memory;
pub mod postgres;

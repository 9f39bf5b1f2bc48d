//! Inbound HTTP adapter for the task service.
//!
//! Routes live under `/tasks`. Bodies are parsed explicitly by [`payload`]
//! and every failure is rendered as a JSON `{"error": ...}` payload by
//! [`ApiError`].

pub mod docs;
pub mod error;
pub mod extractors;
pub mod payload;
pub mod response;
pub mod routes;

pub use error::ApiError;
pub use routes::{TaskApiState, router};

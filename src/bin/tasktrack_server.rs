//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/tasktrack tasktrack_server
//! ```
//!
//! Configuration is read from the environment (and a `.env` file when
//! present). Apply the SQL migrations under `migrations/` before starting.

use std::process::ExitCode;

use tasktrack::{config::AppConfig, server::run_server, telemetry::init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(false);
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.debug);

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server exited with error");
            ExitCode::FAILURE
        }
    }
}

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Builds the default log filter; `RUST_LOG` overrides it when set.
#[must_use]
pub fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug {
        "tasktrack=debug,tower_http=debug,info"
    } else {
        "tasktrack=info,tower_http=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global fmt subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing(debug: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(true)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

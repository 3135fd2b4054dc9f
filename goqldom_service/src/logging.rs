//! Structured logging with `tracing`.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the `default` filter directive.
pub fn init(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_target(false).init();
}

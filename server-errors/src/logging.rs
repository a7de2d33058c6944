use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Filter comes from `RUST_LOG`, defaulting
/// to `warn`; output goes to stderr so stdout carries only the report.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

//! Tracing setup for the action binary.

use tracing::Level;

/// Initializes the fmt subscriber on stderr. Runners set `RUNNER_DEBUG=1`
/// when step debug logging is enabled, which bumps us to DEBUG.
pub fn init() {
    let level = if runner_debug() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn runner_debug() -> bool {
    std::env::var("RUNNER_DEBUG").map(|v| v == "1").unwrap_or(false)
}

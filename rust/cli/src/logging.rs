//! Diagnostic logging setup for the `pitboss` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PITBOSS_LOG=debug`.
pub const LOG_ENV: &str = "PITBOSS_LOG";

/// Filter from `PITBOSS_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs a stderr fmt subscriber so log lines never mix with game output
/// on stdout. Calling it twice leaves the first subscriber in place.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

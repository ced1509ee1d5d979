//! Logging configuration
//!
//! Initializes tracing for the application.

/// Initializes logging with the specified level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Job blocks go to stdout; keep log lines on stderr so they never mix.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();
}

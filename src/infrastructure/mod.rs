//! Ambient infrastructure: configuration and logging.

pub mod config;
pub mod logging;

pub use config::{Config, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS, MAX_WORKERS};
pub use logging::init_logging;

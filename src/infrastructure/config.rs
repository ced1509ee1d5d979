//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of simulated workers
pub const DEFAULT_WORKERS: usize = 10;

/// Hard upper bound on the worker count; larger requests are clamped
pub const MAX_WORKERS: usize = 10;

/// Default capacity of each hand-off queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 4;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Requested number of simulated workers
    pub workers: usize,
    /// Capacity of the worker-to-spool queue
    pub spool_capacity: usize,
    /// Capacity of the spool-to-print queue
    pub print_capacity: usize,
    /// Directory holding the `prog<i>.txt` program files
    pub input_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            spool_capacity: DEFAULT_QUEUE_CAPACITY,
            print_capacity: DEFAULT_QUEUE_CAPACITY,
            input_dir: PathBuf::from("input"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Returns the worker count after clamping to [`MAX_WORKERS`]
    #[must_use]
    pub fn effective_workers(&self) -> usize {
        self.workers.min(MAX_WORKERS)
    }

    /// True when the requested worker count exceeds the maximum
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.workers > MAX_WORKERS
    }
}

//! Error types for the spooler domain

use thiserror::Error;

/// Errors that can occur while running the spooler pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpoolerError {
    /// A worker's instruction source is missing or unreadable
    #[error("worker {worker_id}: cannot read instruction source: {message}")]
    Source {
        /// Id of the worker whose source failed to open.
        worker_id: usize,
        /// Error message from the underlying read.
        message: String,
    },

    /// Writing a job block to the output sink failed
    #[error("sink write failed: {0}")]
    Sink(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(String),

    /// Worker count of zero requested at startup
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    /// Queue capacity of zero requested at startup
    #[error("queue capacity must be at least 1, got {0}")]
    InvalidQueueCapacity(usize),

    /// A stage task panicked or was cancelled before completion
    #[error("stage task failed: {0}")]
    Join(String),
}

impl From<std::io::Error> for SpoolerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

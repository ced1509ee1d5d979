//! Output sinks.
//!
//! The print stage hands each rendered job block to a [`Sink`]. The stdout
//! sink writes a block in one locked write so concurrent tracing output or
//! another block can never split it.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::Write as _;

use crate::spooler::SpoolerError;

/// Destination for rendered job blocks
#[async_trait]
pub trait Sink: Send + Sync {
    /// Writes one job block atomically
    async fn write(&self, block: &str) -> Result<(), SpoolerError>;
}

/// Sink writing job blocks to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Creates a stdout sink
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Sink for StdoutSink {
    async fn write(&self, block: &str) -> Result<(), SpoolerError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(block.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| SpoolerError::Sink(e.to_string()))
    }
}

/// Sink recording job blocks in memory, for tests and summaries
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty in-memory sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the blocks written so far, in write order
    #[must_use]
    pub fn blocks(&self) -> Vec<String> {
        self.blocks.lock().clone()
    }

    /// Returns the number of blocks written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.lock().len()
    }

    /// Returns true if nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn write(&self, block: &str) -> Result<(), SpoolerError> {
        self.blocks.lock().push(block.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink_records_blocks_in_order() {
        let sink = MemorySink::new();
        sink.write("first\n").await.unwrap();
        sink.write("second\n").await.unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.blocks(), vec!["first\n", "second\n"]);
    }

    #[tokio::test]
    async fn test_stdout_sink_write_succeeds() {
        let sink = StdoutSink::new();
        assert!(sink.write("").await.is_ok());
    }
}

//! Print jobs.
//!
//! A [`Job`] is an immutable text payload plus identifying metadata. Jobs
//! move by value through the pipeline: each instance is owned by exactly one
//! queue slot at a time and is dropped after the print stage writes it.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

/// A unit of printable text produced by one worker's job block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Id of the worker that produced this job
    pub worker_id: usize,
    /// Job identifier taken from the `NewJob` instruction
    pub job_id: String,
    /// Accumulated print lines, in submission order
    pub lines: Vec<String>,
    /// Wall-clock time between `NewJob` and submission, if measured
    pub elapsed: Option<Duration>,
}

impl Job {
    /// Creates a job with no lines
    #[must_use]
    pub fn new(worker_id: usize, job_id: impl Into<String>) -> Self {
        Self {
            worker_id,
            job_id: job_id.into(),
            lines: Vec::new(),
            elapsed: None,
        }
    }

    /// Sets the elapsed-time annotation
    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Returns the number of print lines in this job
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Renders the job as one contiguous output block.
    ///
    /// The block starts with a header naming the worker and job, followed by
    /// the accumulated lines, followed by the elapsed-time annotation when
    /// one was recorded. The print stage writes the whole block in a single
    /// write so jobs are never interleaved in the output stream.
    #[must_use]
    pub fn render(&self) -> String {
        let mut block = String::new();
        let _ = writeln!(block, "--- worker {} job {} ---", self.worker_id, self.job_id);
        for line in &self.lines {
            let _ = writeln!(block, "{line}");
        }
        if let Some(elapsed) = self.elapsed {
            let _ = writeln!(block, "(elapsed {elapsed:?})");
        }
        block
    }
}

//! Shared job accounting.
//!
//! The pipeline's termination protocol rests on one shared record of five
//! monotonic counters. Every mutation happens under the record's own lock,
//! and every read for a termination decision takes one snapshot of the
//! whole record in a single lock acquisition. Reading fields across
//! separate acquisitions could observe a torn mix of before/after values.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Mutually-exclusive job accounting record shared by all stages
#[derive(Debug, Default)]
pub struct PipelineCounters {
    inner: Mutex<CountersSnapshot>,
}

impl PipelineCounters {
    /// Creates a record with all counters at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one worker entering its instruction loop
    pub fn record_started(&self) {
        self.inner.lock().started += 1;
    }

    /// Records one worker completing its exit protocol
    pub fn record_terminated(&self) {
        self.inner.lock().terminated += 1;
    }

    /// Records one job submitted to the spool queue
    pub fn record_spooled(&self) {
        self.inner.lock().spooled += 1;
    }

    /// Records one job handed from the spool queue to the print queue
    pub fn record_sent_to_print(&self) {
        self.inner.lock().sent_to_print += 1;
    }

    /// Records one job written to the output sink
    pub fn record_printed(&self) {
        self.inner.lock().printed += 1;
    }

    /// Takes an atomic snapshot of the whole record
    #[must_use]
    pub fn snapshot(&self) -> CountersSnapshot {
        *self.inner.lock()
    }
}

/// One consistent observation of the pipeline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountersSnapshot {
    /// Workers that have entered their instruction loop
    pub started: usize,
    /// Workers that have completed their exit protocol
    pub terminated: usize,
    /// Jobs submitted to the spool queue
    pub spooled: usize,
    /// Jobs handed from the spool queue to the print queue
    pub sent_to_print: usize,
    /// Jobs written to the output sink
    pub printed: usize,
}

impl CountersSnapshot {
    /// True when the spool stage may exit: every worker has terminated and
    /// every spooled job has been handed to the print queue
    #[must_use]
    pub fn spool_stage_done(&self, workers: usize) -> bool {
        self.terminated == workers && self.spooled == self.sent_to_print
    }

    /// True when the print stage may exit: every worker has terminated and
    /// every spooled job has been printed
    #[must_use]
    pub fn print_stage_done(&self, workers: usize) -> bool {
        self.terminated == workers && self.spooled == self.printed
    }

    /// True when every submitted job has fully drained through the pipeline
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.sent_to_print == self.spooled && self.printed == self.spooled
    }
}

//! Pipeline runtime.
//!
//! Constructs the shared state exactly once (two bounded queues, the
//! counters record, two availability semaphores), injects it into N worker
//! tasks plus the two singleton stages, and awaits all N+2 tasks. Nothing
//! here is ambient static state; every stage receives its collaborators by
//! shared reference, which is what lets the stage tests above run against
//! fakes.

use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info};
use uuid::Uuid;

use crate::infrastructure::Config;
use crate::program::InstructionSource;
use crate::spooler::{BoundedQueue, CountersSnapshot, PipelineCounters, Sink, SpoolerError};
use crate::stages::{PrintStage, SpoolStage, WorkerTask};

/// Owns the configuration and drives one pipeline run
#[derive(Debug, Clone)]
pub struct SpoolerRuntime {
    config: Config,
}

impl SpoolerRuntime {
    /// Creates a runtime for the given configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full pipeline to completion and returns the final counters.
    ///
    /// # Errors
    ///
    /// Returns [`SpoolerError::InvalidWorkerCount`] for a zero worker count,
    /// [`SpoolerError::InvalidQueueCapacity`] for a zero queue capacity, and
    /// [`SpoolerError::Join`] if a stage task panics.
    pub async fn run(
        &self,
        source: Arc<dyn InstructionSource>,
        sink: Arc<dyn Sink>,
    ) -> Result<RunSummary, SpoolerError> {
        if self.config.workers == 0 {
            return Err(SpoolerError::InvalidWorkerCount(0));
        }
        if self.config.spool_capacity == 0 || self.config.print_capacity == 0 {
            return Err(SpoolerError::InvalidQueueCapacity(0));
        }
        let workers = self.config.effective_workers();
        let started = Instant::now();
        let run_id = Uuid::new_v4();
        info!(
            "run {run_id}: {workers} workers, spool capacity {}, print capacity {}",
            self.config.spool_capacity, self.config.print_capacity
        );

        let counters = Arc::new(PipelineCounters::new());
        let spool_queue = Arc::new(BoundedQueue::new(self.config.spool_capacity));
        let print_queue = Arc::new(BoundedQueue::new(self.config.print_capacity));
        let spool_signal = Arc::new(Semaphore::new(0));
        let print_signal = Arc::new(Semaphore::new(0));

        let mut handles = Vec::with_capacity(workers + 2);
        for id in 1..=workers {
            let task = WorkerTask::new(
                id,
                Arc::clone(&source),
                Arc::clone(&spool_queue),
                Arc::clone(&counters),
                Arc::clone(&spool_signal),
            );
            handles.push(tokio::spawn(task.run()));
        }

        let spool = SpoolStage::new(
            workers,
            Arc::clone(&spool_queue),
            Arc::clone(&print_queue),
            Arc::clone(&counters),
            Arc::clone(&spool_signal),
            Arc::clone(&print_signal),
        );
        handles.push(tokio::spawn(spool.run()));

        let print = PrintStage::new(
            workers,
            Arc::clone(&print_queue),
            Arc::clone(&counters),
            Arc::clone(&print_signal),
            sink,
        );
        handles.push(tokio::spawn(print.run()));

        for handle in handles {
            handle.await.map_err(|e| SpoolerError::Join(e.to_string()))?;
        }

        let counters = counters.snapshot();
        debug!("run {run_id}: final counters {counters:?}");
        Ok(RunSummary {
            run_id,
            workers,
            counters,
            elapsed: started.elapsed(),
        })
    }
}

/// Outcome of one completed pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Unique id for this run
    pub run_id: Uuid,
    /// Effective worker count after clamping
    pub workers: usize,
    /// Final counter values
    pub counters: CountersSnapshot,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// True when every spooled job reached the sink
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.counters.is_drained()
    }
}

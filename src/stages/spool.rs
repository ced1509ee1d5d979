//! Spool stage.
//!
//! A single long-lived loop that moves jobs from the spool queue to the
//! print queue, preserving the FIFO order in which they arrived. The stage
//! re-checks its termination condition on a fresh counters snapshot after
//! every wakeup: it may exit only once every worker has terminated and
//! every spooled job has been handed to the print queue.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, trace};

use crate::spooler::{BoundedQueue, Job, PipelineCounters};

/// Single instance moving jobs from the spool queue to the print queue
pub struct SpoolStage {
    workers: usize,
    spool_queue: Arc<BoundedQueue<Job>>,
    print_queue: Arc<BoundedQueue<Job>>,
    counters: Arc<PipelineCounters>,
    spool_signal: Arc<Semaphore>,
    print_signal: Arc<Semaphore>,
}

impl SpoolStage {
    /// Creates the stage wired to the shared pipeline state
    #[must_use]
    pub fn new(
        workers: usize,
        spool_queue: Arc<BoundedQueue<Job>>,
        print_queue: Arc<BoundedQueue<Job>>,
        counters: Arc<PipelineCounters>,
        spool_signal: Arc<Semaphore>,
        print_signal: Arc<Semaphore>,
    ) -> Self {
        Self {
            workers,
            spool_queue,
            print_queue,
            counters,
            spool_signal,
            print_signal,
        }
    }

    /// Runs the stage until every spooled job has been forwarded and all
    /// workers are done
    pub async fn run(self) {
        info!("spool stage starting for {} workers", self.workers);

        loop {
            // One permit per spooled job plus one per worker exit, so this
            // wait always has a guaranteed eventual signal.
            self.spool_signal
                .acquire()
                .await
                .expect("spool signal semaphore is never closed")
                .forget();

            if let Some(job) = self.spool_queue.try_pop() {
                trace!("forwarding job {} from worker {}", job.job_id, job.worker_id);
                self.print_queue.push(job).await;
                self.counters.record_sent_to_print();
                self.print_signal.add_permits(1);
            }

            let snapshot = self.counters.snapshot();
            if snapshot.spool_stage_done(self.workers) {
                debug!(
                    "spool stage draining complete: {} jobs forwarded",
                    snapshot.sent_to_print
                );
                break;
            }
        }

        // Final availability permit so a print stage blocked on an empty
        // queue wakes up and re-checks its own termination condition.
        self.print_signal.add_permits(1);
        info!("spool stage terminated");
    }
}

//! Print stage.
//!
//! The last stage drains the print queue to the output sink. Each job is
//! rendered and written as one block, so two jobs' text never interleave.
//! The stage exits once every worker has terminated and every spooled job
//! has been printed, the same two-sided condition the spool stage uses one
//! step earlier in the pipeline.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::spooler::{BoundedQueue, Job, PipelineCounters, Sink};

/// Single instance draining the print queue to the sink
pub struct PrintStage {
    workers: usize,
    print_queue: Arc<BoundedQueue<Job>>,
    counters: Arc<PipelineCounters>,
    print_signal: Arc<Semaphore>,
    sink: Arc<dyn Sink>,
}

impl PrintStage {
    /// Creates the stage wired to the shared pipeline state
    #[must_use]
    pub fn new(
        workers: usize,
        print_queue: Arc<BoundedQueue<Job>>,
        counters: Arc<PipelineCounters>,
        print_signal: Arc<Semaphore>,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            workers,
            print_queue,
            counters,
            print_signal,
            sink,
        }
    }

    /// Runs the stage until every spooled job has been printed and all
    /// workers are done
    pub async fn run(self) {
        info!("print stage starting for {} workers", self.workers);

        loop {
            self.print_signal
                .acquire()
                .await
                .expect("print signal semaphore is never closed")
                .forget();

            if let Some(job) = self.print_queue.try_pop() {
                self.counters.record_printed();
                debug!("printing job {} from worker {}", job.job_id, job.worker_id);
                if let Err(e) = self.sink.write(&job.render()).await {
                    warn!("dropping job {} output: {e}", job.job_id);
                }
            }

            let snapshot = self.counters.snapshot();
            if snapshot.print_stage_done(self.workers) {
                info!("print stage terminated: {} jobs printed", snapshot.printed);
                break;
            }
        }
    }
}

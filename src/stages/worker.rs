//! Worker tasks.
//!
//! Each worker interprets one pseudo-program, accumulates print lines in a
//! local buffer it never shares, and submits finished jobs into the spool
//! queue. The exit protocol runs on every path, including a missing
//! program file: `terminated` is incremented exactly once and one
//! availability permit is posted unconditionally, so the downstream stages
//! always get a chance to re-check their termination condition even for a
//! worker that produced zero jobs.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, trace, warn};

use crate::program::{Instruction, InstructionSource, Program};
use crate::spooler::{BoundedQueue, Job, PipelineCounters};

/// One simulated processor submitting jobs to the spool queue
pub struct WorkerTask {
    id: usize,
    source: Arc<dyn InstructionSource>,
    spool_queue: Arc<BoundedQueue<Job>>,
    counters: Arc<PipelineCounters>,
    spool_signal: Arc<Semaphore>,
}

impl WorkerTask {
    /// Creates a worker wired to the shared pipeline state
    #[must_use]
    pub fn new(
        id: usize,
        source: Arc<dyn InstructionSource>,
        spool_queue: Arc<BoundedQueue<Job>>,
        counters: Arc<PipelineCounters>,
        spool_signal: Arc<Semaphore>,
    ) -> Self {
        Self {
            id,
            source,
            spool_queue,
            counters,
            spool_signal,
        }
    }

    /// Runs the worker to completion: interpret, then exit protocol
    pub async fn run(self) {
        self.counters.record_started();
        debug!("worker {} starting", self.id);

        match self.source.load(self.id).await {
            Ok(program) => self.interpret(program).await,
            Err(e) => warn!("worker {} produces no jobs: {e}", self.id),
        }

        // Exit protocol: the availability permit must be posted even when
        // this worker spooled nothing, otherwise the spool stage can wait
        // forever for a signal that never comes.
        self.counters.record_terminated();
        self.spool_signal.add_permits(1);
        debug!("worker {} terminated", self.id);
    }

    async fn interpret(&self, program: Program) {
        let mut buffer: Vec<String> = Vec::new();
        let mut has_output = false;
        let mut job_id = String::from("0");
        let mut job_started = Instant::now();

        for instruction in program {
            match instruction {
                Instruction::NewJob(id) => {
                    buffer.clear();
                    has_output = false;
                    job_id = id.to_string();
                    job_started = Instant::now();
                }
                Instruction::Compute(n) => {
                    let product = descending_product(n);
                    trace!("worker {} computed {n}! (wrapping) = {product}", self.id);
                }
                Instruction::Print(token) => {
                    buffer.push(token);
                    has_output = true;
                }
                Instruction::EndJob => {
                    if has_output {
                        let mut job =
                            Job::new(self.id, job_id.clone()).with_elapsed(job_started.elapsed());
                        job.lines = std::mem::take(&mut buffer);
                        self.submit(job).await;
                    }
                    has_output = false;
                }
                Instruction::Terminate => break,
            }
        }
    }

    /// Submission order matters: queue first under its own lock, counters
    /// second under theirs, availability signal last. The push is the only
    /// point where a worker can be delayed by downstream congestion.
    async fn submit(&self, job: Job) {
        trace!(
            "worker {} submitting job {} ({} lines)",
            self.id,
            job.job_id,
            job.line_count()
        );
        self.spool_queue.push(job).await;
        self.counters.record_spooled();
        self.spool_signal.add_permits(1);
    }
}

/// CPU-bound workload simulator: a descending wrapping product of `1..=n`.
/// The result is discarded; only the elapsed time is observable.
fn descending_product(n: u64) -> u64 {
    let mut acc: u64 = 1;
    for k in (1..=n).rev() {
        acc = acc.wrapping_mul(std::hint::black_box(k));
    }
    std::hint::black_box(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::StaticSource;
    use pretty_assertions::assert_eq;

    struct Harness {
        queue: Arc<BoundedQueue<Job>>,
        counters: Arc<PipelineCounters>,
        signal: Arc<Semaphore>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                queue: Arc::new(BoundedQueue::new(4)),
                counters: Arc::new(PipelineCounters::new()),
                signal: Arc::new(Semaphore::new(0)),
            }
        }

        fn worker(&self, id: usize, source: StaticSource) -> WorkerTask {
            WorkerTask::new(
                id,
                Arc::new(source),
                Arc::clone(&self.queue),
                Arc::clone(&self.counters),
                Arc::clone(&self.signal),
            )
        }
    }

    #[tokio::test]
    async fn test_worker_submits_accumulated_job() {
        let harness = Harness::new();
        let source = StaticSource::new().with_program(
            1,
            Program::parse("NewJob 1\nCompute 5\nPrint HELLO\nPrint WORLD\nEndJob\nTerminate\n"),
        );

        harness.worker(1, source).run().await;

        let snapshot = harness.counters.snapshot();
        assert_eq!(snapshot.started, 1);
        assert_eq!(snapshot.terminated, 1);
        assert_eq!(snapshot.spooled, 1);

        let job = harness.queue.try_pop().expect("one job spooled");
        assert_eq!(job.worker_id, 1);
        assert_eq!(job.job_id, "1");
        assert_eq!(job.lines, vec!["HELLO", "WORLD"]);
        assert!(job.elapsed.is_some());

        // One permit for the job, one for the exit protocol.
        assert_eq!(harness.signal.available_permits(), 2);
    }

    #[tokio::test]
    async fn test_job_without_print_is_not_spooled() {
        let harness = Harness::new();
        let source = StaticSource::new()
            .with_program(1, Program::parse("NewJob 1\nCompute 3\nEndJob\nTerminate\n"));

        harness.worker(1, source).run().await;

        assert_eq!(harness.counters.snapshot().spooled, 0);
        assert!(harness.queue.is_empty());
        assert_eq!(harness.signal.available_permits(), 1, "exit permit only");
    }

    #[tokio::test]
    async fn test_missing_source_still_runs_exit_protocol() {
        let harness = Harness::new();
        harness.worker(1, StaticSource::new()).run().await;

        let snapshot = harness.counters.snapshot();
        assert_eq!(snapshot.started, 1);
        assert_eq!(snapshot.terminated, 1);
        assert_eq!(snapshot.spooled, 0);
        assert_eq!(harness.signal.available_permits(), 1);
    }

    #[tokio::test]
    async fn test_terminate_stops_interpretation() {
        let harness = Harness::new();
        let source = StaticSource::new().with_program(
            1,
            Program::parse("NewJob 1\nPrint A\nEndJob\nTerminate\nNewJob 2\nPrint B\nEndJob\n"),
        );

        harness.worker(1, source).run().await;

        assert_eq!(harness.counters.snapshot().spooled, 1);
        assert_eq!(harness.counters.snapshot().terminated, 1);
    }

    #[tokio::test]
    async fn test_multiple_jobs_from_one_worker() {
        let harness = Harness::new();
        let source = StaticSource::new().with_program(
            2,
            Program::parse("NewJob 1\nPrint A\nEndJob\nNewJob 2\nPrint B\nEndJob\nTerminate\n"),
        );

        harness.worker(2, source).run().await;

        assert_eq!(harness.counters.snapshot().spooled, 2);
        let first = harness.queue.try_pop().unwrap();
        let second = harness.queue.try_pop().unwrap();
        assert_eq!((first.job_id.as_str(), second.job_id.as_str()), ("1", "2"));
    }

    #[test]
    fn test_descending_product_deterministic() {
        assert_eq!(descending_product(0), 1);
        assert_eq!(descending_product(5), 120);
        assert_eq!(descending_product(10), descending_product(10));
    }
}

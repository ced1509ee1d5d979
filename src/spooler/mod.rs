//! Core spooler domain: jobs, bounded queues, shared counters, sinks.

pub mod counters;
pub mod errors;
pub mod job;
pub mod queue;
pub mod sink;

pub use counters::{CountersSnapshot, PipelineCounters};
pub use errors::SpoolerError;
pub use job::Job;
pub use queue::BoundedQueue;
pub use sink::{MemorySink, Sink, StdoutSink};

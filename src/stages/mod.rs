//! Pipeline stages and runtime wiring.
//!
//! Data flows `InstructionSource -> WorkerTask -> spool queue -> SpoolStage
//! -> print queue -> PrintStage -> Sink`. The two queues and the counters
//! record are each guarded independently and are never locked together, so
//! the pipeline has no lock nesting and cannot deadlock on locks.

pub mod print;
pub mod runtime;
pub mod spool;
pub mod worker;

pub use print::PrintStage;
pub use runtime::{RunSummary, SpoolerRuntime};
pub use spool::SpoolStage;
pub use worker::WorkerTask;

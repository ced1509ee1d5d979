//! # Spoolsim - a print-spooler concurrency simulator
//!
//! Spoolsim simulates N independent workers, each interpreting a small
//! pseudo-program that produces textual print jobs. All workers race to
//! submit their jobs into a capacity-bounded spool queue; a single spool
//! stage moves jobs onward into a bounded print queue, and a single print
//! stage drains that queue to the output sink. Shared monotonic counters
//! let the two downstream stages decide, race-free, when the pipeline has
//! truly drained.
//!
//! ## Design
//!
//! - **Backpressure**: both hand-off queues are fixed-capacity; a full
//!   queue suspends the producer instead of dropping or buffering work.
//! - **Termination detection**: each downstream stage exits only when every
//!   worker has terminated *and* its own completed-count has caught up with
//!   the number of jobs ever spooled.
//! - **Deadlock freedom**: the two queues and the counters record are
//!   guarded independently and never locked together.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use spoolsim::prelude::*;
//!
//! # async fn demo() -> Result<(), SpoolerError> {
//! let source = Arc::new(StaticSource::new().with_uniform_text(
//!     2,
//!     "NewJob 1\nCompute 100\nPrint HELLO\nEndJob\nTerminate\n",
//! ));
//! let sink = Arc::new(MemorySink::new());
//! let summary = SpoolerRuntime::new(Config { workers: 2, ..Config::default() })
//!     .run(source, sink)
//!     .await?;
//! assert!(summary.is_drained());
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod program;
pub mod spooler;
pub mod stages;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{Config, DEFAULT_WORKERS, MAX_WORKERS, init_logging};
pub use program::{DirSource, Instruction, InstructionSource, Program, StaticSource};
pub use spooler::{
    BoundedQueue, CountersSnapshot, Job, MemorySink, PipelineCounters, Sink, SpoolerError,
    StdoutSink,
};
pub use stages::{PrintStage, RunSummary, SpoolStage, SpoolerRuntime, WorkerTask};

/// Version of the spoolsim crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

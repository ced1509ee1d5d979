//! Convenience re-exports for driving the simulator.
//!
//! ```
//! use spoolsim::prelude::*;
//! ```

pub use crate::infrastructure::{Config, DEFAULT_WORKERS, MAX_WORKERS, init_logging};
pub use crate::program::{DirSource, Instruction, InstructionSource, Program, StaticSource};
pub use crate::spooler::{
    BoundedQueue, CountersSnapshot, Job, MemorySink, PipelineCounters, Sink, SpoolerError,
    StdoutSink,
};
pub use crate::stages::{PrintStage, RunSummary, SpoolStage, SpoolerRuntime, WorkerTask};

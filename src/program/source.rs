//! Instruction sources.
//!
//! Programs reach workers through the [`InstructionSource`] trait so the
//! pipeline can be driven from program files on disk or from in-memory
//! fixtures in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::program::Program;
use crate::spooler::SpoolerError;

/// Loads the pseudo-program for a given worker
#[async_trait]
pub trait InstructionSource: Send + Sync {
    /// Loads the program for `worker_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SpoolerError::Source`] when the worker's program cannot be
    /// read. The caller treats this as non-fatal: the worker produces no
    /// jobs but still runs its exit protocol.
    async fn load(&self, worker_id: usize) -> Result<Program, SpoolerError>;
}

/// Source reading `prog<i>.txt` files from one directory
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Creates a source rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the program file path for a worker
    #[must_use]
    pub fn path_for(&self, worker_id: usize) -> PathBuf {
        self.dir.join(format!("prog{worker_id}.txt"))
    }

    /// Returns the configured directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl InstructionSource for DirSource {
    async fn load(&self, worker_id: usize) -> Result<Program, SpoolerError> {
        let path = self.path_for(worker_id);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SpoolerError::Source {
                worker_id,
                message: format!("{}: {e}", path.display()),
            })?;
        Ok(Program::parse(&text))
    }
}

/// In-memory source keyed by worker id, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    programs: HashMap<usize, Program>,
}

impl StaticSource {
    /// Creates an empty source; every worker sees a missing program
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a program to a worker
    #[must_use]
    pub fn with_program(mut self, worker_id: usize, program: Program) -> Self {
        self.programs.insert(worker_id, program);
        self
    }

    /// Assigns the same program text to every worker in `1..=workers`
    #[must_use]
    pub fn with_uniform_text(mut self, workers: usize, text: &str) -> Self {
        let program = Program::parse(text);
        for worker_id in 1..=workers {
            self.programs.insert(worker_id, program.clone());
        }
        self
    }
}

#[async_trait]
impl InstructionSource for StaticSource {
    async fn load(&self, worker_id: usize) -> Result<Program, SpoolerError> {
        self.programs
            .get(&worker_id)
            .cloned()
            .ok_or_else(|| SpoolerError::Source {
                worker_id,
                message: "no program configured".to_string(),
            })
    }
}

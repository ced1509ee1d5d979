//! Instruction set for simulated workers.

use serde::{Deserialize, Serialize};

/// One decoded instruction from a worker's pseudo-program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Begins a new job with the given id
    NewJob(u32),
    /// Simulates a CPU-bound workload proportional to the argument
    Compute(u64),
    /// Appends one token as a line of the current job
    Print(String),
    /// Submits the current job if it has any output
    EndJob,
    /// Ends interpretation for this worker
    Terminate,
}

/// Decodes one instruction line.
///
/// Blank lines, unknown opcodes, unparsable arguments, and lines with more
/// than two tokens all decode to `None` and are skipped by the worker.
/// `EndJob` and `Terminate` are accepted with or without an argument, since
/// program files commonly write them bare.
#[must_use]
pub fn parse_line(line: &str) -> Option<Instruction> {
    let mut tokens = line.split_whitespace();
    let opcode = tokens.next()?;
    let argument = tokens.next();
    if tokens.next().is_some() {
        return None;
    }

    match (opcode, argument) {
        ("NewJob", Some(arg)) => arg.parse().ok().map(Instruction::NewJob),
        ("Compute", Some(arg)) => arg.parse().ok().map(Instruction::Compute),
        ("Print", Some(arg)) => Some(Instruction::Print(arg.to_string())),
        ("EndJob", _) => Some(Instruction::EndJob),
        ("Terminate", _) => Some(Instruction::Terminate),
        _ => None,
    }
}

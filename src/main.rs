//! spoolsim - print-spooler simulation CLI
//!
//! Simulates N workers feeding one spool stage and one print stage through
//! bounded hand-off queues.
//!
//! ## Usage
//!
//! ```bash
//! # Run with the default 10 workers reading input/prog<i>.txt
//! spoolsim
//!
//! # Run 3 workers with tiny queues to exercise backpressure
//! spoolsim 3 --spool-capacity 1 --print-capacity 1
//!
//! # Emit the final counters as JSON
//! spoolsim 5 --summary-json
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if std::env::var("SPOOLSIM_VERBOSE").is_ok() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}

//! Command-line entry point for spoolsim.
//!
//! One optional positional argument selects the worker count (default 10,
//! clamped to 10 with a warning). A worker count of exactly zero is a
//! startup error: nothing runs and the process exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use spoolsim::infrastructure::{self, Config, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS, MAX_WORKERS};
use spoolsim::program::DirSource;
use spoolsim::spooler::StdoutSink;
use spoolsim::stages::{RunSummary, SpoolerRuntime};

/// CLI arguments for spoolsim
#[derive(Parser, Debug)]
#[command(name = "spoolsim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of simulated workers (1 to 10)
    workers: Option<usize>,

    /// Directory holding the prog<i>.txt program files
    #[arg(long, default_value = "input")]
    input_dir: PathBuf,

    /// Capacity of the worker-to-spool queue
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    spool_capacity: usize,

    /// Capacity of the spool-to-print queue
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    print_capacity: usize,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit the final run summary as JSON on stdout
    #[arg(long)]
    summary_json: bool,
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    infrastructure::init_logging(&args.log_level);

    let config = config_from(&args)?;
    let summary = execute(&config).context("pipeline run failed")?;

    info!(
        "run complete: spooled={} sent_to_print={} printed={} in {:?}",
        summary.counters.spooled, summary.counters.sent_to_print, summary.counters.printed,
        summary.elapsed
    );
    if args.summary_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to encode run summary")?
        );
    }
    Ok(())
}

fn config_from(args: &Args) -> Result<Config> {
    let workers = args.workers.unwrap_or(DEFAULT_WORKERS);
    anyhow::ensure!(workers > 0, "worker count must be at least 1");
    anyhow::ensure!(args.spool_capacity > 0, "spool queue capacity must be at least 1");
    anyhow::ensure!(args.print_capacity > 0, "print queue capacity must be at least 1");

    let config = Config {
        workers,
        spool_capacity: args.spool_capacity,
        print_capacity: args.print_capacity,
        input_dir: args.input_dir.clone(),
        log_level: args.log_level.clone(),
    };
    if config.is_clamped() {
        warn!(
            "worker count {} exceeds maximum {}, clamping to {}",
            workers,
            MAX_WORKERS,
            config.effective_workers()
        );
    }
    Ok(config)
}

fn execute(config: &Config) -> Result<RunSummary> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let source = Arc::new(DirSource::new(&config.input_dir));
    let sink = Arc::new(StdoutSink::new());
    let summary = runtime.block_on(SpoolerRuntime::new(config.clone()).run(source, sink))?;
    Ok(summary)
}

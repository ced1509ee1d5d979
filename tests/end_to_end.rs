//! End-to-end pipeline scenarios driven through program files on disk.

use std::sync::Arc;
use std::time::Duration;

use spoolsim::prelude::*;

fn config(workers: usize, input_dir: &std::path::Path) -> Config {
    Config {
        workers,
        input_dir: input_dir.to_path_buf(),
        ..Config::default()
    }
}

async fn run_from_dir(cfg: Config) -> (RunSummary, Arc<MemorySink>) {
    let source = Arc::new(DirSource::new(&cfg.input_dir));
    let sink = Arc::new(MemorySink::new());
    let summary = tokio::time::timeout(
        Duration::from_secs(10),
        SpoolerRuntime::new(cfg).run(source, Arc::clone(&sink) as Arc<dyn Sink>),
    )
    .await
    .expect("pipeline must terminate within bounded time")
    .expect("pipeline run");
    (summary, sink)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_worker_single_job() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("prog1.txt"),
        "NewJob 1\nCompute 5\nPrint HELLO\nEndJob\nTerminate\n",
    )
    .unwrap();

    let (summary, sink) = run_from_dir(config(1, dir.path())).await;

    assert_eq!(summary.counters.started, 1);
    assert_eq!(summary.counters.terminated, 1);
    assert_eq!(summary.counters.spooled, 1);
    assert_eq!(summary.counters.sent_to_print, 1);
    assert_eq!(summary.counters.printed, 1);

    let blocks = sink.blocks();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].starts_with("--- worker 1 job 1 ---\n"));
    assert!(blocks[0].contains("\nHELLO\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn empty_job_blocks_are_suppressed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("prog1.txt"),
        "NewJob 1\nEndJob\nNewJob 2\nPrint REAL\nEndJob\nTerminate\n",
    )
    .unwrap();

    let (summary, sink) = run_from_dir(config(1, dir.path())).await;

    assert_eq!(summary.counters.spooled, 1, "job 1 had no output");
    assert_eq!(sink.len(), 1);
    assert!(sink.blocks()[0].contains("job 2"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn missing_program_files_do_not_hang_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    // Only worker 2 of 3 can read a program.
    std::fs::write(
        dir.path().join("prog2.txt"),
        "NewJob 1\nPrint OK\nEndJob\nTerminate\n",
    )
    .unwrap();

    let (summary, sink) = run_from_dir(config(3, dir.path())).await;

    assert_eq!(summary.counters.started, 3);
    assert_eq!(summary.counters.terminated, 3);
    assert_eq!(summary.counters.spooled, 1);
    assert_eq!(summary.counters.printed, 1);
    assert_eq!(sink.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn malformed_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("prog1.txt"),
        "NewJob 1\nFormat C:\nPrint A B\nPrint GOOD\n\nEndJob\nTerminate\n",
    )
    .unwrap();

    let (summary, sink) = run_from_dir(config(1, dir.path())).await;

    assert_eq!(summary.counters.printed, 1);
    let block = &sink.blocks()[0];
    assert!(block.contains("GOOD"));
    assert!(!block.contains("A B"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn job_blocks_are_never_interleaved() {
    let dir = tempfile::tempdir().unwrap();
    for worker in 1..=4 {
        std::fs::write(
            dir.path().join(format!("prog{worker}.txt")),
            format!(
                "NewJob 1\nPrint W{worker}-A\nPrint W{worker}-B\nPrint W{worker}-C\nEndJob\nTerminate\n"
            ),
        )
        .unwrap();
    }

    let (summary, sink) = run_from_dir(config(4, dir.path())).await;
    assert_eq!(summary.counters.printed, 4);

    // Every block must contain all three lines of exactly one worker.
    for block in sink.blocks() {
        let owner: Vec<&str> = (1..=4)
            .map(|w| if block.contains(&format!("W{w}-A")) { "y" } else { "n" })
            .collect();
        assert_eq!(owner.iter().filter(|o| **o == "y").count(), 1);
        let worker = owner.iter().position(|o| *o == "y").unwrap() + 1;
        assert!(block.contains(&format!("W{worker}-B")));
        assert!(block.contains(&format!("W{worker}-C")));
    }
}

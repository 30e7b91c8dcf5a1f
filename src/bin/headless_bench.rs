//! Headless benchmark runner.
//!
//! Runs one full benchmark without the UI: status events stream to stderr,
//! the persisted result summary goes to stdout, and the process exits
//! non-zero if the run fails.
//!
//! Usage: cargo run --release --bin headless_bench

use anyhow::bail;
use crossbeam_channel::unbounded;

use benchrig::config::SettingsManager;
use benchrig::history::RunHistoryStore;
use benchrig::log_collector;
use benchrig::orchestrator::{BenchEvent, BenchOrchestrator};

fn main() -> anyhow::Result<()> {
    // Keep the receiver alive so forwarded log lines are not errors; the
    // collector already mirrors everything to stderr
    let (log_tx, _log_rx) = unbounded();
    if let Err(e) = log_collector::init(log_tx) {
        eprintln!("[Headless] WARNING: logger registration failed: {}", e);
    }

    let settings = SettingsManager::load();
    let path = settings
        .results_path
        .clone()
        .unwrap_or_else(RunHistoryStore::default_path);
    log::info!("headless run, results at {}", path.display());

    let (events_tx, events_rx) = unbounded();
    let orchestrator =
        BenchOrchestrator::new(settings, RunHistoryStore::new(path), events_tx);
    orchestrator.spawn();

    for event in events_rx.iter() {
        match event {
            BenchEvent::Status(status) => eprintln!("[Headless] {}", status),
            BenchEvent::Completed(run) => {
                println!("{}", run.summary());
                return Ok(());
            }
            BenchEvent::Failed(message) => bail!("benchmark failed: {}", message),
        }
    }
    bail!("benchmark worker exited without reporting a result")
}

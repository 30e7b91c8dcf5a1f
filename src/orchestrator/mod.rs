//! Benchmark orchestration: sequential stress execution, aggregation,
//! persistence, and outcome reporting.
//!
//! The orchestrator owns the full lifecycle of one run. The three stress
//! generators execute strictly in sequence on a single worker thread; each
//! depends on having the machine to itself, so they are never overlapped.
//! After the last generator finishes, the sub-scores are aggregated, the
//! run number is derived from the history store, and the finished run is
//! appended. A run that cannot be persisted is a failed run.
//!
//! Result reporting is an explicit dependency: the display layer hands in a
//! channel sender and receives in-progress status plus exactly one terminal
//! event. No other state crosses the thread boundary, and nothing here is
//! cancellable once a run has started.

use std::thread;
use std::time::Instant;

use crossbeam_channel::Sender;

use crate::config::BenchSettings;
use crate::error::Result;
use crate::history::RunHistoryStore;
use crate::models::BenchmarkRun;
use crate::scoring;
use crate::stress;

/// Events delivered from the benchmark worker to the display layer.
///
/// `Status` marks progress; `Completed` and `Failed` are terminal and
/// mutually exclusive.
#[derive(Clone, Debug)]
pub enum BenchEvent {
    Status(String),
    Completed(BenchmarkRun),
    Failed(String),
}

/// Composition root for one benchmark run.
pub struct BenchOrchestrator {
    settings: BenchSettings,
    store: RunHistoryStore,
    events: Sender<BenchEvent>,
}

impl BenchOrchestrator {
    pub fn new(settings: BenchSettings, store: RunHistoryStore, events: Sender<BenchEvent>) -> Self {
        BenchOrchestrator {
            settings,
            store,
            events,
        }
    }

    fn status(&self, message: impl Into<String>) {
        let _ = self.events.send(BenchEvent::Status(message.into()));
    }

    /// Run the full benchmark on the calling thread.
    ///
    /// Returns the persisted run. Store append failures propagate; a
    /// degraded raster or exhausted memory workload does not.
    pub fn run_benchmark(&self) -> Result<BenchmarkRun> {
        log::info!(
            "benchmark starting on {} logical cores",
            num_cpus::get()
        );
        let started = Instant::now();

        self.status("Running CPU stress (prime scan)...");
        let cpu = stress::cpu::run(&self.settings);

        self.status(format!(
            "CPU done (score {}). Running raster stress...",
            cpu.score
        ));
        let raster = stress::raster::run(&self.settings);

        self.status(format!(
            "Raster done (score {}). Running memory stress...",
            raster.score
        ));
        let memory = stress::memory::run(&self.settings);

        self.status("Aggregating and persisting result...");
        let total_time_ms = started.elapsed().as_millis() as u64;
        let run_number = self.store.last_run_number() + 1;
        let run = BenchmarkRun {
            run_number,
            total_time_ms,
            cpu_score: cpu.score,
            gpu_score: raster.score,
            memory_score: memory.score,
            total_score: scoring::composite_score(cpu.score, raster.score, memory.score),
        };

        self.store.append(&run)?;

        log::info!(
            "run {} complete in {} ms: cpu {}, gpu {}, memory {}, total {}",
            run.run_number,
            run.total_time_ms,
            run.cpu_score,
            run.gpu_score,
            run.memory_score,
            run.total_score
        );
        Ok(run)
    }

    /// Move execution to a background worker thread.
    ///
    /// The outcome arrives as exactly one terminal `BenchEvent` on the
    /// channel handed to `new`; the returned handle is only needed by
    /// callers that want to block on worker shutdown.
    pub fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || match self.run_benchmark() {
            Ok(run) => {
                let _ = self.events.send(BenchEvent::Completed(run));
            }
            Err(e) => {
                log::error!("benchmark run failed: {}", e);
                let _ = self.events.send(BenchEvent::Failed(e.to_string()));
            }
        })
    }
}

//! Core data structures for benchmark runs.

use serde::{Deserialize, Serialize};

/// One completed benchmark execution.
///
/// Constructed only by the orchestrator after all three stress generators
/// finish, then immediately appended to the run-history store. `run_number`
/// is strictly increasing across the lifetime of the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// Position in the run history; last recorded number + 1, or 1 for a
    /// fresh store
    pub run_number: u64,
    /// Wall-clock duration of the full run in milliseconds
    pub total_time_ms: u64,
    /// Sub-score of the compute (prime scan) workload
    pub cpu_score: u64,
    /// Sub-score of the raster drawing workload (historical field name,
    /// matches the persisted "GPU Score" column)
    pub gpu_score: u64,
    /// Sub-score of the memory exhaustion workload
    pub memory_score: u64,
    /// Weighted composite of the three sub-scores
    pub total_score: u64,
}

impl BenchmarkRun {
    /// Multi-line result text for the display layer.
    pub fn summary(&self) -> String {
        format!(
            "Benchmark complete\n\
             Run: {}\n\
             Total time: {} s\n\
             CPU score: {}\n\
             GPU score: {}\n\
             Memory score: {}\n\
             Total score: {}",
            self.run_number,
            self.total_time_ms / 1000,
            self.cpu_score,
            self.gpu_score,
            self.memory_score,
            self.total_score,
        )
    }
}

//! benchrig — device stress benchmark engine.
//!
//! Runs three independent stress workloads (compute, raster drawing,
//! memory), normalizes each into a sub-score, combines them into one
//! composite score, and appends the result to a persistent run history.
//!
//! The system is organized into functional modules:
//! - **error**: unified error type hierarchy
//! - **models**: the `BenchmarkRun` record
//! - **config**: settings with the reference calibration as defaults
//! - **log_collector**: global logger mirroring records to the display layer
//! - **scoring**: sub-score normalization and the composite formula
//! - **stress**: the three stress generators
//! - **history**: append-only CSV run-history store
//! - **orchestrator**: sequential execution, persistence, outcome reporting
//! - **ui**: egui display surface (thin glue, no benchmark logic)

// Core foundational modules
pub mod error;
pub mod models;

pub mod config;
pub mod log_collector;

// The benchmark engine
pub mod history;
pub mod scoring;
pub mod stress;

pub mod orchestrator;

// Display layer
pub mod ui;

// Re-export the log crate for macro usage
pub use log;

// Re-export the common types for easy access
pub use config::{BenchSettings, SettingsManager};
pub use error::{BenchError, RasterError, Result};
pub use history::RunHistoryStore;
pub use log_collector::{LogCollector, LogLine};
pub use models::BenchmarkRun;
pub use orchestrator::{BenchEvent, BenchOrchestrator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports_accessible() {
        let _: Result<i32> = Ok(42);
        let settings = BenchSettings::default();
        assert_eq!(settings.cpu_reference_time_ms, 30_000);
    }
}

//! Unified error type hierarchy for benchrig
//!
//! Provides structured error handling with RasterError for the drawing
//! stress surface and BenchError for run-level failures.

use std::io;
use thiserror::Error;

/// Raster surface errors.
///
/// Surface allocation is the one fallible step of the raster workload; a
/// failure here degrades the generator instead of aborting the run.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("surface allocation failed: {width}x{height} ({requested} bytes)")]
    SurfaceAllocation {
        width: u32,
        height: u32,
        requested: usize,
    },
}

/// Run-level error type for the benchmark engine.
///
/// A run without a persisted result has no externally visible value, so
/// store failures are fatal to the whole run and surface here.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Reading or appending the run-history store failed
    #[error("run history store failure: {0}")]
    Store(#[from] io::Error),

    /// The display layer could not be brought up
    #[error("display layer failure: {0}")]
    Display(String),
}

/// Top-level result type for operations that may fail.
/// Use this as the return type for all fallible functions.
pub type Result<T> = std::result::Result<T, BenchError>;

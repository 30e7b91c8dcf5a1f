//! Stress generators for the three benchmark workloads.
//!
//! ## Generator types:
//! - **cpu**: bounded primality scan, score derived from elapsed time
//! - **raster**: time-boxed repeated draw passes on a software surface,
//!   score derived from pass throughput
//! - **memory**: growing allocations run to resource exhaustion, composite
//!   capacity/throughput score
//!
//! The generators are designed to run strictly in sequence; running them in
//! parallel would contend for the very resources each sub-score isolates.

pub mod cpu;
pub mod memory;
pub mod raster;

//! Display layer: egui frontend for starting runs and reading results.

pub mod app;

pub use app::BenchApp;

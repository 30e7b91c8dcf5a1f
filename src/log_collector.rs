//! Decoupled logging pipeline.
//!
//! Registers as the global logger for the `log` crate: every record is
//! written to stderr immediately and forwarded over a crossbeam channel so
//! the display layer can surface operator-visible warnings (for example a
//! degraded raster workload) without sharing any state with the benchmark
//! worker. If the display side is gone or congested, stderr output still
//! happens; forwarding is best-effort.

use chrono::Local;
use crossbeam_channel::Sender;
use log::{Log, Metadata, Record};

/// A log line with metadata, as delivered to the display layer.
#[derive(Clone, Debug)]
pub struct LogLine {
    /// Wall-clock timestamp, HH:MM:SS.mmm
    pub timestamp: String,
    /// Severity of the record
    pub level: log::Level,
    /// Rendered message text
    pub message: String,
}

impl LogLine {
    pub fn new(level: log::Level, message: String) -> Self {
        LogLine {
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            message,
        }
    }
}

/// Logger that mirrors every record to stderr and the display channel.
pub struct LogCollector {
    ui_tx: Sender<LogLine>,
}

impl LogCollector {
    pub fn new(ui_tx: Sender<LogLine>) -> Self {
        LogCollector { ui_tx }
    }
}

impl Log for LogCollector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine::new(record.level(), record.args().to_string());
        eprintln!("[{}] [{}] {}", line.timestamp, line.level, line.message);
        // Display side may have shut down already; stderr is authoritative.
        let _ = self.ui_tx.send(line);
    }

    fn flush(&self) {}
}

/// Register the collector as the global logger at Info level.
///
/// Call once at startup, before any benchmark work begins.
pub fn init(ui_tx: Sender<LogLine>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogCollector::new(ui_tx)))?;
    log::set_max_level(log::LevelFilter::Info);
    Ok(())
}

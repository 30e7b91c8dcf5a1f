//! Run history store: append-only CSV of completed benchmark runs.
//!
//! One row per run, a fixed header written only when the file is created,
//! and no row ever mutated or deleted. The next run number is derived by
//! re-reading the trailing row on every run; that is O(file size) but keeps
//! the on-disk format byte-compatible with existing result files.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use crate::models::BenchmarkRun;

/// Header row, written exactly once per file. Byte-exact format contract;
/// do not localize or reorder.
pub const RESULTS_HEADER: &str = "Run,Total Time (ms),CPU Score,GPU Score,Memory Score,Total Score";

/// Append-only persistent store of `BenchmarkRun` rows.
pub struct RunHistoryStore {
    path: PathBuf,
}

impl RunHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RunHistoryStore { path: path.into() }
    }

    /// `<data dir>/benchrig/benchmark_results.csv`, with a /tmp fallback
    /// when the platform reports no data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp/.local/share"))
            .join("benchrig")
            .join("benchmark_results.csv")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run number of the most recently appended row.
    ///
    /// Returns 0 when the file is absent, empty, unreadable, or its trailing
    /// row does not start with an integer token; all of these mean "no prior
    /// runs", never a fatal error. The header-only file parses as 0 too,
    /// since "Run" is not a number.
    pub fn last_run_number(&self) -> u64 {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return 0,
        };
        contents
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .and_then(|line| line.split(',').next())
            .and_then(|token| token.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Append one completed run.
    ///
    /// Creates parent directories and the file on first use; the header and
    /// the first data row then go out in a single write so a reader never
    /// observes a header-less fragment from this writer. Errors propagate:
    /// a run that cannot be persisted is a failed run.
    pub fn append(&self, run: &BenchmarkRun) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let is_new = !self.path.exists();

        let mut payload = String::new();
        if is_new {
            payload.push_str(RESULTS_HEADER);
            payload.push('\n');
        }
        // Infallible: fmt::Write on String cannot error
        let _ = writeln!(
            payload,
            "{},{},{},{},{},{}",
            run.run_number,
            run.total_time_ms,
            run.cpu_score,
            run.gpu_score,
            run.memory_score,
            run.total_score,
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(payload.as_bytes())?;

        log::info!(
            "run {} appended to {}",
            run.run_number,
            self.path.display()
        );
        Ok(())
    }
}

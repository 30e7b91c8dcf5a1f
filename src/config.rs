//! Benchmark settings and persistence.
//!
//! `BenchSettings` carries every calibration constant the stress generators
//! and scoring formulas use. The defaults are the reference calibration; a
//! settings file only overrides them, it never changes the persisted CSV
//! format.
//!
//! The `SettingsManager` loads from `<config dir>/benchrig/settings.json`
//! and falls back to defaults with a logged warning when the file is absent
//! or fails to parse.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

const MIB: u64 = 1024 * 1024;

/// All tunables of one benchmark run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSettings {
    /// Inclusive upper bound of the prime scan
    pub prime_scan_limit: u32,
    /// Reference duration the CPU scan is normalized against (ms)
    pub cpu_reference_time_ms: u64,
    /// Width and height of the square raster surface in pixels
    pub raster_surface_dim: u32,
    /// Filled-circle draw operations per raster pass
    pub raster_draws_per_pass: u32,
    /// Wall-clock budget of the raster workload (ms)
    pub raster_time_box_ms: u64,
    /// Size of the first memory block (bytes); later blocks grow with
    /// cumulative allocation
    pub memory_base_block_bytes: u64,
    /// System memory to leave untouched before treating the next allocation
    /// as exhausted (bytes)
    pub memory_headroom_bytes: u64,
    /// Optional hard cap on total allocation (bytes); `None` runs to
    /// exhaustion
    pub memory_budget_bytes: Option<u64>,
    /// Location of the results CSV; `None` selects the platform data dir
    pub results_path: Option<PathBuf>,
}

impl Default for BenchSettings {
    fn default() -> Self {
        BenchSettings {
            prime_scan_limit: 1_000_000,
            cpu_reference_time_ms: 30_000,
            raster_surface_dim: 10_000,
            raster_draws_per_pass: 20_001,
            raster_time_box_ms: 30_000,
            memory_base_block_bytes: 10 * MIB,
            memory_headroom_bytes: 256 * MIB,
            memory_budget_bytes: None,
            results_path: None,
        }
    }
}

/// Loads and persists `BenchSettings`.
pub struct SettingsManager;

impl SettingsManager {
    /// Load settings from the platform config dir, or return defaults.
    pub fn load() -> BenchSettings {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from an explicit path.
    ///
    /// A missing file is the normal first-run case; a file that fails to
    /// parse is downgraded to defaults with a warning so a stale or
    /// hand-edited config never blocks a run.
    pub fn load_from(path: &Path) -> BenchSettings {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<BenchSettings>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!(
                        "failed to parse {}, falling back to defaults: {}",
                        path.display(),
                        e
                    );
                    BenchSettings::default()
                }
            },
            Err(_) => BenchSettings::default(),
        }
    }

    /// Persist settings as pretty JSON, creating the config dir on demand.
    pub fn save(settings: &BenchSettings) -> io::Result<()> {
        Self::save_to(settings, &Self::settings_path())
    }

    /// Persist settings to an explicit path.
    pub fn save_to(settings: &BenchSettings, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// `<config dir>/benchrig/settings.json`, with a /tmp fallback when the
    /// platform reports no config dir.
    pub fn settings_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp/.config"))
            .join("benchrig")
            .join("settings.json")
    }
}

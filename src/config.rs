//! Line configuration.
//!
//! All capacity ceilings and worker rates of the line are named fields of
//! [`LineConstraints`] so the policy can be audited or swapped without
//! touching the evaluator. Defaults are the figures of the reference site.
//!
//! A TOML file may override any subset:
//!
//! ```toml
//! [global]
//! sort_workers = 8
//!
//! [line]
//! merge_limit_cpm = 45.0
//!
//! [line.changeover]
//! mid_minutes = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MhsError, Result};
use crate::models::ChangeoverPolicy;

/// Print-and-apply ceiling per lane (cpm).
pub const PNA_LIMIT_PER_LANE_CPM: f64 = 19.0;
/// Merge-zone ceiling for the whole line (cpm).
pub const MERGE_LIMIT_CPM: f64 = 40.0;
/// InchStore ceiling per lane (cpm).
pub const INCHSTORE_LIMIT_PER_LANE_CPM: f64 = 42.0;
/// Induction rate of one worker on one lane (cpm).
pub const INDUCT_WORKER_CPM: f64 = 12.0;
/// Sort / pallet-build rate of one worker (cpm).
pub const SORT_WORKER_CPM: f64 = 5.0;
/// Hard minimum gap between cases on the cell belt (inches).
pub const MIN_CELL_GAP_IN: f64 = 3.0;
/// Unload and load rate of the single active forklift (pallets/min).
pub const FORKLIFT_PALLETS_PER_MIN: f64 = 1.0;
/// Inbound doors, and therefore the most lanes an order can use.
pub const MAX_INBOUND_DOORS: u32 = 6;
/// Outbound doors at the load side.
pub const MAX_OUTBOUND_DOORS: u32 = 7;
/// Most induction workers the editor allows on one lane.
pub const MAX_WORKERS_PER_LANE: u32 = 10;
/// Default sort / pallet-build crew.
pub const DEFAULT_SORT_WORKERS: u32 = 6;

/// Capacity ceilings and worker rates of the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConstraints {
    /// Print-and-apply ceiling per lane (cpm).
    pub pna_limit_per_lane_cpm: f64,
    /// Merge-zone ceiling, applied regardless of lane count (cpm).
    pub merge_limit_cpm: f64,
    /// InchStore ceiling per lane (cpm).
    pub inchstore_limit_per_lane_cpm: f64,
    /// Induction rate per worker per lane (cpm).
    pub induct_worker_cpm: f64,
    /// Sort rate per worker (cpm).
    pub sort_worker_cpm: f64,
    /// Cell gap floor (inches).
    pub min_cell_gap_in: f64,
    /// Forklift rate for both unload and load (pallets/min).
    pub forklift_pallets_per_min: f64,
    /// Inbound doors (upper bound on lanes at the editor).
    pub max_inbound_doors: u32,
    /// Outbound doors. Informational only.
    pub max_outbound_doors: u32,
    /// Upper bound on workers per lane at the editor.
    pub max_workers_per_lane: u32,
    /// Changeover bands between orders.
    pub changeover: ChangeoverPolicy,
}

impl Default for LineConstraints {
    fn default() -> Self {
        Self {
            pna_limit_per_lane_cpm: PNA_LIMIT_PER_LANE_CPM,
            merge_limit_cpm: MERGE_LIMIT_CPM,
            inchstore_limit_per_lane_cpm: INCHSTORE_LIMIT_PER_LANE_CPM,
            induct_worker_cpm: INDUCT_WORKER_CPM,
            sort_worker_cpm: SORT_WORKER_CPM,
            min_cell_gap_in: MIN_CELL_GAP_IN,
            forklift_pallets_per_min: FORKLIFT_PALLETS_PER_MIN,
            max_inbound_doors: MAX_INBOUND_DOORS,
            max_outbound_doors: MAX_OUTBOUND_DOORS,
            max_workers_per_lane: MAX_WORKERS_PER_LANE,
            changeover: ChangeoverPolicy::default(),
        }
    }
}

/// Values shared by every order in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Sort / pallet-build crew size.
    pub sort_workers: u32,
}

impl GlobalConfig {
    /// Creates a config with the given sort crew.
    pub fn new(sort_workers: u32) -> Self {
        Self { sort_workers }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_WORKERS)
    }
}

/// File-level configuration: global pass values plus line constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub global: GlobalConfig,
    pub line: LineConstraints,
}

impl CalculatorConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.global.sort_workers == 0 {
            return Err(MhsError::ConfigError {
                message: "global.sort_workers must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}

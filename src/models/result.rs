//! Per-order evaluation result.
//!
//! Every rate is in cases per minute (cpm) unless the field name says
//! otherwise. Times are minutes. Efficiencies are ratios (0.0..=1.0),
//! not percentages.

use serde::{Deserialize, Serialize};

/// Stage of the line that sets the system bottleneck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Induction feed through the print-and-apply stations.
    PrintAndApply,
    /// Cell conveyance after the InchStore ceiling.
    Conveyance,
    /// Merge zone where all lanes combine.
    Merge,
    /// Sort / pallet-build crew.
    Sort,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Stage::PrintAndApply => "PnA",
            Stage::Conveyance => "Cell/InchStore",
            Stage::Merge => "Merge",
            Stage::Sort => "Sort",
        };
        f.write_str(label)
    }
}

/// Full derived record for one order.
///
/// Created once by [`OrderEvaluator`](crate::evaluator::OrderEvaluator)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    /// Customer name, copied from the input.
    pub customer: String,
    /// Commodity name, copied from the input.
    pub commodity: String,
    /// Inbound pallets.
    pub pallets: u32,
    /// Cases on each pallet.
    pub cases_per_pallet: u32,
    /// `pallets × cases_per_pallet`.
    pub total_cases: u64,
    /// Inbound lanes used.
    pub lanes: u32,
    /// Induction workers per lane.
    pub workers_per_lane: u32,
    /// Cell gap as entered (before the hard floor is applied).
    pub cell_gap_in: f64,

    /// Box length resolved from the catalog (or fallback).
    pub box_length_in: f64,
    /// Cell belt speed resolved from the catalog (or fallback).
    pub cell_speed_fpm: f64,

    /// Induction feed into one lane.
    pub feed_per_lane_cpm: f64,
    /// Print-and-apply rate of one lane (feed capped at the station ceiling).
    pub pna_lane_cpm: f64,
    /// Print-and-apply rate across all lanes.
    pub pna_total_cpm: f64,
    /// Print-and-apply total after the merge ceiling.
    pub pna_merge_cpm: f64,

    /// Uncapped cell rate of one lane.
    pub cell_lane_cpm: f64,
    /// Cell rate of one lane after the InchStore ceiling.
    pub lane_after_cell_cpm: f64,
    /// Post-cell rate across all lanes.
    pub post_cell_total_cpm: f64,

    /// `min(pna_total, post_cell_total, merge ceiling)`.
    pub upstream_cap_cpm: f64,
    /// Sort crew capacity for the pass.
    pub sort_cap_cpm: f64,
    /// `min(upstream_cap, sort_cap)`.
    pub bottleneck_cpm: f64,
    /// Bottleneck expressed per hour.
    pub throughput_cph: f64,
    /// Stage that sets the bottleneck.
    pub limiting_stage: Stage,

    /// Per-lane PnA rate over the station ceiling.
    pub pna_efficiency: f64,
    /// Merged PnA rate over the merge ceiling.
    pub merge_efficiency: f64,
    /// InchStore-capped lane rate over the uncapped cell rate.
    pub treatment_efficiency: f64,

    /// Cases inducted at print-and-apply (every case in the order).
    pub cases_inducted_at_pna: u64,
    /// Cases reaching the merge zone (every case in the order).
    pub cases_at_merge: u64,

    /// Unload time.
    pub offload_min: f64,
    /// Time for all cases to pass the bottleneck.
    pub process_min: f64,
    /// Load-out time.
    pub load_min: f64,
    /// First case into the cell until the last case in.
    pub cell_span_min: f64,

    /// Idle time before the next order can start.
    pub changeover_min: u32,
}

impl OrderResult {
    /// Time the order occupies the line: offload + process + load.
    ///
    /// The cell span overlaps processing and is not part of this total.
    #[inline]
    pub fn serial_duration_min(&self) -> f64 {
        self.offload_min + self.process_min + self.load_min
    }
}

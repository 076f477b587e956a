//! Lane rate and changeover primitives.
//!
//! # Cell rate
//!
//! A lane's cell conveyor moves cases nose-to-tail with a gap between
//! them. One case occupies `(length + gap) / 12` feet of belt, so
//!
//! ```text
//! cases/min = belt speed (ft/min) / feet per case
//! ```
//!
//! The gap is floored at the minimum cell gap; a smaller value is
//! silently replaced.

use crate::config::{LineConstraints, MIN_CELL_GAP_IN};

/// Cases per minute one lane's cell can move, using the default gap floor.
///
/// # Example
///
/// ```
/// use mhs_calc::rates::cell_rate_per_lane;
///
/// // A 1.0 in gap is floored to 3.0 in: 13.0 / ((22.5 + 3.0) / 12.0)
/// let rate = cell_rate_per_lane(13.0, 22.5, 1.0);
/// assert!((rate - 13.0 / 2.125).abs() < 1e-10);
/// ```
pub fn cell_rate_per_lane(cell_speed_fpm: f64, box_length_in: f64, gap_in: f64) -> f64 {
    cell_rate_per_lane_with_floor(cell_speed_fpm, box_length_in, gap_in, MIN_CELL_GAP_IN)
}

/// Cases per minute one lane's cell can move, with an explicit gap floor.
///
/// Returns 0.0 when the case footprint is not positive.
pub fn cell_rate_per_lane_with_floor(
    cell_speed_fpm: f64,
    box_length_in: f64,
    gap_in: f64,
    min_gap_in: f64,
) -> f64 {
    let gap = gap_in.max(min_gap_in);
    let feet_per_case = (box_length_in + gap) / 12.0;
    if feet_per_case <= 0.0 {
        return 0.0;
    }
    cell_speed_fpm / feet_per_case
}

/// Changeover minutes after an order, using the default band table.
///
/// ≤ 2 lanes → 2, exactly 3 → 4, ≥ 4 → 7.
pub fn changeover_minutes(lanes_used: u32) -> u32 {
    LineConstraints::default().changeover.minutes_for(lanes_used)
}

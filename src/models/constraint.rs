//! Line constraint policies.
//!
//! # Changeover
//!
//! Between consecutive orders the line sits idle while lanes are
//! re-staged. The idle time depends only on how many inbound lanes the
//! finished order used, in three discrete bands:
//!
//! | Lanes used | Changeover |
//! |------------|-----------|
//! | ≤ 2 | 2 min |
//! | 3 | 4 min |
//! | ≥ 4 | 7 min |
//!
//! The bands are a step table, never interpolated. The 3-lane value is a
//! site assumption rather than a measurement.
//!
//! # Reference
//! Allahverdi et al. (2008), "A survey of scheduling problems with
//! setup times or costs"

use serde::{Deserialize, Serialize};

/// Step-function changeover table keyed by lanes used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeoverPolicy {
    /// Upper bound (inclusive) of the small-order band.
    pub small_max_lanes: u32,
    /// Changeover for the small-order band (minutes).
    pub small_minutes: u32,
    /// Lower bound (inclusive) of the large-order band.
    pub large_min_lanes: u32,
    /// Changeover for the large-order band (minutes).
    pub large_minutes: u32,
    /// Changeover for lane counts between the two bands (minutes).
    pub mid_minutes: u32,
}

impl ChangeoverPolicy {
    /// Changeover minutes after an order that used `lanes_used` lanes.
    ///
    /// The small band is checked first, then the large band; anything in
    /// between takes the middle value.
    pub fn minutes_for(&self, lanes_used: u32) -> u32 {
        if lanes_used <= self.small_max_lanes {
            return self.small_minutes;
        }
        if lanes_used >= self.large_min_lanes {
            return self.large_minutes;
        }
        self.mid_minutes
    }
}

impl Default for ChangeoverPolicy {
    fn default() -> Self {
        Self {
            small_max_lanes: 2,
            small_minutes: 2,
            large_min_lanes: 4,
            large_minutes: 7,
            mid_minutes: 4,
        }
    }
}

//! Pass-level summary scalars.

use serde::{Deserialize, Serialize};

/// Totals for one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of inbound pallets.
    pub total_pallets: u64,
    /// Sum of `pallets × cases_per_pallet`.
    pub total_cases: u64,
    /// Number of orders in the pass.
    pub order_count: usize,
    /// Finish time of the last order (minutes), changeovers between orders included.
    pub total_elapsed_min: f64,
}

impl Summary {
    /// Elapsed time split into whole hours and whole remaining minutes.
    ///
    /// Both parts are floored; `422.7` minutes is `(7, 2)`.
    pub fn elapsed_hours_minutes(&self) -> (u64, u64) {
        let total = self.total_elapsed_min.max(0.0);
        let hours = (total / 60.0).floor();
        let minutes = (total % 60.0).floor();
        (hours as u64, minutes as u64)
    }
}

//! Order (job) model.
//!
//! An order is one customer shipment moving through the line as a single
//! unit: its pallets are unloaded, every case is inducted, labelled,
//! conveyed, merged and sorted, then the pallets are loaded out.
//!
//! Per-order line settings (lanes, workers per lane, cell gap) travel with
//! the order. The sort crew size is shared by the whole pass and lives in
//! [`GlobalConfig`](crate::config::GlobalConfig) instead.

use serde::{Deserialize, Serialize};

/// One order row as supplied by the data-entry layer.
///
/// Field names serialize to the column headers of the order table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    /// Customer name (display only).
    #[serde(rename = "Customer")]
    pub customer: String,
    /// Commodity name, resolved through the catalog.
    #[serde(rename = "Commodity")]
    pub commodity: String,
    /// Number of inbound pallets.
    #[serde(rename = "Pallets")]
    pub pallets: u32,
    /// Cases on each pallet.
    #[serde(rename = "CasesPerPallet")]
    pub cases_per_pallet: u32,
    /// Inbound lanes running in parallel (1..=6 at the editor).
    #[serde(rename = "InboundLanesUsed")]
    pub inbound_lanes_used: u32,
    /// Induction workers staffing each lane (1..=10 at the editor).
    #[serde(rename = "WorkersPerLane")]
    pub workers_per_lane: u32,
    /// Gap between cases on the cell belt (inches, >= 3.0 at the editor).
    #[serde(rename = "CellGap_in")]
    pub cell_gap_in: f64,
}

impl OrderInput {
    /// Creates an order with one lane, one worker and the minimum gap.
    pub fn new(customer: impl Into<String>, commodity: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            commodity: commodity.into(),
            pallets: 0,
            cases_per_pallet: 0,
            inbound_lanes_used: 1,
            workers_per_lane: 1,
            cell_gap_in: 3.0,
        }
    }

    /// Sets pallet count and cases per pallet.
    pub fn with_pallets(mut self, pallets: u32, cases_per_pallet: u32) -> Self {
        self.pallets = pallets;
        self.cases_per_pallet = cases_per_pallet;
        self
    }

    /// Sets the number of inbound lanes.
    pub fn with_lanes(mut self, lanes: u32) -> Self {
        self.inbound_lanes_used = lanes;
        self
    }

    /// Sets the induction crew per lane.
    pub fn with_workers_per_lane(mut self, workers: u32) -> Self {
        self.workers_per_lane = workers;
        self
    }

    /// Sets the cell gap (inches).
    pub fn with_cell_gap(mut self, gap_in: f64) -> Self {
        self.cell_gap_in = gap_in;
        self
    }

    /// Total cases in the order (`pallets × cases_per_pallet`).
    #[inline]
    pub fn total_cases(&self) -> u64 {
        u64::from(self.pallets) * u64::from(self.cases_per_pallet)
    }
}

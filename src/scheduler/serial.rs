//! Serial single-line scheduler.
//!
//! # Algorithm
//!
//! The line processes one order at a time, in input order:
//!
//! 1. `start = clock`
//! 2. `finish = start + offload + process + load`
//! 3. `clock = finish + changeover`
//!
//! The changeover of the last order is computed but never applied, so the
//! makespan is the last finish, not the last finish plus changeover.
//!
//! With component rounding enabled, offload, process and load are each
//! rounded before summing. Displayed timelines use this so that a finish
//! agrees with the rounded times shown for the order.
//!
//! # Complexity
//! O(n) where n = orders.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3: Single Machine Models

use crate::models::{OrderResult, Timeline, TimelineEntry};
use crate::report::round_to;

/// Builds a serial timeline from evaluated orders.
///
/// # Example
///
/// ```
/// use mhs_calc::evaluator::evaluate;
/// use mhs_calc::models::{CommodityCatalog, OrderInput};
/// use mhs_calc::scheduler::SerialScheduler;
///
/// let catalog = CommodityCatalog::new();
/// let results = vec![
///     evaluate(&OrderInput::new("A", "Oysters").with_pallets(2, 0).with_lanes(3), &catalog, 6),
///     evaluate(&OrderInput::new("B", "Oysters").with_pallets(1, 0).with_lanes(1), &catalog, 6),
/// ];
///
/// let timeline = SerialScheduler::new().build(&results);
/// // A: 2 min unload + 2 min load, then a 4 min changeover (3 lanes).
/// assert_eq!(timeline.entries[1].start_min, 8.0);
/// assert_eq!(timeline.total_elapsed_min(), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerialScheduler {
    component_places: Option<u32>,
}

impl SerialScheduler {
    /// Creates a scheduler starting at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds each time component to `places` decimals before summing.
    pub fn with_component_rounding(mut self, places: u32) -> Self {
        self.component_places = Some(places);
        self
    }

    /// Minutes the order occupies the line under this scheduler's rounding.
    pub fn duration_min(&self, result: &OrderResult) -> f64 {
        match self.component_places {
            Some(places) => {
                round_to(result.offload_min, places)
                    + round_to(result.process_min, places)
                    + round_to(result.load_min, places)
            }
            None => result.serial_duration_min(),
        }
    }

    /// Lays out the orders back to back with changeover gaps.
    pub fn build(&self, results: &[OrderResult]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = 0.0;

        for (idx, result) in results.iter().enumerate() {
            let start = clock;
            let finish = start + self.duration_min(result);
            timeline.push(TimelineEntry::new(idx, result.customer.as_str(), start, finish));

            clock = finish + f64::from(result.changeover_min);
        }

        timeline
    }
}

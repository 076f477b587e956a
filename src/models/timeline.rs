//! Timeline (serial schedule) model.
//!
//! The line runs one order at a time. A timeline is the ordered list of
//! order windows on that single line; gaps between consecutive windows
//! are changeovers.

use serde::{Deserialize, Serialize};

/// Start/finish window of one order on the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Position of the order in the input sequence (0-indexed).
    pub order_index: usize,
    /// Customer name (denormalized for display).
    pub customer: String,
    /// Start time (minutes from the start of the pass).
    pub start_min: f64,
    /// Finish time (minutes from the start of the pass).
    pub finish_min: f64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(order_index: usize, customer: impl Into<String>, start_min: f64, finish_min: f64) -> Self {
        Self {
            order_index,
            customer: customer.into(),
            start_min,
            finish_min,
        }
    }

    /// Window length (finish - start) in minutes.
    #[inline]
    pub fn duration_min(&self) -> f64 {
        self.finish_min - self.start_min
    }
}

/// Ordered sequence of order windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in input order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Finish of the last order (0.0 when empty).
    ///
    /// The trailing changeover of the last order is not included.
    pub fn total_elapsed_min(&self) -> f64 {
        self.entries.last().map(|e| e.finish_min).unwrap_or(0.0)
    }

    /// Idle minutes between consecutive windows.
    pub fn gaps_min(&self) -> Vec<f64> {
        self.entries
            .windows(2)
            .map(|w| w[1].start_min - w[0].finish_min)
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

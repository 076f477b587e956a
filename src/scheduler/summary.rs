//! Pass summary aggregation.
//!
//! Reduces the raw order rows and the finished timeline to the four
//! headline numbers of a pass.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total pallets | Σ pallets |
//! | Total cases | Σ pallets × cases_per_pallet |
//! | Order count | number of rows |
//! | Total elapsed | last finish (0 when empty) |
//!
//! Case totals are recomputed from the inputs rather than read from the
//! evaluated results; the two agree by construction.

use crate::models::{OrderInput, Summary, Timeline};

/// Builds [`Summary`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Computes the summary from order inputs and their timeline.
    pub fn aggregate(orders: &[OrderInput], timeline: &Timeline) -> Summary {
        let total_pallets: u64 = orders.iter().map(|o| u64::from(o.pallets)).sum();
        let total_cases: u64 = orders.iter().map(OrderInput::total_cases).sum();

        let total_elapsed_min = if orders.is_empty() {
            0.0
        } else {
            timeline.total_elapsed_min()
        };

        Summary {
            total_pallets,
            total_cases,
            order_count: orders.len(),
            total_elapsed_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;

    #[test]
    fn test_summary_basic() {
        let orders = vec![
            OrderInput::new("A", "Oysters").with_pallets(10, 50),
            OrderInput::new("B", "Oysters").with_pallets(20, 220),
            OrderInput::new("C", "Oysters").with_pallets(15, 120),
        ];
        let mut timeline = Timeline::new();
        timeline.push(TimelineEntry::new(0, "A", 0.0, 47.0));
        timeline.push(TimelineEntry::new(1, "B", 51.0, 238.0));
        timeline.push(TimelineEntry::new(2, "C", 245.0, 422.0));

        let s = SummaryAggregator::aggregate(&orders, &timeline);
        assert_eq!(s.total_pallets, 45);
        assert_eq!(s.total_cases, 500 + 4400 + 1800);
        assert_eq!(s.order_count, 3);
        assert!((s.total_elapsed_min - 422.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = SummaryAggregator::aggregate(&[], &Timeline::new());
        assert_eq!(s.total_pallets, 0);
        assert_eq!(s.total_cases, 0);
        assert_eq!(s.order_count, 0);
        assert_eq!(s.total_elapsed_min, 0.0);
    }

    #[test]
    fn test_summary_zero_case_orders() {
        let orders = vec![OrderInput::new("A", "Oysters").with_pallets(3, 0)];
        let mut timeline = Timeline::new();
        timeline.push(TimelineEntry::new(0, "A", 0.0, 6.0));

        let s = SummaryAggregator::aggregate(&orders, &timeline);
        assert_eq!(s.total_pallets, 3);
        assert_eq!(s.total_cases, 0);
        assert!((s.total_elapsed_min - 6.0).abs() < 1e-10);
    }
}

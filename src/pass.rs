//! One evaluation pass over the order book.
//!
//! Catalog + orders → per-order results → serial timeline → summary.
//! Orders are evaluated independently; the timeline is built strictly in
//! input order.

use serde::Serialize;

use crate::config::{GlobalConfig, LineConstraints};
use crate::evaluator::OrderEvaluator;
use crate::models::{CommodityCatalog, OrderInput, OrderResult, Summary, Timeline};
use crate::scheduler::{SerialScheduler, SummaryAggregator};

/// Everything one pass produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    /// Per-order results, in input order.
    pub results: Vec<OrderResult>,
    /// Serial timeline, in input order.
    pub timeline: Timeline,
    /// Pass totals.
    pub summary: Summary,
}

/// Runs a full pass.
///
/// # Example
///
/// ```
/// use mhs_calc::config::{GlobalConfig, LineConstraints};
/// use mhs_calc::models::{CommodityCatalog, OrderInput};
/// use mhs_calc::pass::run_pass;
///
/// let report = run_pass(
///     &CommodityCatalog::new(),
///     &[OrderInput::new("A", "Oysters").with_pallets(10, 50).with_lanes(3)],
///     GlobalConfig::new(6),
///     &LineConstraints::default(),
/// );
/// assert_eq!(report.summary.order_count, 1);
/// assert_eq!(report.summary.total_cases, 500);
/// ```
pub fn run_pass(
    catalog: &CommodityCatalog,
    orders: &[OrderInput],
    global: GlobalConfig,
    constraints: &LineConstraints,
) -> PassReport {
    let evaluator = OrderEvaluator::new(catalog, global).with_constraints(*constraints);

    let results: Vec<OrderResult> = orders
        .iter()
        .map(|order| {
            if !catalog.contains(&order.commodity) {
                tracing::warn!(
                    "Commodity '{}' for {} not in catalog, using fallback geometry",
                    order.commodity,
                    order.customer
                );
            }
            let result = evaluator.evaluate(order);
            tracing::debug!(
                customer = %result.customer,
                bottleneck_cpm = result.bottleneck_cpm,
                stage = %result.limiting_stage,
                duration_min = result.serial_duration_min(),
                "Evaluated order"
            );
            result
        })
        .collect();

    let timeline = SerialScheduler::new().build(&results);
    let summary = SummaryAggregator::aggregate(orders, &timeline);

    tracing::info!(
        "Pass complete: {} orders, {} cases, {:.1} min elapsed",
        summary.order_count,
        summary.total_cases,
        summary.total_elapsed_min
    );

    PassReport {
        results,
        timeline,
        summary,
    }
}

//! Per-order capacity network evaluation.
//!
//! Each order flows through a chain of rate-limited stages. Every stage
//! capacity is computed independently, then the system rate is the
//! minimum of them:
//!
//! ```text
//! induction ─► PnA (≤19/lane) ─┐
//!                               ├─► merge (≤40 total) ─► sort (workers × 5)
//! cell ─► InchStore (≤42/lane) ─┘
//! ```
//!
//! # Algorithm
//! 1. `total_cases = pallets × cases_per_pallet`.
//! 2. Resolve box length and cell speed from the catalog (fallback 22.5 / 13.0).
//! 3. PnA: `lanes × min(workers × 12, 19)`.
//! 4. Conveyance: `lanes × min(cell_rate, 42)`.
//! 5. Merge: `min(PnA total, post-cell total, 40)`.
//! 6. Sort: `sort_workers × 5`.
//! 7. Bottleneck: `min(merge cap, sort cap)`.
//! 8. Times: forklift unload/load, processing at the bottleneck, and the
//!    cell span at `min(lanes × uncapped cell rate, 40)`.
//!
//! No input is rejected. Zero rates are floored at [`RATE_EPSILON`] before
//! dividing, giving a very large but finite time.
//!
//! The cell span deliberately uses the uncapped per-lane cell rate while
//! the bottleneck uses the InchStore-capped rate. The two only differ when
//! a lane's cell outruns the InchStore, which the merge ceiling masks for
//! any realistic lane count.

use crate::config::{GlobalConfig, LineConstraints};
use crate::models::{CommodityCatalog, OrderInput, OrderResult, Stage};
use crate::rates::cell_rate_per_lane_with_floor;

/// Floor applied to rates used as divisors (cpm).
pub const RATE_EPSILON: f64 = 1e-9;

/// Evaluates orders against a catalog, line constraints and sort crew.
///
/// # Example
///
/// ```
/// use mhs_calc::config::GlobalConfig;
/// use mhs_calc::evaluator::OrderEvaluator;
/// use mhs_calc::models::{Commodity, CommodityCatalog, OrderInput};
///
/// let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Oysters", 22.5, 13.0));
/// let evaluator = OrderEvaluator::new(&catalog, GlobalConfig::new(6));
///
/// let order = OrderInput::new("La imperial", "Oysters").with_pallets(10, 50).with_lanes(3);
/// let result = evaluator.evaluate(&order);
///
/// assert_eq!(result.total_cases, 500);
/// assert_eq!(result.changeover_min, 4);
/// assert!(result.bottleneck_cpm <= 40.0);
/// ```
#[derive(Debug, Clone)]
pub struct OrderEvaluator<'a> {
    catalog: &'a CommodityCatalog,
    constraints: LineConstraints,
    sort_workers: u32,
}

impl<'a> OrderEvaluator<'a> {
    /// Creates an evaluator with the default line constraints.
    pub fn new(catalog: &'a CommodityCatalog, global: GlobalConfig) -> Self {
        Self {
            catalog,
            constraints: LineConstraints::default(),
            sort_workers: global.sort_workers,
        }
    }

    /// Replaces the line constraints.
    pub fn with_constraints(mut self, constraints: LineConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Line constraints in use.
    pub fn constraints(&self) -> &LineConstraints {
        &self.constraints
    }

    /// Evaluates one order.
    pub fn evaluate(&self, order: &OrderInput) -> OrderResult {
        let c = &self.constraints;
        let lanes = f64::from(order.inbound_lanes_used);
        let total_cases = order.total_cases();
        let cases = total_cases as f64;

        let (box_length_in, cell_speed_fpm) = self.catalog.dimensions(&order.commodity);

        // Induction feeds print-and-apply
        let feed_per_lane_cpm = f64::from(order.workers_per_lane) * c.induct_worker_cpm;
        let pna_lane_cpm = feed_per_lane_cpm.min(c.pna_limit_per_lane_cpm);
        let pna_total_cpm = lanes * pna_lane_cpm;

        // Cell conveyance, InchStore ceiling per lane
        let cell_lane_cpm = cell_rate_per_lane_with_floor(
            cell_speed_fpm,
            box_length_in,
            order.cell_gap_in,
            c.min_cell_gap_in,
        );
        let lane_after_cell_cpm = cell_lane_cpm.min(c.inchstore_limit_per_lane_cpm);
        let post_cell_total_cpm = lanes * lane_after_cell_cpm;

        let upstream_cap_cpm = pna_total_cpm
            .min(post_cell_total_cpm)
            .min(c.merge_limit_cpm);
        let sort_cap_cpm = f64::from(self.sort_workers) * c.sort_worker_cpm;
        let bottleneck_cpm = upstream_cap_cpm.min(sort_cap_cpm);

        let forklift = c.forklift_pallets_per_min.max(RATE_EPSILON);
        let offload_min = f64::from(order.pallets) / forklift;
        let load_min = f64::from(order.pallets) / forklift;
        let process_min = cases / bottleneck_cpm.max(RATE_EPSILON);
        let cell_span_min =
            cases / (lanes * cell_lane_cpm).min(c.merge_limit_cpm).max(RATE_EPSILON);

        let pna_merge_cpm = pna_total_cpm.min(c.merge_limit_cpm);
        let pna_efficiency = ratio(pna_lane_cpm, c.pna_limit_per_lane_cpm);
        let merge_efficiency = ratio(pna_merge_cpm, c.merge_limit_cpm);
        let treatment_efficiency = if cell_lane_cpm > 0.0 {
            lane_after_cell_cpm / cell_lane_cpm.max(RATE_EPSILON)
        } else {
            0.0
        };

        OrderResult {
            customer: order.customer.clone(),
            commodity: order.commodity.clone(),
            pallets: order.pallets,
            cases_per_pallet: order.cases_per_pallet,
            total_cases,
            lanes: order.inbound_lanes_used,
            workers_per_lane: order.workers_per_lane,
            cell_gap_in: order.cell_gap_in,
            box_length_in,
            cell_speed_fpm,
            feed_per_lane_cpm,
            pna_lane_cpm,
            pna_total_cpm,
            pna_merge_cpm,
            cell_lane_cpm,
            lane_after_cell_cpm,
            post_cell_total_cpm,
            upstream_cap_cpm,
            sort_cap_cpm,
            bottleneck_cpm,
            throughput_cph: bottleneck_cpm * 60.0,
            limiting_stage: limiting_stage(
                pna_total_cpm,
                post_cell_total_cpm,
                c.merge_limit_cpm,
                upstream_cap_cpm,
                sort_cap_cpm,
            ),
            pna_efficiency,
            merge_efficiency,
            treatment_efficiency,
            cases_inducted_at_pna: total_cases,
            cases_at_merge: total_cases,
            offload_min,
            process_min,
            load_min,
            cell_span_min,
            changeover_min: c.changeover.minutes_for(order.inbound_lanes_used),
        }
    }

    /// Evaluates every order, preserving input order.
    pub fn evaluate_all(&self, orders: &[OrderInput]) -> Vec<OrderResult> {
        orders.iter().map(|o| self.evaluate(o)).collect()
    }
}

/// Evaluates one order with the default line constraints.
pub fn evaluate(order: &OrderInput, catalog: &CommodityCatalog, sort_workers: u32) -> OrderResult {
    OrderEvaluator::new(catalog, GlobalConfig::new(sort_workers)).evaluate(order)
}

/// `value / limit`, or 0.0 for a non-positive limit.
fn ratio(value: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        value / limit
    } else {
        0.0
    }
}

/// Stage that sets the bottleneck. Ties go to the stage earliest in the flow.
fn limiting_stage(
    pna_total: f64,
    post_cell_total: f64,
    merge_limit: f64,
    upstream_cap: f64,
    sort_cap: f64,
) -> Stage {
    if sort_cap < upstream_cap {
        Stage::Sort
    } else if pna_total <= post_cell_total && pna_total <= merge_limit {
        Stage::PrintAndApply
    } else if post_cell_total <= merge_limit {
        Stage::Conveyance
    } else {
        Stage::Merge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Commodity;

    fn oyster_catalog() -> CommodityCatalog {
        CommodityCatalog::new().with_commodity(Commodity::new("Oysters", 22.5, 13.0))
    }

    fn la_imperial() -> OrderInput {
        OrderInput::new("La imperial", "Oysters")
            .with_pallets(10, 50)
            .with_lanes(3)
            .with_workers_per_lane(1)
            .with_cell_gap(3.0)
    }

    #[test]
    fn test_reference_order() {
        let catalog = oyster_catalog();
        let r = evaluate(&la_imperial(), &catalog, 6);

        let cell = 13.0 / 2.125;
        assert_eq!(r.total_cases, 500);
        assert!((r.feed_per_lane_cpm - 12.0).abs() < 1e-10);
        assert!((r.pna_lane_cpm - 12.0).abs() < 1e-10);
        assert!((r.pna_total_cpm - 36.0).abs() < 1e-10);
        assert!((r.cell_lane_cpm - cell).abs() < 1e-10);
        assert!((r.lane_after_cell_cpm - cell).abs() < 1e-10);
        assert!((r.post_cell_total_cpm - 3.0 * cell).abs() < 1e-10);
        assert!((r.upstream_cap_cpm - 3.0 * cell).abs() < 1e-10);
        assert!((r.sort_cap_cpm - 30.0).abs() < 1e-10);
        assert!((r.bottleneck_cpm - 18.352_941).abs() < 1e-5);
        assert!((r.throughput_cph - 1101.176_47).abs() < 1e-3);
        assert!((r.offload_min - 10.0).abs() < 1e-10);
        assert!((r.load_min - 10.0).abs() < 1e-10);
        assert!((r.process_min - 500.0 / (3.0 * cell)).abs() < 1e-10);
        assert!((r.process_min - 27.24).abs() < 0.01);
        assert_eq!(r.changeover_min, 4);
        assert_eq!(r.limiting_stage, Stage::Conveyance);
    }

    #[test]
    fn test_reference_efficiencies() {
        let r = evaluate(&la_imperial(), &oyster_catalog(), 6);
        assert!((r.pna_efficiency - 12.0 / 19.0).abs() < 1e-10);
        assert!((r.pna_merge_cpm - 36.0).abs() < 1e-10);
        assert!((r.merge_efficiency - 0.9).abs() < 1e-10);
        assert!((r.treatment_efficiency - 1.0).abs() < 1e-10);
        assert_eq!(r.cases_inducted_at_pna, 500);
        assert_eq!(r.cases_at_merge, 500);
    }

    #[test]
    fn test_cell_span_uses_uncapped_rate() {
        // 100 ft/min over (6 + 3) / 12 ft = 133.3 cpm per lane, far above InchStore.
        let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Small", 6.0, 100.0));
        let order = OrderInput::new("C", "Small").with_pallets(1, 40).with_lanes(1);
        let r = evaluate(&order, &catalog, 50);

        assert!((r.cell_lane_cpm - 100.0 / 0.75).abs() < 1e-10);
        assert!((r.lane_after_cell_cpm - 42.0).abs() < 1e-10);
        assert!((r.treatment_efficiency - 42.0 / (100.0 / 0.75)).abs() < 1e-10);
        // Span: 40 / min(133.3, 40) = 1.0 min
        assert!((r.cell_span_min - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_merge_ceiling_dominates() {
        let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Small", 6.0, 100.0));
        let order = OrderInput::new("C", "Small")
            .with_pallets(10, 100)
            .with_lanes(6)
            .with_workers_per_lane(10);
        let r = evaluate(&order, &catalog, 50);

        assert!((r.pna_lane_cpm - 19.0).abs() < 1e-10);
        assert!((r.pna_total_cpm - 114.0).abs() < 1e-10);
        assert!((r.post_cell_total_cpm - 252.0).abs() < 1e-10);
        assert!((r.bottleneck_cpm - 40.0).abs() < 1e-10);
        assert!((r.merge_efficiency - 1.0).abs() < 1e-10);
        assert_eq!(r.limiting_stage, Stage::Merge);
        assert_eq!(r.changeover_min, 7);
    }

    #[test]
    fn test_sort_limited() {
        let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Small", 6.0, 100.0));
        let order = OrderInput::new("C", "Small")
            .with_pallets(2, 100)
            .with_lanes(4)
            .with_workers_per_lane(2);
        let r = evaluate(&order, &catalog, 1);

        assert!((r.sort_cap_cpm - 5.0).abs() < 1e-10);
        assert!((r.bottleneck_cpm - 5.0).abs() < 1e-10);
        assert!((r.process_min - 40.0).abs() < 1e-10);
        assert_eq!(r.limiting_stage, Stage::Sort);
    }

    #[test]
    fn test_pna_limited() {
        let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Small", 6.0, 100.0));
        let order = OrderInput::new("C", "Small").with_pallets(1, 12).with_lanes(1);
        let r = evaluate(&order, &catalog, 6);
        assert!((r.bottleneck_cpm - 12.0).abs() < 1e-10);
        assert_eq!(r.limiting_stage, Stage::PrintAndApply);
    }

    #[test]
    fn test_unknown_commodity_falls_back() {
        let order = OrderInput::new("C", "Mystery").with_pallets(10, 50).with_lanes(3);
        let with_oysters = evaluate(&la_imperial(), &oyster_catalog(), 6);
        let fallback = evaluate(&order, &CommodityCatalog::new(), 6);

        assert_eq!(fallback.box_length_in, 22.5);
        assert_eq!(fallback.cell_speed_fpm, 13.0);
        assert_eq!(fallback.bottleneck_cpm, with_oysters.bottleneck_cpm);
    }

    #[test]
    fn test_gap_below_floor() {
        let catalog = oyster_catalog();
        let tight = evaluate(&la_imperial().with_cell_gap(0.5), &catalog, 6);
        let floor = evaluate(&la_imperial(), &catalog, 6);
        assert_eq!(tight.cell_lane_cpm, floor.cell_lane_cpm);
        assert!((tight.cell_gap_in - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_zero_throughput_is_finite() {
        let catalog = oyster_catalog();
        let order = la_imperial().with_lanes(0);
        let r = evaluate(&order, &catalog, 6);

        assert_eq!(r.bottleneck_cpm, 0.0);
        assert!(r.process_min.is_finite());
        assert!(r.cell_span_min.is_finite());
        assert!((r.process_min - 500.0 / RATE_EPSILON).abs() < 1.0);
        assert_eq!(r.changeover_min, 2);
    }

    #[test]
    fn test_zero_cell_rate_efficiency() {
        let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Stopped", 22.5, 0.0));
        let order = OrderInput::new("C", "Stopped").with_pallets(1, 1);
        let r = evaluate(&order, &catalog, 6);
        assert_eq!(r.cell_lane_cpm, 0.0);
        assert_eq!(r.treatment_efficiency, 0.0);
    }

    #[test]
    fn test_empty_order() {
        let r = evaluate(&OrderInput::new("C", "Oysters"), &oyster_catalog(), 6);
        assert_eq!(r.total_cases, 0);
        assert_eq!(r.process_min, 0.0);
        assert_eq!(r.serial_duration_min(), 0.0);
    }

    #[test]
    fn test_custom_constraints() {
        let catalog = oyster_catalog();
        let constraints = LineConstraints {
            pna_limit_per_lane_cpm: 10.0,
            forklift_pallets_per_min: 2.0,
            ..Default::default()
        };
        let evaluator = OrderEvaluator::new(&catalog, GlobalConfig::new(6)).with_constraints(constraints);
        let r = evaluator.evaluate(&la_imperial());

        assert!((r.pna_lane_cpm - 10.0).abs() < 1e-10);
        assert!((r.pna_efficiency - 1.0).abs() < 1e-10);
        assert!((r.offload_min - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_ceiling_efficiency() {
        let catalog = oyster_catalog();
        let constraints = LineConstraints {
            pna_limit_per_lane_cpm: 0.0,
            merge_limit_cpm: 0.0,
            ..Default::default()
        };
        let r = OrderEvaluator::new(&catalog, GlobalConfig::default())
            .with_constraints(constraints)
            .evaluate(&la_imperial());
        assert_eq!(r.pna_efficiency, 0.0);
        assert_eq!(r.merge_efficiency, 0.0);
        assert!(r.process_min.is_finite());
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let catalog = oyster_catalog();
        let orders = vec![
            la_imperial(),
            OrderInput::new("Youngstown", "Oysters").with_pallets(20, 220).with_lanes(5),
        ];
        let results = OrderEvaluator::new(&catalog, GlobalConfig::default()).evaluate_all(&orders);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].customer, "La imperial");
        assert_eq!(results[1].customer, "Youngstown");
    }

    #[test]
    fn test_idempotent() {
        let catalog = oyster_catalog();
        let a = evaluate(&la_imperial(), &catalog, 6);
        let b = evaluate(&la_imperial(), &catalog, 6);
        assert_eq!(a, b);
    }
}

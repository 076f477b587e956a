//! Display formatting for pass results.
//!
//! Converts full-precision results into the rows shown to planners:
//! rates to 2 decimals, times to 1 decimal, efficiencies as `"63.2%"`
//! strings, and elapsed time as `"7h 2m"`. Rounding happens here only;
//! nothing downstream of the core consumes rounded values.
//!
//! The displayed timeline is rebuilt from the rounded offload, process and
//! load times, and the displayed elapsed time is its rounded last finish.
//! A timeline row therefore always adds up from the times shown in the
//! order table, and the summary card agrees with the last row.

use serde::Serialize;

use crate::models::{OrderResult, Summary, Timeline, TimelineEntry};
use crate::pass::PassReport;
use crate::scheduler::SerialScheduler;

/// Decimals shown for every time column.
pub const TIME_PLACES: u32 = 1;

/// Placeholder for the crossfire column, which the line does not measure.
pub const NOT_MEASURED: &str = "—";

/// Rounds to a number of decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Formats a ratio as a percentage with one decimal: `0.9` → `"90.0%"`.
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", round_to(ratio * 100.0, 1))
}

/// Formats minutes as whole hours and minutes: `422.7` → `"7h 2m"`.
pub fn hours_minutes(summary: &Summary) -> String {
    let (h, m) = summary.elapsed_hours_minutes();
    format!("{h}h {m}m")
}

/// Timeline built from the displayed (rounded) order times.
pub fn display_timeline(report: &PassReport) -> Timeline {
    SerialScheduler::new()
        .with_component_rounding(TIME_PLACES)
        .build(&report.results)
}

/// Summary whose elapsed time is the rounded last finish of `timeline`.
pub fn display_summary(summary: &Summary, timeline: &Timeline) -> Summary {
    Summary {
        total_elapsed_min: round_to(timeline.total_elapsed_min(), TIME_PLACES),
        ..summary.clone()
    }
}

/// Inserts thousands separators: `6700` → `"6,700"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One row of the per-order results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Commodity")]
    pub commodity: String,
    #[serde(rename = "Pallets")]
    pub pallets: u32,
    #[serde(rename = "Cases x Pallet")]
    pub cases_per_pallet: u32,
    #[serde(rename = "Total Cases")]
    pub total_cases: u64,
    #[serde(rename = "Inbound Lanes Used")]
    pub lanes: u32,
    #[serde(rename = "Workers / Lane")]
    pub workers_per_lane: u32,
    #[serde(rename = "Cell Gap (in)")]
    pub cell_gap_in: f64,
    #[serde(rename = "PnA Rate (cpm/lane)")]
    pub pna_rate: f64,
    #[serde(rename = "PnA Eff %")]
    pub pna_eff: String,
    #[serde(rename = "PnA Merge Rate (cpm)")]
    pub pna_merge_rate: f64,
    #[serde(rename = "PnA Merge Eff %")]
    pub pna_merge_eff: String,
    #[serde(rename = "Treatment rate (cpm/lane)")]
    pub treatment_rate: f64,
    #[serde(rename = "Treatment eff %")]
    pub treatment_eff: String,
    #[serde(rename = "ECP Crossfire %")]
    pub ecp_crossfire: String,
    #[serde(rename = "Cases inducted @ PnA")]
    pub cases_inducted: u64,
    #[serde(rename = "Cases @ PnA Merge")]
    pub cases_at_merge: u64,
    #[serde(rename = "Time to offload (min)")]
    pub offload_min: f64,
    #[serde(rename = "Time through MHS (min)")]
    pub process_min: f64,
    #[serde(rename = "Time to load (min)")]
    pub load_min: f64,
    #[serde(rename = "Cell first→last (min)")]
    pub cell_span_min: f64,
    #[serde(rename = "Changeover to Next (min)")]
    pub changeover_min: u32,
    #[serde(rename = "System bottleneck (cpm)")]
    pub bottleneck_cpm: f64,
    #[serde(rename = "System throughput (cases/hr)")]
    pub throughput_cph: f64,
}

impl From<&OrderResult> for OrderRow {
    fn from(r: &OrderResult) -> Self {
        Self {
            customer: r.customer.clone(),
            commodity: r.commodity.clone(),
            pallets: r.pallets,
            cases_per_pallet: r.cases_per_pallet,
            total_cases: r.total_cases,
            lanes: r.lanes,
            workers_per_lane: r.workers_per_lane,
            cell_gap_in: round_to(r.cell_gap_in, 1),
            pna_rate: round_to(r.pna_lane_cpm, 2),
            pna_eff: percent(r.pna_efficiency),
            pna_merge_rate: round_to(r.pna_merge_cpm, 2),
            pna_merge_eff: percent(r.merge_efficiency),
            treatment_rate: round_to(r.cell_lane_cpm, 2),
            treatment_eff: percent(r.treatment_efficiency),
            ecp_crossfire: NOT_MEASURED.to_string(),
            cases_inducted: r.cases_inducted_at_pna,
            cases_at_merge: r.cases_at_merge,
            offload_min: round_to(r.offload_min, TIME_PLACES),
            process_min: round_to(r.process_min, TIME_PLACES),
            load_min: round_to(r.load_min, TIME_PLACES),
            cell_span_min: round_to(r.cell_span_min, TIME_PLACES),
            changeover_min: r.changeover_min,
            bottleneck_cpm: round_to(r.bottleneck_cpm, 2),
            throughput_cph: round_to(r.throughput_cph, 1),
        }
    }
}

/// One row of the timeline table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    #[serde(rename = "Order #")]
    pub order_number: usize,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Start (min)")]
    pub start_min: f64,
    #[serde(rename = "Finish (min)")]
    pub finish_min: f64,
}

impl From<&TimelineEntry> for TimelineRow {
    fn from(e: &TimelineEntry) -> Self {
        Self {
            order_number: e.order_index + 1,
            customer: e.customer.clone(),
            start_min: round_to(e.start_min, TIME_PLACES),
            finish_min: round_to(e.finish_min, TIME_PLACES),
        }
    }
}

/// Summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    #[serde(rename = "Total Pallets")]
    pub total_pallets: u64,
    #[serde(rename = "Total Cases")]
    pub total_cases: u64,
    #[serde(rename = "Number of Orders")]
    pub order_count: usize,
    #[serde(rename = "End-to-end Time (incl. changeovers)")]
    pub elapsed: String,
}

impl From<&Summary> for SummaryView {
    fn from(s: &Summary) -> Self {
        Self {
            total_pallets: s.total_pallets,
            total_cases: s.total_cases,
            order_count: s.order_count,
            elapsed: hours_minutes(s),
        }
    }
}

/// Display-ready tables for a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayReport {
    pub summary: SummaryView,
    pub orders: Vec<OrderRow>,
    pub timeline: Vec<TimelineRow>,
}

impl From<&PassReport> for DisplayReport {
    fn from(report: &PassReport) -> Self {
        let timeline = display_timeline(report);
        Self {
            summary: SummaryView::from(&display_summary(&report.summary, &timeline)),
            orders: report.results.iter().map(OrderRow::from).collect(),
            timeline: timeline.entries.iter().map(TimelineRow::from).collect(),
        }
    }
}

/// Renders a plain-text report for terminals.
pub fn render_text(report: &PassReport) -> String {
    let mut out = String::new();
    let timeline = display_timeline(report);
    let s = &display_summary(&report.summary, &timeline);

    out.push_str("Summary\n");
    out.push_str(&format!("  Total Pallets      {}\n", group_thousands(s.total_pallets)));
    out.push_str(&format!("  Total Cases        {}\n", group_thousands(s.total_cases)));
    out.push_str(&format!("  Number of Orders   {}\n", s.order_count));
    out.push_str(&format!("  End-to-end Time    {}\n", hours_minutes(s)));

    out.push_str("\nPer-Order Results\n");
    out.push_str(&format!(
        "  {:<20} {:>7} {:>5} {:>9} {:>14} {:>10} {:>9} {:>6}\n",
        "Customer", "Cases", "Lanes", "Cap(cpm)", "Limit", "Cases/hr", "MHS(min)", "Chg"
    ));
    for r in &report.results {
        out.push_str(&format!(
            "  {:<20} {:>7} {:>5} {:>9.2} {:>14} {:>10.1} {:>9.1} {:>6}\n",
            r.customer,
            r.total_cases,
            r.lanes,
            r.bottleneck_cpm,
            r.limiting_stage.to_string(),
            r.throughput_cph,
            r.process_min,
            r.changeover_min
        ));
    }

    out.push_str("\nTimeline (serial with changeovers)\n");
    out.push_str(&format!(
        "  {:>7} {:<20} {:>11} {:>12} {:>10}\n",
        "Order #", "Customer", "Start (min)", "Finish (min)", "Idle (min)"
    ));
    // Idle before each order; the first order starts the pass.
    let idle = std::iter::once(0.0).chain(timeline.gaps_min());
    for (e, idle_min) in timeline.entries.iter().zip(idle) {
        out.push_str(&format!(
            "  {:>7} {:<20} {:>11.1} {:>12.1} {:>10.1}\n",
            e.order_index + 1,
            e.customer,
            e.start_min,
            e.finish_min,
            idle_min
        ));
    }

    out
}

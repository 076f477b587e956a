//! Serial scheduling and pass totals.
//!
//! # Algorithm
//!
//! `SerialScheduler` lays evaluated orders back to back on a single line,
//! inserting each order's changeover before the next one starts. Orders
//! are never reordered.
//!
//! # Summary
//!
//! `SummaryAggregator` reduces a pass to total pallets, total cases,
//! order count and elapsed time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Allahverdi et al. (2008), "A survey of scheduling problems with
//!   setup times or costs"

mod serial;
mod summary;

pub use serial::SerialScheduler;
pub use summary::SummaryAggregator;

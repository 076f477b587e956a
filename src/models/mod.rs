//! Material-handling domain models.
//!
//! Provides the data types flowing through one evaluation pass:
//! reference data (commodities), per-order inputs and results, the serial
//! timeline, and pass totals.
//!
//! # Domain Mappings
//!
//! | mhs-calc | Scheduling term | Floor term |
//! |----------|-----------------|------------|
//! | OrderInput | Job | Customer shipment |
//! | OrderResult | Processing time + rates | Line sheet row |
//! | TimelineEntry | Assignment on a single machine | Door-to-door window |
//! | ChangeoverPolicy | Sequence-dependent setup | Lane re-staging |

mod commodity;
mod constraint;
mod order;
mod result;
mod summary;
mod timeline;

pub use commodity::{Commodity, CommodityCatalog, FALLBACK_CELL_SPEED_FPM, FALLBACK_LENGTH_IN};
pub use constraint::ChangeoverPolicy;
pub use order::OrderInput;
pub use result::{OrderResult, Stage};
pub use summary::Summary;
pub use timeline::{Timeline, TimelineEntry};

//! Material-handling line calculator.
//!
//! Computes throughput, bottlenecks and elapsed time for a sequence of
//! warehouse orders moving through a multi-stage line
//! (unload → induction → print-and-apply → cell → merge → sort → load),
//! then schedules the orders serially with changeovers between them.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Commodity`, `CommodityCatalog`, `OrderInput`,
//!   `OrderResult`, `Timeline`, `Summary`, `ChangeoverPolicy`
//! - **`config`**: Named capacity constants (`LineConstraints`) and pass-wide values
//! - **`rates`**: Cell rate per lane and changeover bands
//! - **`evaluator`**: Per-order min-capacity network
//! - **`scheduler`**: Serial timeline and pass summary
//! - **`pass`**: One full evaluation pass
//! - **`validation`**: Advisory checks at the data-entry boundary
//! - **`report`**: Display rounding and tables
//!
//! # Architecture
//!
//! The core (`rates`, `evaluator`, `scheduler`, `pass`) is synchronous and
//! infallible: out-of-range numbers are floored, clamped or defaulted,
//! never rejected. File handling and logging setup live at the edge
//! (`io`, `logger`, `cli`) and are the only places that return errors.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Goldratt (1984), "The Goal" (bottleneck-bound throughput)

pub mod config;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod logger;
pub mod models;
pub mod pass;
pub mod rates;
pub mod report;
pub mod sample;
pub mod scheduler;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};

pub use config::{CalculatorConfig, GlobalConfig, LineConstraints};
pub use error::{MhsError, Result};
pub use evaluator::{evaluate, OrderEvaluator};
pub use pass::{run_pass, PassReport};

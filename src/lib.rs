//! Microbenchmarks: quadratic residue counting (function call overhead), a
//! nested arithmetic loop and a Monte Carlo estimate of π, each timed once
//! with a monotonic clock. The `compare` machinery runs the C and Python
//! versions of the same programs for a side-by-side table.

pub mod compare;
pub mod ext;
pub mod format;
pub mod harness;
pub mod logging;
pub mod report;
pub mod run;
pub mod stats;
pub mod suite;
pub mod workload;

//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port implementations
//! to run one line-count analysis:
//!
//! - [`processor`]: Turns one document into a result record
//! - [`orchestrator`]: Visits every document and collects the records
//! - [`report`]: Sorts the records and hands them to a report sink
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod processor;
pub mod report;
pub mod unit;

pub use dto::RunSummary;
pub use orchestrator::{AnalysisRunner, print_report, run_and_return_results};
pub use processor::process;
pub use report::ReportPrinter;

//! Pure aggregation over the school record collection.
//!
//! This module is the computation behind every role view: filtering,
//! closure rate, subvention totals by program, and risk ranking.

pub mod filter;
pub mod service;


pub use filter::{RecordFilter, RegionFilter};
pub use service::{AggregatorService, StatusCounts};

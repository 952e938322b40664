//! National monitor (MINEDUC) dashboard assembly.
//!
//! This module builds the monitor payload for a filtered subset:
//! - Headline KPIs and funding universe
//! - Per-program and per-status chart series

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::*;

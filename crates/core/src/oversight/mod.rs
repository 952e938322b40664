//! Oversight (SIE) console: prioritized risk cases, smart dossiers,
//! and the national sweep.

pub mod service;
pub mod types;

pub use service::{DEFAULT_RISK_THRESHOLD, OversightService};
pub use types::*;

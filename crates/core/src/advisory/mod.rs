//! Simulated advisory content: chat replies, executive summaries, and
//! generated justification texts.

pub mod service;
pub mod types;

pub use service::AdvisoryService;
pub use types::*;

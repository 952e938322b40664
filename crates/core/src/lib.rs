//! Core business logic for SISRC.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, aggregation rules, and view-payload assembly live here.
//!
//! # Modules
//!
//! - `school` - School record domain types
//! - `aggregate` - Collection summaries behind every role view
//! - `dashboard` - National monitor assembly
//! - `oversight` - Risk-prioritized case list for the audit console
//! - `holder` - Holder portal summary and rendición submission
//! - `advisory` - Simulated AI advisor content

pub mod advisory;
pub mod aggregate;
pub mod dashboard;
pub mod holder;
pub mod oversight;
pub mod school;

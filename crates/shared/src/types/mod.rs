//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{format_clp, format_clp_compact};

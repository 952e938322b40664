//! In-memory school record collection for SISRC.
//!
//! This crate provides:
//! - The embedded five-school demo seed
//! - Optional JSON snapshot loading at startup
//! - A thread-safe store with repository-style access (list / find / replace)
//!
//! There is no persistence layer: the collection is built once when the
//! server starts and every mutation replaces a whole record in place.

pub mod seed;
pub mod store;

pub use store::{SchoolStore, StoreError};

//! Shared types, errors, and configuration for SISRC.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Chilean peso formatting with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

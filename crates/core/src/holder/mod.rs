//! School-holder (sostenedor) portal: financial summary, rendición
//! submission, and advisory justification attachment.

pub mod error;
pub mod service;
pub mod types;


pub use error::HolderError;
pub use service::{HolderService, SUBMISSION_FOLIO};
pub use types::*;

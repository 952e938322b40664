//! Holder portal error types.

use thiserror::Error;

use crate::school::RecordStatus;

/// Errors that can occur during holder portal operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HolderError {
    /// The rendición is not in a submittable status.
    #[error("Cannot submit a rendición in status {from}")]
    InvalidSubmission {
        /// The status the record was in.
        from: RecordStatus,
    },

    /// No expense with the requested id on this record.
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// The expense already carries a justification.
    #[error("Expense {0} already has a justification")]
    JustificationAlreadySet(String),
}

impl HolderError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidSubmission { .. } | Self::JustificationAlreadySet(_) => 409,
            Self::ExpenseNotFound(_) => 404,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSubmission { .. } => "INVALID_SUBMISSION",
            Self::ExpenseNotFound(_) => "EXPENSE_NOT_FOUND",
            Self::JustificationAlreadySet(_) => "JUSTIFICATION_ALREADY_SET",
        }
    }
}

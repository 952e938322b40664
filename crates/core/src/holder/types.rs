//! Holder portal payload types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::school::{SchoolRecord, SubventionBreakdown};

/// Financial summary block of the holder portal.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    /// Total subvention received.
    pub total_grant: Decimal,
    /// Sum of the record's expense amounts.
    pub total_expensed: Decimal,
    /// Expensed share of the grant, one decimal.
    pub percent_used: Decimal,
    /// Projected end-of-period spending.
    pub projected_amount: Decimal,
    /// Projected share of the grant, one decimal.
    pub projected_percent: Decimal,
    /// Funding composition shown in the universe popup.
    pub subventions: SubventionBreakdown,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    /// The record after the transition.
    pub record: SchoolRecord,
    /// Tracking folio handed to the holder.
    pub folio: String,
}

//! Holder portal operations: financial summary, rendición submission,
//! justification attachment.
//!
//! All methods are associated functions over a borrowed record; the
//! mutating ones return a full replacement record for the store to
//! merge by id.

use rust_decimal::Decimal;
use sisrc_shared::types::ExpenseId;

use super::error::HolderError;
use super::types::{FinancialSummary, SubmissionReceipt};
use crate::advisory::AdvisoryService;
use crate::school::{RecordStatus, SchoolRecord};

/// Folio label handed back on submission.
pub const SUBMISSION_FOLIO: &str = "#2025-NOV-8832";

/// Freshness label stamped on a just-submitted record.
const FRESH_UPDATE_LABEL: &str = "Hace un momento";

/// Projection factor over the expensed total, in hundredths.
const PROJECTION_FACTOR_HUNDREDTHS: i64 = 115;

/// Stateless service for holder portal operations.
pub struct HolderService;

impl HolderService {
    /// Financial summary over the record's expense lines.
    #[must_use]
    pub fn financial_summary(record: &SchoolRecord) -> FinancialSummary {
        let total_expensed: Decimal = record.expenses.iter().map(|e| e.amount).sum();
        let projected_amount =
            (total_expensed * Decimal::new(PROJECTION_FACTOR_HUNDREDTHS, 2)).normalize();

        FinancialSummary {
            total_grant: record.total_grant,
            total_expensed,
            percent_used: Self::share_of_grant(total_expensed, record.total_grant),
            projected_amount,
            projected_percent: Self::share_of_grant(projected_amount, record.total_grant),
            subventions: record.subventions,
        }
    }

    /// Submit the rendición.
    ///
    /// # Returns
    /// * `Ok(SubmissionReceipt)` with the transitioned record and folio
    /// * `Err(HolderError::InvalidSubmission)` if the record is already
    ///   `Submitted` or `Approved`
    pub fn submit(record: &SchoolRecord) -> Result<SubmissionReceipt, HolderError> {
        if !record.status.can_submit() {
            return Err(HolderError::InvalidSubmission {
                from: record.status,
            });
        }

        let mut updated = record.clone();
        updated.status = RecordStatus::Submitted;
        updated.progress = 100;
        updated.last_update = FRESH_UPDATE_LABEL.to_string();

        Ok(SubmissionReceipt {
            record: updated,
            folio: SUBMISSION_FOLIO.to_string(),
        })
    }

    /// Attach the generated justification to one expense.
    ///
    /// The text is templated over the expense's category and set once.
    ///
    /// # Returns
    /// * `Ok(SchoolRecord)` with the justified expense
    /// * `Err(HolderError::ExpenseNotFound)` for an unknown expense id
    /// * `Err(HolderError::JustificationAlreadySet)` on a second attempt
    pub fn attach_justification(
        record: &SchoolRecord,
        expense_id: &ExpenseId,
    ) -> Result<SchoolRecord, HolderError> {
        let mut updated = record.clone();
        let expense = updated
            .expenses
            .iter_mut()
            .find(|expense| &expense.id == expense_id)
            .ok_or_else(|| HolderError::ExpenseNotFound(expense_id.to_string()))?;

        if expense.justification.is_some() {
            return Err(HolderError::JustificationAlreadySet(expense_id.to_string()));
        }
        expense.justification = Some(AdvisoryService::justification_text(expense.category));

        Ok(updated)
    }

    fn share_of_grant(amount: Decimal, grant: Decimal) -> Decimal {
        if grant.is_zero() {
            Decimal::ZERO
        } else {
            (amount / grant * Decimal::ONE_HUNDRED).round_dp(1)
        }
    }
}

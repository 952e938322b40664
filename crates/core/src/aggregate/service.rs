//! Aggregation service turning record collections into view-ready summaries.
//!
//! Every operation is a pure, total function over the supplied slice:
//! no I/O, no stored state, re-run on each invocation with the current
//! snapshot. Records are assumed well-formed by the upstream ingestion
//! process; the only defensive rule is the division-by-zero guard on
//! the closure rate.

use rust_decimal::Decimal;
use serde::Serialize;

use super::filter::RecordFilter;
use crate::school::{RecordStatus, SchoolRecord, SubventionBreakdown};

/// Record counts per lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Records still open.
    pub open: usize,
    /// Records handed in.
    pub submitted: usize,
    /// Records with observations.
    pub flagged: usize,
    /// Records accepted.
    pub approved: usize,
}

impl StatusCounts {
    /// Total number of counted records.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.open + self.submitted + self.flagged + self.approved
    }
}

/// Aggregation service for the school record collection.
pub struct AggregatorService;

impl AggregatorService {
    /// Returns the subsequence of records matching the filter,
    /// preserving input order.
    #[must_use]
    pub fn filter_records(records: &[SchoolRecord], filter: &RecordFilter) -> Vec<SchoolRecord> {
        let query_lower = filter.query.to_lowercase();
        records
            .iter()
            .filter(|record| {
                let region_matches = filter.region.matches(record.region);
                let dependence_matches = filter
                    .dependence
                    .is_none_or(|dependence| dependence == record.dependence);
                let query_matches = filter.query.is_empty()
                    || record.rbd.as_str().contains(&filter.query)
                    || record.name.to_lowercase().contains(&query_lower);
                region_matches && dependence_matches && query_matches
            })
            .cloned()
            .collect()
    }

    /// Share of records handed in (Submitted or Approved), as a percentage
    /// rounded to one decimal place. Defined as `0.0` for an empty slice.
    #[must_use]
    pub fn closure_rate(records: &[SchoolRecord]) -> Decimal {
        if records.is_empty() {
            return Decimal::ZERO;
        }
        let closed = records.iter().filter(|r| r.status.is_closed()).count();
        (Decimal::from(closed) / Decimal::from(records.len()) * Decimal::ONE_HUNDRED).round_dp(1)
    }

    /// Element-wise sum of every record's subvention breakdown.
    #[must_use]
    pub fn sum_subventions(records: &[SchoolRecord]) -> SubventionBreakdown {
        records.iter().fold(
            SubventionBreakdown::default(),
            |acc, record| SubventionBreakdown {
                general: acc.general + record.subventions.general,
                sep: acc.sep + record.subventions.sep,
                pie: acc.pie + record.subventions.pie,
                faep: acc.faep + record.subventions.faep,
                others: acc.others + record.subventions.others,
            },
        )
    }

    /// Records with `risk_score` strictly above the threshold, sorted
    /// descending by score. The sort is stable: ties keep input order.
    #[must_use]
    pub fn rank_by_risk(records: &[SchoolRecord], threshold: u8) -> Vec<SchoolRecord> {
        let mut ranked: Vec<SchoolRecord> = records
            .iter()
            .filter(|record| record.risk_score > threshold)
            .cloned()
            .collect();
        ranked.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
        ranked
    }

    /// Record counts per lifecycle status.
    #[must_use]
    pub fn status_counts(records: &[SchoolRecord]) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for record in records {
            match record.status {
                RecordStatus::Open => counts.open += 1,
                RecordStatus::Submitted => counts.submitted += 1,
                RecordStatus::Flagged => counts.flagged += 1,
                RecordStatus::Approved => counts.approved += 1,
            }
        }
        counts
    }
}

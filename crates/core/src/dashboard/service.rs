//! National monitor payload assembly.
//!
//! Figures come from the aggregation module; the presumed-debt KPI, the
//! average-days KPI, the per-program execution fractions, and the
//! macro-zone series are canned demo indicators with no upstream feed.

use rust_decimal::Decimal;

use super::types::{KpiBlock, MonitorDashboard, ProgramExecution, RegionalProgress, UniverseBlock};
use crate::aggregate::{AggregatorService, RecordFilter};
use crate::school::SchoolRecord;

/// Per-program reported fraction, in hundredths.
const PROGRAM_EXECUTION_HUNDREDTHS: [(&str, i64); 4] =
    [("General", 90), ("SEP", 85), ("PIE", 95), ("FAEP", 60)];

/// Macro-zone progress rows: submitted, expected, projected.
const ZONE_PROGRESS: [(&str, u32, u32, u32); 5] = [
    ("RM", 45, 60, 55),
    ("Valpo", 20, 35, 32),
    ("BioBio", 30, 40, 38),
    ("Norte", 15, 25, 22),
    ("Sur", 25, 30, 29),
];

/// National monitor assembly service.
pub struct DashboardService;

impl DashboardService {
    /// Builds the monitor payload for the subset matching the filter.
    #[must_use]
    pub fn build(records: &[SchoolRecord], filter: &RecordFilter) -> MonitorDashboard {
        let subset = AggregatorService::filter_records(records, filter);
        let counts = AggregatorService::status_counts(&subset);
        let subventions = AggregatorService::sum_subventions(&subset);

        let total_transferred = subventions.total();
        let total_reported: Decimal = subset.iter().map(|r| r.total_declared).sum();
        let execution_percent = if total_transferred.is_zero() {
            Decimal::ZERO
        } else {
            (total_reported / total_transferred * Decimal::ONE_HUNDRED).round_dp(1)
        };

        let program_amounts = [
            subventions.general,
            subventions.sep,
            subventions.pie,
            subventions.faep,
        ];
        let subvention_chart = PROGRAM_EXECUTION_HUNDREDTHS
            .iter()
            .zip(program_amounts)
            .map(|(&(program, hundredths), universe)| ProgramExecution {
                program: program.to_string(),
                universe,
                reported: (universe * Decimal::new(hundredths, 2)).normalize(),
            })
            .collect();

        MonitorDashboard {
            kpis: KpiBlock {
                closure_rate: AggregatorService::closure_rate(&subset),
                submitted_count: counts.submitted + counts.approved,
                total_count: subset.len(),
                presumed_debt: Decimal::from(4_500_000_000_i64),
                average_days: Decimal::new(12, 1),
            },
            universe: UniverseBlock {
                subventions,
                total_transferred,
                total_reported,
                execution_percent,
            },
            subvention_chart,
            status_chart: counts,
            regional_progress: ZONE_PROGRESS
                .iter()
                .map(|&(zone, submitted, expected, projected)| RegionalProgress {
                    zone: zone.to_string(),
                    submitted,
                    expected,
                    projected,
                })
                .collect(),
        }
    }
}

//! National monitor payload types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::StatusCounts;
use crate::school::SubventionBreakdown;

/// Full national monitor payload for one filtered subset.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorDashboard {
    /// Headline indicators.
    pub kpis: KpiBlock,
    /// Funding universe block.
    pub universe: UniverseBlock,
    /// Per-program universe vs. reported rows.
    pub subvention_chart: Vec<ProgramExecution>,
    /// Donut slices per lifecycle status.
    pub status_chart: StatusCounts,
    /// Macro-zone progress series.
    pub regional_progress: Vec<RegionalProgress>,
}

/// Headline indicators of the monitor.
#[derive(Debug, Clone, Serialize)]
pub struct KpiBlock {
    /// Closure percentage, one decimal.
    pub closure_rate: Decimal,
    /// Records handed in within the subset.
    pub submitted_count: usize,
    /// Subset size.
    pub total_count: usize,
    /// Presumed debt detected by external cross-checks.
    pub presumed_debt: Decimal,
    /// Average days from opening to submission.
    pub average_days: Decimal,
}

/// Funding universe of the filtered subset.
#[derive(Debug, Clone, Serialize)]
pub struct UniverseBlock {
    /// Element-wise summed breakdown.
    pub subventions: SubventionBreakdown,
    /// Sum of the five program amounts.
    pub total_transferred: Decimal,
    /// Sum of declared totals.
    pub total_reported: Decimal,
    /// Reported share of the universe, one decimal.
    pub execution_percent: Decimal,
}

/// One bar pair of the per-program chart.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramExecution {
    /// Program display name.
    pub program: String,
    /// Transferred amount for the program.
    pub universe: Decimal,
    /// Reported amount to date.
    pub reported: Decimal,
}

/// One macro-zone row of the progress chart.
#[derive(Debug, Clone, Serialize)]
pub struct RegionalProgress {
    /// Macro-zone display label.
    pub zone: String,
    /// Rendiciones submitted.
    pub submitted: u32,
    /// Expected total for the zone.
    pub expected: u32,
    /// Model-projected submissions.
    pub projected: u32,
}

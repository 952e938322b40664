//! Oversight console payload types.

use serde::Serialize;
use sisrc_shared::types::{Rbd, SchoolId};

use crate::school::{Dependence, RecordStatus, Region};

/// How a prioritized case will be reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewKind {
    /// Bot-driven review for high scores.
    Automated,
    /// Auditor-assigned review.
    Manual,
}

impl ReviewKind {
    /// Score above which a case is routed to the bots.
    pub const AUTOMATED_CUTOFF: u8 = 70;

    /// Picks the review kind for a risk score.
    #[must_use]
    pub fn for_risk_score(score: u8) -> Self {
        if score > Self::AUTOMATED_CUTOFF {
            Self::Automated
        } else {
            Self::Manual
        }
    }
}

/// One row of the risk matrix.
#[derive(Debug, Clone, Serialize)]
pub struct RiskCase {
    /// Record identifier.
    pub id: SchoolId,
    /// Establishment name.
    pub name: String,
    /// Registry code.
    pub rbd: Rbd,
    /// Administrative region.
    pub region: Region,
    /// Administrative dependence.
    pub dependence: Dependence,
    /// Rendición status.
    pub status: RecordStatus,
    /// Externally assigned risk score.
    pub risk_score: u8,
    /// Routing decision for the review.
    pub review_kind: ReviewKind,
}

/// Review workforce shown in the console header.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReviewCapacity {
    /// Bots available for automated review.
    pub active_bots: u32,
    /// Human auditors on rotation.
    pub auditors: u32,
}

/// Ranked case list plus console context.
#[derive(Debug, Clone, Serialize)]
pub struct CaseList {
    /// Prioritization hint shown above the table.
    pub priority_hint: String,
    /// Review workforce.
    pub capacity: ReviewCapacity,
    /// Cases above the threshold, highest risk first.
    pub cases: Vec<RiskCase>,
}

/// Smart dossier for one establishment.
#[derive(Debug, Clone, Serialize)]
pub struct RiskDossier {
    /// Record identifier.
    pub school_id: SchoolId,
    /// Establishment name.
    pub school_name: String,
    /// Dossier provenance label.
    pub origin: String,
    /// Canned risk hypothesis.
    pub hypothesis: String,
    /// Suggested evidence checklist.
    pub evidence: Vec<EvidenceItem>,
}

/// One suggested evidence document.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceItem {
    /// Document label.
    pub document: String,
    /// Review state label.
    pub status: String,
}

/// Critical finding raised by the national sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepAlert {
    /// Alert headline.
    pub title: String,
    /// Finding text.
    pub detail: String,
}

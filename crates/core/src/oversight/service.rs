//! Oversight console assembly: risk matrix, dossiers, national sweep.
//!
//! The hypothesis, evidence checklist, and sweep finding are canned
//! demo content; only the case ranking is computed.

use super::types::{
    CaseList, EvidenceItem, ReviewCapacity, ReviewKind, RiskCase, RiskDossier, SweepAlert,
};
use crate::aggregate::{AggregatorService, RecordFilter};
use crate::school::SchoolRecord;

/// Console threshold: cases at or below this score stay off the matrix.
pub const DEFAULT_RISK_THRESHOLD: u8 = 10;

const PRIORITY_HINT: &str =
    "Lista priorizada por IA según tu historial de fiscalización (RRHH focus)";

const DOSSIER_ORIGIN: &str = "Generado automáticamente por Motor SISRC";

const DOSSIER_HYPOTHESIS: &str = "El establecimiento presenta una desviación del 35% en gastos \
     de remuneraciones respecto al año anterior, sin que exista un incremento proporcional en \
     la dotación docente registrada en SIGE. Se sugiere auditar contratos nuevos.";

const EVIDENCE_DOCUMENTS: [&str; 2] = [
    "Libro de Remuneraciones Octubre 2025",
    "Contratos de Trabajo (Muestreo 10%)",
];

const EVIDENCE_PENDING: &str = "No Revisado";

const SWEEP_TITLE: &str = "Nueva Alerta Crítica Detectada";

const SWEEP_DETAIL: &str = "Se detectó una anomalía en Colegio Santa María: Aumento del 40% en \
     gastos de RRHH sin correlación con aumento de matrícula. Posible inconsistencia normativa \
     Circular 30. (IA Model detected)";

/// Oversight console assembly service.
pub struct OversightService;

impl OversightService {
    /// Ranked risk matrix over the subset matching the filter.
    #[must_use]
    pub fn prioritized_cases(
        records: &[SchoolRecord],
        filter: &RecordFilter,
        threshold: u8,
    ) -> CaseList {
        let subset = AggregatorService::filter_records(records, filter);
        let cases = AggregatorService::rank_by_risk(&subset, threshold)
            .into_iter()
            .map(|record| RiskCase {
                review_kind: ReviewKind::for_risk_score(record.risk_score),
                id: record.id,
                name: record.name,
                rbd: record.rbd,
                region: record.region,
                dependence: record.dependence,
                status: record.status,
                risk_score: record.risk_score,
            })
            .collect();

        CaseList {
            priority_hint: PRIORITY_HINT.to_string(),
            capacity: ReviewCapacity {
                active_bots: 12,
                auditors: 5,
            },
            cases,
        }
    }

    /// Smart dossier for one establishment.
    #[must_use]
    pub fn dossier(record: &SchoolRecord) -> RiskDossier {
        RiskDossier {
            school_id: record.id.clone(),
            school_name: record.name.clone(),
            origin: DOSSIER_ORIGIN.to_string(),
            hypothesis: DOSSIER_HYPOTHESIS.to_string(),
            evidence: EVIDENCE_DOCUMENTS
                .iter()
                .map(|document| EvidenceItem {
                    document: (*document).to_string(),
                    status: EVIDENCE_PENDING.to_string(),
                })
                .collect(),
        }
    }

    /// Canned critical finding for the national sweep.
    #[must_use]
    pub fn sweep_alert() -> SweepAlert {
        SweepAlert {
            title: SWEEP_TITLE.to_string(),
            detail: SWEEP_DETAIL.to_string(),
        }
    }
}

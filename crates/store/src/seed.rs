//! Embedded demo dataset.
//!
//! Five establishments mirroring the ingestion wire format. School `1`
//! is the holder-portal subject and the only record with expense lines
//! preloaded; the other four exist to exercise the monitor and oversight
//! views across regions, dependences, and statuses.

use rust_decimal::Decimal;
use sisrc_core::school::{
    Dependence, ExpenseCategory, ExpenseItem, ExpenseSource, ExpenseStatus, RecordStatus, Region,
    SchoolRecord, SubventionBreakdown,
};
use sisrc_shared::types::{ExpenseId, Rbd, SchoolId};

/// Builds the five-school demo collection in seed order.
#[must_use]
pub fn demo_records() -> Vec<SchoolRecord> {
    vec![
        colegio_santa_maria(),
        liceo_bicentenario_valparaiso(),
        escuela_rural_los_pinos(),
        colegio_tecnologico_del_norte(),
        instituto_del_sur(),
    ]
}

fn colegio_santa_maria() -> SchoolRecord {
    SchoolRecord {
        id: SchoolId::new("1"),
        name: "Colegio Santa María".to_string(),
        rbd: Rbd::new("12345-6"),
        region: Region::Metropolitana,
        dependence: Dependence::ParticularSubvencionado,
        status: RecordStatus::Open,
        progress: 40,
        total_grant: Decimal::from(15_000_000),
        subventions: SubventionBreakdown {
            general: Decimal::from(8_000_000),
            sep: Decimal::from(4_000_000),
            pie: Decimal::from(2_000_000),
            faep: Decimal::from(500_000),
            others: Decimal::from(500_000),
        },
        total_declared: Decimal::from(6_200_000),
        risk_score: 85,
        last_update: "2025-11-14".to_string(),
        expenses: vec![
            ExpenseItem {
                id: ExpenseId::new("e1"),
                category: ExpenseCategory::Remunerations,
                source: ExpenseSource::LaborDirectorate,
                amount: Decimal::from(4_500_000),
                description: "Sueldos Docentes Octubre".to_string(),
                justification: None,
                status: ExpenseStatus::Validated,
            },
            ExpenseItem {
                id: ExpenseId::new("e2"),
                category: ExpenseCategory::GoodsAndServices,
                source: ExpenseSource::TaxAuthorityInvoice,
                amount: Decimal::from(1_200_000),
                description: "Factura #3042 - Librería Nacional".to_string(),
                justification: None,
                status: ExpenseStatus::Validated,
            },
            ExpenseItem {
                id: ExpenseId::new("e3"),
                category: ExpenseCategory::Infrastructure,
                source: ExpenseSource::Manual,
                amount: Decimal::from(500_000),
                description: "Reparación Techo Sala 3".to_string(),
                justification: None,
                status: ExpenseStatus::Pending,
            },
        ],
    }
}

fn liceo_bicentenario_valparaiso() -> SchoolRecord {
    SchoolRecord {
        id: SchoolId::new("2"),
        name: "Liceo Bicentenario Valparaíso".to_string(),
        rbd: Rbd::new("9876-K"),
        region: Region::Valparaiso,
        dependence: Dependence::Municipal,
        status: RecordStatus::Submitted,
        progress: 100,
        total_grant: Decimal::from(22_000_000),
        subventions: SubventionBreakdown {
            general: Decimal::from(12_000_000),
            sep: Decimal::from(6_000_000),
            pie: Decimal::from(3_000_000),
            faep: Decimal::from(1_000_000),
            others: Decimal::ZERO,
        },
        total_declared: Decimal::from(21_500_000),
        risk_score: 12,
        last_update: "2025-11-12".to_string(),
        expenses: Vec::new(),
    }
}

fn escuela_rural_los_pinos() -> SchoolRecord {
    SchoolRecord {
        id: SchoolId::new("3"),
        name: "Escuela Rural Los Pinos".to_string(),
        rbd: Rbd::new("3321-2"),
        region: Region::LosLagos,
        dependence: Dependence::Municipal,
        status: RecordStatus::Open,
        progress: 75,
        total_grant: Decimal::from(5_000_000),
        subventions: SubventionBreakdown {
            general: Decimal::from(3_000_000),
            sep: Decimal::from(1_500_000),
            pie: Decimal::from(500_000),
            faep: Decimal::ZERO,
            others: Decimal::ZERO,
        },
        total_declared: Decimal::from(3_500_000),
        risk_score: 45,
        last_update: "2025-11-10".to_string(),
        expenses: Vec::new(),
    }
}

fn colegio_tecnologico_del_norte() -> SchoolRecord {
    SchoolRecord {
        id: SchoolId::new("4"),
        name: "Colegio Tecnológico del Norte".to_string(),
        rbd: Rbd::new("5543-1"),
        region: Region::Antofagasta,
        dependence: Dependence::Slep,
        status: RecordStatus::Flagged,
        progress: 100,
        total_grant: Decimal::from(18_000_000),
        subventions: SubventionBreakdown {
            general: Decimal::from(10_000_000),
            sep: Decimal::from(5_000_000),
            pie: Decimal::from(2_000_000),
            faep: Decimal::from(1_000_000),
            others: Decimal::ZERO,
        },
        total_declared: Decimal::from(19_000_000),
        risk_score: 92,
        last_update: "2025-11-05".to_string(),
        expenses: Vec::new(),
    }
}

fn instituto_del_sur() -> SchoolRecord {
    SchoolRecord {
        id: SchoolId::new("5"),
        name: "Instituto del Sur".to_string(),
        rbd: Rbd::new("8821-9"),
        region: Region::Biobio,
        dependence: Dependence::ParticularSubvencionado,
        status: RecordStatus::Submitted,
        progress: 100,
        total_grant: Decimal::from(12_000_000),
        subventions: SubventionBreakdown {
            general: Decimal::from(7_000_000),
            sep: Decimal::from(3_000_000),
            pie: Decimal::from(1_500_000),
            faep: Decimal::ZERO,
            others: Decimal::from(500_000),
        },
        total_declared: Decimal::from(11_800_000),
        risk_score: 5,
        last_update: "2025-11-13".to_string(),
        expenses: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_has_five_records_in_order() {
        let records = demo_records();
        assert_eq!(records.len(), 5);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_seed_ids_and_rbds_are_unique() {
        let records = demo_records();

        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let rbds: HashSet<&str> = records.iter().map(|r| r.rbd.as_str()).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(rbds.len(), records.len());
    }

    #[test]
    fn test_only_the_holder_subject_has_expenses() {
        let records = demo_records();

        assert_eq!(records[0].expenses.len(), 3);
        for record in &records[1..] {
            assert!(record.expenses.is_empty());
        }
    }

    #[test]
    fn test_seed_subventions_sum_to_each_grant() {
        for record in demo_records() {
            assert_eq!(
                record.subventions.total(),
                record.total_grant,
                "subventions of school {} do not sum to its grant",
                record.id
            );
        }
    }

    #[test]
    fn test_holder_subject_expenses_sum_to_declared() {
        let record = &demo_records()[0];
        let expensed: Decimal = record.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(expensed, record.total_declared);
    }

    #[test]
    fn test_seed_status_distribution() {
        let records = demo_records();

        let open = records
            .iter()
            .filter(|r| r.status == RecordStatus::Open)
            .count();
        let submitted = records
            .iter()
            .filter(|r| r.status == RecordStatus::Submitted)
            .count();
        let flagged = records
            .iter()
            .filter(|r| r.status == RecordStatus::Flagged)
            .count();

        assert_eq!(open, 2);
        assert_eq!(submitted, 2);
        assert_eq!(flagged, 1);
    }

    #[test]
    fn test_no_seed_expense_carries_a_justification() {
        let records = demo_records();
        let justified = records
            .iter()
            .flat_map(|r| &r.expenses)
            .filter(|e| e.justification.is_some())
            .count();
        assert_eq!(justified, 0);
    }
}

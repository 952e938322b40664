//! Wire-format and helper tests for the school domain types.

use std::str::FromStr;

use rust_decimal_macros::dec;
use serde_json::json;
use sisrc_shared::types::{ExpenseId, Rbd, SchoolId};

use super::types::{
    Dependence, ExpenseCategory, ExpenseItem, ExpenseSource, ExpenseStatus, RecordStatus, Region,
    SchoolRecord, SubventionBreakdown,
};

fn sample_record() -> SchoolRecord {
    SchoolRecord {
        id: SchoolId::new("1"),
        name: "Colegio Santa María".to_string(),
        rbd: Rbd::new("12345-6"),
        region: Region::Metropolitana,
        dependence: Dependence::ParticularSubvencionado,
        status: RecordStatus::Open,
        progress: 40,
        total_grant: dec!(15_000_000),
        subventions: SubventionBreakdown {
            general: dec!(8_000_000),
            sep: dec!(4_000_000),
            pie: dec!(2_000_000),
            faep: dec!(500_000),
            others: dec!(500_000),
        },
        total_declared: dec!(6_200_000),
        risk_score: 85,
        last_update: "2025-11-14".to_string(),
        expenses: vec![ExpenseItem {
            id: ExpenseId::new("e1"),
            category: ExpenseCategory::Remunerations,
            source: ExpenseSource::LaborDirectorate,
            amount: dec!(4_500_000),
            description: "Sueldos Docentes Octubre".to_string(),
            justification: None,
            status: ExpenseStatus::Validated,
        }],
    }
}

#[test]
fn test_region_wire_names() {
    assert_eq!(
        serde_json::to_value(Region::Valparaiso).unwrap(),
        json!("Valparaíso")
    );
    assert_eq!(
        serde_json::to_value(Region::Biobio).unwrap(),
        json!("Biobío")
    );
    assert_eq!(
        serde_json::to_value(Region::OHiggins).unwrap(),
        json!("O'Higgins")
    );
    assert_eq!(
        serde_json::to_value(Region::Metropolitana).unwrap(),
        json!("Metropolitana")
    );
}

#[test]
fn test_region_from_str_round_trip() {
    let regions = [
        Region::AricaYParinacota,
        Region::Tarapaca,
        Region::Antofagasta,
        Region::Atacama,
        Region::Coquimbo,
        Region::Valparaiso,
        Region::Metropolitana,
        Region::OHiggins,
        Region::Maule,
        Region::Nuble,
        Region::Biobio,
        Region::Araucania,
        Region::LosRios,
        Region::LosLagos,
        Region::Aysen,
        Region::Magallanes,
    ];
    for region in regions {
        assert_eq!(Region::from_str(region.as_str()).unwrap(), region);
    }
    assert!(Region::from_str("Todas").is_err());
    assert!(Region::from_str("").is_err());
}

#[test]
fn test_dependence_wire_names() {
    assert_eq!(
        serde_json::to_value(Dependence::Slep).unwrap(),
        json!("SLEP")
    );
    assert_eq!(
        serde_json::to_value(Dependence::ParticularSubvencionado).unwrap(),
        json!("Particular Subvencionado")
    );
    assert_eq!(
        Dependence::from_str("Particular Subvencionado").unwrap(),
        Dependence::ParticularSubvencionado
    );
    assert!(Dependence::from_str("particular").is_err());
}

#[test]
fn test_record_status_wire_names() {
    assert_eq!(
        serde_json::to_value(RecordStatus::Open).unwrap(),
        json!("Abierto")
    );
    assert_eq!(
        serde_json::to_value(RecordStatus::Submitted).unwrap(),
        json!("Enviado")
    );
    assert_eq!(
        serde_json::to_value(RecordStatus::Flagged).unwrap(),
        json!("Observado")
    );
    assert_eq!(
        serde_json::to_value(RecordStatus::Approved).unwrap(),
        json!("Aprobado")
    );
}

#[test]
fn test_record_status_helpers() {
    assert!(RecordStatus::Submitted.is_closed());
    assert!(RecordStatus::Approved.is_closed());
    assert!(!RecordStatus::Open.is_closed());
    assert!(!RecordStatus::Flagged.is_closed());

    assert!(RecordStatus::Open.can_submit());
    assert!(RecordStatus::Flagged.can_submit());
    assert!(!RecordStatus::Submitted.can_submit());
    assert!(!RecordStatus::Approved.can_submit());
}

#[test]
fn test_expense_enums_wire_names() {
    assert_eq!(
        serde_json::to_value(ExpenseSource::LaborDirectorate).unwrap(),
        json!("DT (LRE)")
    );
    assert_eq!(
        serde_json::to_value(ExpenseSource::TaxAuthorityInvoice).unwrap(),
        json!("SII (DTE)")
    );
    assert_eq!(
        serde_json::to_value(ExpenseCategory::GoodsAndServices).unwrap(),
        json!("Bienes y Servicios")
    );
    assert_eq!(
        serde_json::to_value(ExpenseStatus::Validated).unwrap(),
        json!("Validated")
    );
}

#[test]
fn test_expense_source_is_preloaded() {
    assert!(ExpenseSource::LaborDirectorate.is_preloaded());
    assert!(ExpenseSource::TaxAuthorityInvoice.is_preloaded());
    assert!(!ExpenseSource::Manual.is_preloaded());
}

#[test]
fn test_record_serializes_camel_case() {
    let value = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(value["rbd"], json!("12345-6"));
    assert_eq!(value["region"], json!("Metropolitana"));
    assert_eq!(value["dependence"], json!("Particular Subvencionado"));
    assert_eq!(value["status"], json!("Abierto"));
    assert_eq!(value["totalGrant"], json!("15000000"));
    assert_eq!(value["totalDeclared"], json!("6200000"));
    assert_eq!(value["riskScore"], json!(85));
    assert_eq!(value["lastUpdate"], json!("2025-11-14"));
    assert_eq!(value["subventions"]["faep"], json!("500000"));
    assert_eq!(value["expenses"][0]["source"], json!("DT (LRE)"));
    // No justification yet, so the key is absent.
    assert!(value["expenses"][0].get("justification").is_none());
}

#[test]
fn test_record_deserializes_numeric_amounts() {
    let raw = json!({
        "id": "2",
        "name": "Liceo Bicentenario Valparaíso",
        "rbd": "9876-K",
        "region": "Valparaíso",
        "dependence": "Municipal",
        "status": "Enviado",
        "progress": 100,
        "totalGrant": 22_000_000,
        "subventions": {
            "general": 12_000_000,
            "sep": 6_000_000,
            "pie": 3_000_000,
            "faep": 1_000_000,
            "others": 0
        },
        "totalDeclared": 21_500_000,
        "riskScore": 12,
        "lastUpdate": "2025-11-12",
        "expenses": []
    });

    let record: SchoolRecord = serde_json::from_value(raw).unwrap();
    assert_eq!(record.region, Region::Valparaiso);
    assert_eq!(record.dependence, Dependence::Municipal);
    assert_eq!(record.status, RecordStatus::Submitted);
    assert_eq!(record.total_grant, dec!(22_000_000));
    assert_eq!(record.subventions.others, dec!(0));
    assert!(record.expenses.is_empty());
}

#[test]
fn test_subvention_breakdown_total() {
    let breakdown = SubventionBreakdown {
        general: dec!(8_000_000),
        sep: dec!(4_000_000),
        pie: dec!(2_000_000),
        faep: dec!(500_000),
        others: dec!(500_000),
    };
    assert_eq!(breakdown.total(), dec!(15_000_000));
    assert_eq!(SubventionBreakdown::default().total(), dec!(0));
}

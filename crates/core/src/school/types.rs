//! School record domain types.
//!
//! Records and their expenses are created by an external ingestion process
//! and mirror its wire format: camelCase keys and Spanish display values.
//! The only mutations in this system are wholesale record replacement and
//! set-once justification attachment; nothing here validates cross-field
//! consistency (subventions need not sum to the grant, declared totals may
//! exceed it), matching the upstream feeds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sisrc_shared::types::{ExpenseId, Rbd, SchoolId};

/// Chilean administrative region of an establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Arica y Parinacota.
    #[serde(rename = "Arica y Parinacota")]
    AricaYParinacota,
    /// Tarapacá.
    #[serde(rename = "Tarapacá")]
    Tarapaca,
    /// Antofagasta.
    Antofagasta,
    /// Atacama.
    Atacama,
    /// Coquimbo.
    Coquimbo,
    /// Valparaíso.
    #[serde(rename = "Valparaíso")]
    Valparaiso,
    /// Metropolitana de Santiago.
    Metropolitana,
    /// Libertador General Bernardo O'Higgins.
    #[serde(rename = "O'Higgins")]
    OHiggins,
    /// Maule.
    Maule,
    /// Ñuble.
    #[serde(rename = "Ñuble")]
    Nuble,
    /// Biobío.
    #[serde(rename = "Biobío")]
    Biobio,
    /// La Araucanía.
    #[serde(rename = "Araucanía")]
    Araucania,
    /// Los Ríos.
    #[serde(rename = "Los Ríos")]
    LosRios,
    /// Los Lagos.
    #[serde(rename = "Los Lagos")]
    LosLagos,
    /// Aysén del General Carlos Ibáñez del Campo.
    #[serde(rename = "Aysén")]
    Aysen,
    /// Magallanes y de la Antártica Chilena.
    Magallanes,
}

impl Region {
    /// Returns the region's display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AricaYParinacota => "Arica y Parinacota",
            Self::Tarapaca => "Tarapacá",
            Self::Antofagasta => "Antofagasta",
            Self::Atacama => "Atacama",
            Self::Coquimbo => "Coquimbo",
            Self::Valparaiso => "Valparaíso",
            Self::Metropolitana => "Metropolitana",
            Self::OHiggins => "O'Higgins",
            Self::Maule => "Maule",
            Self::Nuble => "Ñuble",
            Self::Biobio => "Biobío",
            Self::Araucania => "Araucanía",
            Self::LosRios => "Los Ríos",
            Self::LosLagos => "Los Lagos",
            Self::Aysen => "Aysén",
            Self::Magallanes => "Magallanes",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Arica y Parinacota" => Ok(Self::AricaYParinacota),
            "Tarapacá" => Ok(Self::Tarapaca),
            "Antofagasta" => Ok(Self::Antofagasta),
            "Atacama" => Ok(Self::Atacama),
            "Coquimbo" => Ok(Self::Coquimbo),
            "Valparaíso" => Ok(Self::Valparaiso),
            "Metropolitana" => Ok(Self::Metropolitana),
            "O'Higgins" => Ok(Self::OHiggins),
            "Maule" => Ok(Self::Maule),
            "Ñuble" => Ok(Self::Nuble),
            "Biobío" => Ok(Self::Biobio),
            "Araucanía" => Ok(Self::Araucania),
            "Los Ríos" => Ok(Self::LosRios),
            "Los Lagos" => Ok(Self::LosLagos),
            "Aysén" => Ok(Self::Aysen),
            "Magallanes" => Ok(Self::Magallanes),
            _ => Err(format!("Unknown region: {s}")),
        }
    }
}

/// Administrative dependence of an establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dependence {
    /// Municipal administration.
    Municipal,
    /// Servicio Local de Educación Pública.
    #[serde(rename = "SLEP")]
    Slep,
    /// Subsidized private administration.
    #[serde(rename = "Particular Subvencionado")]
    ParticularSubvencionado,
}

impl Dependence {
    /// Returns the dependence's display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Municipal => "Municipal",
            Self::Slep => "SLEP",
            Self::ParticularSubvencionado => "Particular Subvencionado",
        }
    }
}

impl std::fmt::Display for Dependence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dependence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Municipal" => Ok(Self::Municipal),
            "SLEP" => Ok(Self::Slep),
            "Particular Subvencionado" => Ok(Self::ParticularSubvencionado),
            _ => Err(format!("Unknown dependence: {s}")),
        }
    }
}

/// Lifecycle status of a rendición.
///
/// Records progress from Open through Submitted, may be Flagged with
/// observations, and end Approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// The reporting period is open; the holder is still loading expenses.
    #[serde(rename = "Abierto")]
    Open,
    /// The rendición has been handed in and awaits review.
    #[serde(rename = "Enviado")]
    Submitted,
    /// The review raised observations the holder must address.
    #[serde(rename = "Observado")]
    Flagged,
    /// The rendición has been accepted.
    #[serde(rename = "Aprobado")]
    Approved,
}

impl RecordStatus {
    /// Returns true if the rendición counts toward the closure rate.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Submitted | Self::Approved)
    }

    /// Returns true if the holder may submit the rendición.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Open | Self::Flagged)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Open => "Abierto",
            Self::Submitted => "Enviado",
            Self::Flagged => "Observado",
            Self::Approved => "Aprobado",
        };
        write!(f, "{label}")
    }
}

/// Spending category of an expense item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Staff remunerations.
    #[serde(rename = "Remuneraciones")]
    Remunerations,
    /// Goods and services.
    #[serde(rename = "Bienes y Servicios")]
    GoodsAndServices,
    /// Infrastructure works.
    #[serde(rename = "Infraestructura")]
    Infrastructure,
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Remunerations => "Remuneraciones",
            Self::GoodsAndServices => "Bienes y Servicios",
            Self::Infrastructure => "Infraestructura",
        };
        write!(f, "{label}")
    }
}

/// Upstream system an expense item was preloaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseSource {
    /// Labor directorate electronic payroll book.
    #[serde(rename = "DT (LRE)")]
    LaborDirectorate,
    /// Tax authority electronic invoices.
    #[serde(rename = "SII (DTE)")]
    TaxAuthorityInvoice,
    /// Entered by hand in the portal.
    Manual,
}

impl ExpenseSource {
    /// Returns true if the item was preloaded from an external feed.
    #[must_use]
    pub fn is_preloaded(&self) -> bool {
        !matches!(self, Self::Manual)
    }
}

/// Validation status of an expense item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    /// Cleared against the upstream feed.
    Validated,
    /// Awaiting validation.
    Pending,
    /// Rejected during validation.
    Rejected,
}

impl ExpenseStatus {
    /// Returns true if the item has been validated.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Validated)
    }
}

/// Per-program subvention amounts forming a school's funding universe.
///
/// The five amounts need not sum to the record's `total_grant`; the feeds
/// are independent and no equality is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubventionBreakdown {
    /// General subvention.
    pub general: Decimal,
    /// Preferential school subvention (SEP).
    pub sep: Decimal,
    /// School integration program (PIE).
    pub pie: Decimal,
    /// Education quality support fund (FAEP).
    pub faep: Decimal,
    /// Remaining minor programs.
    pub others: Decimal,
}

impl SubventionBreakdown {
    /// Sum of the five program amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.general + self.sep + self.pie + self.faep + self.others
    }
}

/// A single expense line within a rendición.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    /// Identifier, unique within the parent record.
    pub id: ExpenseId,
    /// Spending category.
    pub category: ExpenseCategory,
    /// Upstream system the item came from.
    pub source: ExpenseSource,
    /// Amount in Chilean pesos.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Advisory-generated justification, set once and immutable thereafter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    /// Validation status.
    pub status: ExpenseStatus,
}

/// One school's rendición record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    /// Identifier, unique across the collection.
    pub id: SchoolId,
    /// Establishment name.
    pub name: String,
    /// Official registry code.
    pub rbd: Rbd,
    /// Administrative region.
    pub region: Region,
    /// Administrative dependence.
    pub dependence: Dependence,
    /// Rendición lifecycle status.
    pub status: RecordStatus,
    /// Completion percentage, 0-100 by convention (advisory only).
    pub progress: u8,
    /// Total subvention received.
    pub total_grant: Decimal,
    /// Per-program funding universe.
    pub subventions: SubventionBreakdown,
    /// Total amount declared so far; may exceed the grant.
    pub total_declared: Decimal,
    /// Externally assigned risk indicator, 0-100 by convention.
    pub risk_score: u8,
    /// Date or freshness label of the last change.
    pub last_update: String,
    /// Expense lines in insertion order.
    pub expenses: Vec<ExpenseItem>,
}

//! School record domain model.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{
    Dependence, ExpenseCategory, ExpenseItem, ExpenseSource, ExpenseStatus, RecordStatus, Region,
    SchoolRecord, SubventionBreakdown,
};

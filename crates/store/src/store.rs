//! Thread-safe access to the school record collection.
//!
//! The store hands out cloned snapshots so callers never hold the lock
//! across await points. Lookups follow the repository convention of
//! returning `Option`; mutations require the record to exist.

use std::path::Path;
use std::sync::RwLock;

use sisrc_core::holder::{HolderError, HolderService, SubmissionReceipt};
use sisrc_core::school::SchoolRecord;
use sisrc_shared::types::{ExpenseId, SchoolId};
use thiserror::Error;

use crate::seed;

/// Errors raised by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matches the given school id.
    #[error("School {0} not found")]
    SchoolNotFound(String),

    /// A holder rule rejected the mutation.
    #[error(transparent)]
    Holder(#[from] HolderError),

    /// The collection lock was poisoned by a panicking writer.
    #[error("School collection lock poisoned")]
    LockPoisoned,

    /// The snapshot file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    SnapshotRead {
        /// Path of the snapshot file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The snapshot file does not hold a school record collection.
    #[error("Failed to parse snapshot {path}: {source}")]
    SnapshotParse {
        /// Path of the snapshot file.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::SchoolNotFound(_) => 404,
            Self::Holder(err) => err.status_code(),
            Self::LockPoisoned | Self::SnapshotRead { .. } | Self::SnapshotParse { .. } => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SchoolNotFound(_) => "SCHOOL_NOT_FOUND",
            Self::Holder(err) => err.error_code(),
            Self::LockPoisoned => "STORE_POISONED",
            Self::SnapshotRead { .. } => "SNAPSHOT_READ_FAILED",
            Self::SnapshotParse { .. } => "SNAPSHOT_PARSE_FAILED",
        }
    }
}

/// In-memory school record collection.
///
/// Built once at startup and shared across handlers; every read clones
/// the data out and every mutation replaces a whole record under the
/// write lock.
#[derive(Debug)]
pub struct SchoolStore {
    records: RwLock<Vec<SchoolRecord>>,
}

impl SchoolStore {
    /// Creates a store over the embedded demo seed.
    #[must_use]
    pub fn from_seed() -> Self {
        Self::from_records(seed::demo_records())
    }

    /// Creates a store over an explicit record collection.
    #[must_use]
    pub fn from_records(records: Vec<SchoolRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Creates a store from a JSON snapshot file.
    ///
    /// The snapshot holds a JSON array of school records in the ingestion
    /// wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_snapshot(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::SnapshotRead {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<SchoolRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::SnapshotParse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(
            count = records.len(),
            path = %path.display(),
            "Loaded school snapshot"
        );
        Ok(Self::from_records(records))
    }

    /// Returns all records in seed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection lock is poisoned.
    pub fn list(&self) -> Result<Vec<SchoolRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }

    /// Finds a record by school id.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection lock is poisoned.
    pub fn find(&self, id: &SchoolId) -> Result<Option<SchoolRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    /// Replaces the record matching the replacement's id.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has that id or the lock is poisoned.
    pub fn replace(&self, record: SchoolRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or_else(|| StoreError::SchoolNotFound(record.id.to_string()))?;
        *slot = record;
        Ok(())
    }

    /// Submits the rendición of the given school and persists the
    /// transitioned record.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is unknown, the rendición is not in
    /// a submittable status, or the lock is poisoned.
    pub fn submit(&self, id: &SchoolId) -> Result<SubmissionReceipt, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let slot = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| StoreError::SchoolNotFound(id.to_string()))?;

        let receipt = HolderService::submit(slot)?;
        *slot = receipt.record.clone();
        Ok(receipt)
    }

    /// Attaches the generated justification to one expense of the given
    /// school and persists the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the school or expense is unknown, the expense
    /// already carries a justification, or the lock is poisoned.
    pub fn attach_justification(
        &self,
        id: &SchoolId,
        expense_id: &ExpenseId,
    ) -> Result<SchoolRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let slot = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| StoreError::SchoolNotFound(id.to_string()))?;

        let updated = HolderService::attach_justification(slot, expense_id)?;
        *slot = updated.clone();
        Ok(updated)
    }
}

impl Default for SchoolStore {
    fn default() -> Self {
        Self::from_seed()
    }
}

//! Record filtering shared by the role views.

use serde::{Deserialize, Serialize};

use crate::school::{Dependence, Region};

/// Region criterion: one region or the national wildcard ("Todas").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionFilter {
    /// Matches every region.
    #[default]
    All,
    /// Matches one region exactly.
    Only(Region),
}

impl RegionFilter {
    /// Returns true if the given region passes this criterion.
    #[must_use]
    pub fn matches(&self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == region,
        }
    }
}

/// Filter over the school record collection.
///
/// Empty values act as wildcards. The text query matches the RBD as-is or
/// the establishment name case-insensitively, OR'd across the two fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Region criterion.
    pub region: RegionFilter,
    /// RBD or establishment-name substring.
    pub query: String,
    /// Dependence criterion; `None` matches any dependence.
    pub dependence: Option<Dependence>,
}

impl RecordFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to one region.
    #[must_use]
    pub fn in_region(mut self, region: Region) -> Self {
        self.region = RegionFilter::Only(region);
        self
    }

    /// Sets the RBD/name substring query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restricts the filter to one dependence.
    #[must_use]
    pub fn with_dependence(mut self, dependence: Dependence) -> Self {
        self.dependence = Some(dependence);
        self
    }

    /// Returns true if the filter matches everything.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.region == RegionFilter::All && self.query.is_empty() && self.dependence.is_none()
    }
}

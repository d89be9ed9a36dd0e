//! Candidate and normalized ranking records.

use crate::location::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};

/// A possibly incomplete record produced by one extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Parsed rank, `None` when the strategy found no rank token.
    pub rank: Option<u32>,
    /// University name as extracted.
    pub university: String,
    /// Location text before canonicalization.
    pub raw_location: Option<String>,
    /// Global score, or `"N/A"`.
    pub score: String,
    /// Enrollment digits, or `"N/A"`.
    pub enrollment: String,
}

impl CandidateRecord {
    /// A candidate with only rank and name; score and enrollment unknown.
    pub fn new(rank: Option<u32>, university: impl Into<String>) -> Self {
        Self {
            rank,
            university: university.into(),
            raw_location: None,
            score: NOT_AVAILABLE.to_string(),
            enrollment: NOT_AVAILABLE.to_string(),
        }
    }

    /// Set the raw location text.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.raw_location = location;
        self
    }
}

/// A validated output row.
///
/// Field names serialize as the table's column headers
/// (`Rank,University,Country,Score,Enrollment`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedRecord {
    /// Rank within `1..=max_rank`, unique in a table.
    pub rank: u32,
    /// Non-reserved university name, unique in a table.
    pub university: String,
    /// Canonical country, or `"N/A"`.
    pub country: String,
    /// Global score, or `"N/A"`.
    pub score: String,
    /// Enrollment digits, or `"N/A"`.
    pub enrollment: String,
}

impl NormalizedRecord {
    /// Whether the country is known.
    pub fn has_country(&self) -> bool {
        self.country != NOT_AVAILABLE
    }
}

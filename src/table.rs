//! The pipeline's output table.
//!
//! ```rust
//! use rankingrs::{extract_rankings, RawBlock};
//!
//! let blocks = RawBlock::sequence(["Harvard University\nBoston | United States\n#1"]);
//! let table = extract_rankings(blocks, None).unwrap();
//!
//! let summary = table.summary();
//! assert_eq!(summary.total, 1);
//! assert_eq!(summary.rank_range, Some((1, 1)));
//! ```

use crate::record::NormalizedRecord;
use crate::strategy::Strategy;
use serde::Serialize;
use std::collections::BTreeSet;

/// Ordered, validated records plus the strategy that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankingTable {
    /// Strategy whose candidates were kept; `None` when nothing was extracted.
    pub strategy: Option<Strategy>,
    /// Records sorted by ascending rank.
    pub records: Vec<NormalizedRecord>,
}

/// End-of-run report over a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Lowest and highest rank.
    pub rank_range: Option<(u32, u32)>,
    /// Distinct country values, `"N/A"` included.
    pub countries: usize,
    /// Records whose country is known.
    pub with_country: usize,
}

impl RankingTable {
    /// Whether no record survived validation.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate records in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }

    /// Take the records, dropping the strategy.
    pub fn into_records(self) -> Vec<NormalizedRecord> {
        self.records
    }

    /// Totals for the end-of-run report.
    pub fn summary(&self) -> Summary {
        let ranks = self.records.iter().map(|r| r.rank);
        let rank_range = ranks.clone().min().zip(ranks.max());
        let countries: BTreeSet<&str> = self.records.iter().map(|r| r.country.as_str()).collect();

        Summary {
            total: self.records.len(),
            rank_range,
            countries: countries.len(),
            with_country: self.records.iter().filter(|r| r.has_country()).count(),
        }
    }
}

impl<'a> IntoIterator for &'a RankingTable {
    type Item = &'a NormalizedRecord;
    type IntoIter = std::slice::Iter<'a, NormalizedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

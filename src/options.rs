//! Configuration options for ranking extraction.
//!
//! This module provides [`RankingOptions`] and [`RankingOptionsBuilder`]
//! for configuring the strategy chain and the validation stage.
//!
//! ## Example
//!
//! ```rust
//! use rankingrs::{Ranking, RankingOptions, RawBlock};
//!
//! let blocks = vec![RawBlock::new(0, "Harvard University\n#1")];
//!
//! // Using default options
//! let ranking = Ranking::new(blocks.clone(), None).unwrap();
//!
//! // Using builder for custom options
//! let options = RankingOptions::builder()
//!     .max_rank(500)
//!     .target_count(500)
//!     .max_entries(100)
//!     .build();
//!
//! let ranking = Ranking::new(blocks, Some(options)).unwrap();
//! ```

use crate::error::{RankingError, Result};

/// Default upper bound on accepted ranks.
pub const DEFAULT_MAX_RANK: u32 = 2500;

/// Configuration options for the ranking pipeline.
///
/// ## Creating Options
///
/// ```rust
/// use rankingrs::RankingOptions;
///
/// let defaults = RankingOptions::default();
/// assert_eq!(defaults.max_rank, 2500);
///
/// let options = RankingOptions::builder()
///     .max_rank(1000)
///     .target_count(1000)
///     .build();
/// assert_eq!(options.target_count, Some(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingOptions {
    /// Highest rank a record may carry.
    ///
    /// Records whose rank is zero or above this bound are dropped during
    /// validation. Must be positive.
    ///
    /// Default: `2500`
    pub max_rank: u32,

    /// Early-stop threshold for the strategy chain.
    ///
    /// Once the best candidate set holds at least this many records, the
    /// remaining strategies are not run.
    ///
    /// Default: `None` (run every strategy)
    pub target_count: Option<usize>,

    /// Cap on the size of the final table.
    ///
    /// Applied after sorting and deduplication, so the lowest ranks are kept.
    ///
    /// Default: `None` (no cap)
    pub max_entries: Option<usize>,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            max_rank: DEFAULT_MAX_RANK,
            target_count: None,
            max_entries: None,
        }
    }
}

impl RankingOptions {
    /// Creates a new builder for RankingOptions
    pub fn builder() -> RankingOptionsBuilder {
        RankingOptionsBuilder::default()
    }

    /// Check the options for values the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_rank == 0 {
            return Err(RankingError::InvalidOption(
                "max_rank must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`RankingOptions`].
#[derive(Default)]
pub struct RankingOptionsBuilder {
    max_rank: Option<u32>,
    target_count: Option<usize>,
    max_entries: Option<usize>,
}

impl RankingOptionsBuilder {
    /// Set the highest accepted rank
    pub fn max_rank(mut self, max_rank: u32) -> Self {
        self.max_rank = Some(max_rank);
        self
    }

    /// Set the strategy chain's early-stop threshold
    pub fn target_count(mut self, target: usize) -> Self {
        self.target_count = Some(target);
        self
    }

    /// Set the cap on the final table size
    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Build the RankingOptions
    pub fn build(self) -> RankingOptions {
        let defaults = RankingOptions::default();
        RankingOptions {
            max_rank: self.max_rank.unwrap_or(defaults.max_rank),
            target_count: self.target_count.or(defaults.target_count),
            max_entries: self.max_entries.or(defaults.max_entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_falls_back_to_defaults() {
        let options = RankingOptions::builder().max_entries(10).build();
        assert_eq!(options.max_rank, DEFAULT_MAX_RANK);
        assert_eq!(options.target_count, None);
        assert_eq!(options.max_entries, Some(10));
    }

    #[test]
    fn zero_max_rank_is_rejected() {
        let options = RankingOptions::builder().max_rank(0).build();
        assert!(matches!(
            options.validate(),
            Err(RankingError::InvalidOption(_))
        ));
    }
}

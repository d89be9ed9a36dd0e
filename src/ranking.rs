//! Main Ranking struct and pipeline implementation.
//!
//! This module contains [`Ranking`], which runs the whole extraction pipeline
//! over a block sequence: strategy chain, validation, ordering.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rankingrs::{Ranking, RankingOptions, RawBlock};
//!
//! let text = std::fs::read_to_string("usnews_rankings.txt")?;
//! let blocks = vec![RawBlock::new(0, text)];
//!
//! let options = RankingOptions::builder().max_rank(500).build();
//! let table = Ranking::new(blocks, Some(options))?.parse();
//!
//! for record in &table {
//!     println!("{} {} ({})", record.rank, record.university, record.country);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    aliases::AliasTable,
    block::RawBlock,
    chain::StrategyChain,
    error::{RankingError, Result},
    options::RankingOptions,
    table::RankingTable,
    validate::validate,
};
use tracing::{info, warn};

/// The ranking extraction pipeline.
///
/// ## Lifecycle
///
/// Construct with [`Ranking::new()`], which rejects an empty or blank block
/// sequence, then call [`parse()`](Ranking::parse). Parsing never fails: when
/// no strategy finds anything the returned table is empty, and the caller
/// decides whether that is an error.
///
/// ## Example
///
/// ```rust
/// use rankingrs::{Ranking, RawBlock};
///
/// let blocks = RawBlock::sequence([
///     "Harvard University",
///     "Massachusetts | United States",
///     "#1",
///     "in Best Global Universities",
///     "Global Score",
///     "99.1",
///     "Enrollment",
///     "21,000",
/// ]);
///
/// let table = Ranking::new(blocks, None)?.parse();
/// assert_eq!(table.records[0].university, "Harvard University");
/// assert_eq!(table.records[0].enrollment, "21000");
/// # Ok::<(), rankingrs::RankingError>(())
/// ```
pub struct Ranking {
    blocks: Vec<RawBlock>,
    options: RankingOptions,
    chain: StrategyChain,
    table: &'static AliasTable,
}

impl Ranking {
    /// Create a new pipeline over `blocks`.
    ///
    /// # Errors
    /// [`RankingError::NoSourceData`] when there are no blocks or all of them
    /// are blank; [`RankingError::InvalidOption`] when the options are unusable.
    pub fn new(blocks: Vec<RawBlock>, options: Option<RankingOptions>) -> Result<Self> {
        if blocks.iter().all(RawBlock::is_blank) {
            return Err(RankingError::NoSourceData);
        }

        let options = options.unwrap_or_default();
        options.validate()?;

        Ok(Self {
            blocks,
            options,
            chain: StrategyChain::default(),
            table: AliasTable::global(),
        })
    }

    /// Replace the strategy chain.
    pub fn with_chain(mut self, chain: StrategyChain) -> Self {
        self.chain = chain;
        self
    }

    /// Run the pipeline.
    pub fn parse(self) -> RankingTable {
        info!(blocks = self.blocks.len(), "starting ranking extraction");

        let outcome = self
            .chain
            .run(&self.blocks, self.table, self.options.target_count);
        let records = validate(outcome.candidates, &self.options);

        if records.is_empty() {
            warn!("no universities extracted, check the source format");
        } else {
            info!(records = records.len(), "extraction complete");
        }

        RankingTable {
            strategy: outcome.strategy,
            records,
        }
    }
}

/// Build a [`Ranking`] and parse it in one call.
pub fn extract_rankings(
    blocks: Vec<RawBlock>,
    options: Option<RankingOptions>,
) -> Result<RankingTable> {
    Ok(Ranking::new(blocks, options)?.parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            Ranking::new(Vec::new(), None),
            Err(RankingError::NoSourceData)
        ));
        assert!(matches!(
            Ranking::new(RawBlock::sequence(["", "  \n "]), None),
            Err(RankingError::NoSourceData)
        ));
    }

    #[test]
    fn nothing_extractable_is_an_empty_table() {
        let table = extract_rankings(RawBlock::sequence(["just some prose"]), None).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.strategy, None);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = RankingOptions::builder().max_rank(0).build();
        assert!(matches!(
            Ranking::new(RawBlock::sequence(["Harvard University\n#1"]), Some(options)),
            Err(RankingError::InvalidOption(_))
        ));
    }

    #[test]
    fn custom_chain_limits_strategies() {
        let blocks = RawBlock::sequence(["Harvard University\n#1"]);
        let table = Ranking::new(blocks, None)
            .unwrap()
            .with_chain(StrategyChain::new(vec![Strategy::LinkAnchor]))
            .parse();
        assert!(table.is_empty());
    }
}

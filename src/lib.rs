//! # rankingrs
//!
//! Turn noisy university-ranking page captures into a clean, validated,
//! rank-ordered table.
//!
//! ## Overview
//!
//! A page supplier (a browser session, a saved file, a text dump) hands the
//! crate an ordered sequence of [`RawBlock`]s. The pipeline then:
//!
//! - runs a chain of extraction strategies (structured list items, generic
//!   ranking items, link anchors, a line-by-line scan) and keeps the one that
//!   finds the most candidates;
//! - maps free-text locations to canonical country names;
//! - validates, deduplicates and sorts the candidates into [`NormalizedRecord`]s.
//!
//! The pipeline does no I/O and is deterministic: the same blocks always give
//! the same table.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rankingrs::{extract_rankings, RankingOptions, RawBlock};
//!
//! let text = "\
//! Harvard University
//! Massachusetts | United States
//! #1
//! in Best Global Universities
//! Global Score
//! 100.0
//! Enrollment
//! 21,000
//! ";
//!
//! let options = RankingOptions::builder().max_rank(500).build();
//! let table = extract_rankings(vec![RawBlock::new(0, text)], Some(options)).unwrap();
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.records[0].rank, 1);
//! assert_eq!(table.records[0].country, "Massachusetts");
//! ```
//!
//! ## Markup Input
//!
//! Blocks that contain HTML are parsed as fragments, which enables the
//! structural strategies:
//!
//! ```rust
//! use rankingrs::{extract_rankings, RawBlock, Strategy};
//!
//! let html = r#"
//! <ul>
//!   <li class="item-list__item">
//!     <h3><a href="/education/best-global-universities/oxford">University of Oxford</a></h3>
//!     <p>Oxford</p><span>#4</span>
//!   </li>
//! </ul>"#;
//!
//! let table = extract_rankings(vec![RawBlock::new(0, html)], None).unwrap();
//! assert_eq!(table.strategy, Some(Strategy::StructuredListItem));
//! assert_eq!(table.records[0].country, "United Kingdom");
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use rankingrs::{extract_rankings, RankingError};
//!
//! match extract_rankings(Vec::new(), None) {
//!     Err(RankingError::NoSourceData) => eprintln!("nothing to extract from"),
//!     Err(e) => eprintln!("Error: {}", e),
//!     Ok(table) if table.is_empty() => eprintln!("nothing extractable"),
//!     Ok(table) => println!("{} records", table.len()),
//! }
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`] events: per-record discards at `debug`, stage
//! totals at `info`, empty results at `warn`. Install any subscriber to see them.

mod aliases;
mod block;
mod chain;
mod error;
pub mod fields;
mod location;
mod options;
mod probe;
mod ranking;
mod record;
pub mod sink;
mod strategy;
mod table;
mod validate;

// Public exports
pub use aliases::AliasTable;
pub use block::RawBlock;
pub use chain::{ChainOutcome, StrategyChain};
pub use error::{RankingError, Result};
pub use location::{canonicalize, canonicalize_with, clean_location, is_likely_location, NOT_AVAILABLE};
pub use options::{RankingOptions, RankingOptionsBuilder, DEFAULT_MAX_RANK};
pub use probe::{count_ranking_entries, is_probably_ranking, ProbeOptions};
pub use ranking::{extract_rankings, Ranking};
pub use record::{CandidateRecord, NormalizedRecord};
pub use strategy::Strategy;
pub use table::{RankingTable, Summary};
pub use validate::validate;

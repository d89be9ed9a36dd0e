//! Quick entry count without running the pipeline.
//!
//! This module provides [`count_ranking_entries`] and [`is_probably_ranking`],
//! which a page supplier can call between "load more" rounds to see how many
//! ranking entries are on the page so far.
//!
//! ```rust
//! use rankingrs::{count_ranking_entries, is_probably_ranking};
//!
//! let html = r#"<ul><li class="item-list">One</li><li class="item-list">Two</li></ul>"#;
//! assert_eq!(count_ranking_entries(html, None), 2);
//! assert!(is_probably_ranking(html, None));
//! ```

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ITEM_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["li[class*='item-list']", "[data-testid='ranking-item']", ".RankingItem"]
        .iter()
        .map(|s| Selector::parse(s).expect("valid item selector"))
        .collect()
});

static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a[href*='/education/best-global-universities/']")
        .expect("valid link selector")
});

/// Options for the entry probe.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Also count ranking links. Links often inflate the count, since one
    /// entry may carry several.
    ///
    /// Default: `true`
    pub count_links: bool,

    /// Minimum entry count for [`is_probably_ranking`].
    ///
    /// Default: `1`
    pub min_entries: usize,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            count_links: true,
            min_entries: 1,
        }
    }
}

/// Largest match count over the known entry selectors.
pub fn count_ranking_entries(html: &str, options: Option<ProbeOptions>) -> usize {
    let options = options.unwrap_or_default();
    let document = Html::parse_document(html);

    let items = ITEM_SELECTORS
        .iter()
        .map(|selector| document.select(selector).count())
        .max()
        .unwrap_or(0);

    if options.count_links {
        items.max(document.select(&LINK_SELECTOR).count())
    } else {
        items
    }
}

/// Whether a page holds at least `min_entries` ranking entries.
pub fn is_probably_ranking(html: &str, options: Option<ProbeOptions>) -> bool {
    let options = options.unwrap_or_default();
    let min_entries = options.min_entries;
    count_ranking_entries(html, Some(options)) >= min_entries
}

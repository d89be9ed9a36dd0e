//! Extraction strategies.
//!
//! Each variant of [`Strategy`] turns the full block sequence into candidate
//! records on its own. The chain in [`crate::chain`] decides which result set
//! to keep.

use crate::aliases::AliasTable;
use crate::block::{element_lines, element_text, RawBlock};
use crate::fields::{
    clean_enrollment, find_rank, first_name, is_link_name, is_score_value, parse_rank_line,
    RankToken,
};
use crate::location::{canonicalize_with, is_likely_location, NOT_AVAILABLE};
use crate::record::CandidateRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

static LIST_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li[class*='item-list']").expect("valid list item selector"));
static RANKING_ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "[data-testid='ranking-item'], .RankingItem, .ranking-item, div[class*='ranking-item']",
    )
    .expect("valid ranking item selector")
});
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid anchor selector"));
static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2, h3, h4").expect("valid heading selector"));

/// Lines that open with one of these are page chrome, never a name.
const NON_NAME_PREFIXES: [&str; 20] = [
    "#",
    "Global Score",
    "Enrollment",
    "http",
    "Hi there",
    "Read More",
    "in Best Global Universities",
    "BEST COLLEGES",
    "Savor Seoul",
    "EDUCATION",
    "Home /",
    "2024-2025 Best",
    "These institutions",
    "To unlock",
    "Summary",
    "POWERED BY",
    "Canada China",
    "Load More",
    "Copyright",
    "Advertisement",
];

const BEST_GLOBAL_LABEL: &str = "in Best Global Universities";
const SCORE_LABEL: &str = "Global Score";
const ENROLLMENT_LABEL: &str = "Enrollment";

static BARE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").expect("valid word regex"));
static DATE_STAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}\b").expect("valid date regex"));

/// The closed set of extraction strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// `li` elements whose class marks them as ranking list items.
    StructuredListItem,
    /// Looser containers (`.ranking-item`, `data-testid`), tried only when
    /// the list items yield nothing.
    GenericRankingItem,
    /// One candidate per link, ranked from its enclosing container.
    LinkAnchor,
    /// A forward-only walk over the visible text lines.
    SequentialLineScan,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::StructuredListItem,
        Strategy::GenericRankingItem,
        Strategy::LinkAnchor,
        Strategy::SequentialLineScan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::StructuredListItem => "structured-list-item",
            Strategy::GenericRankingItem => "generic-ranking-item",
            Strategy::LinkAnchor => "link-anchor",
            Strategy::SequentialLineScan => "sequential-line-scan",
        }
    }

    /// The strategy whose non-empty yield makes this one unnecessary.
    pub fn fallback_for(self) -> Option<Strategy> {
        match self {
            Strategy::GenericRankingItem => Some(Strategy::StructuredListItem),
            _ => None,
        }
    }

    /// Run this strategy over every block.
    pub fn extract(self, blocks: &[RawBlock], table: &AliasTable) -> Vec<CandidateRecord> {
        match self {
            Strategy::StructuredListItem => {
                extract_items(blocks, &LIST_ITEM_SELECTOR, NameSource::AnchorFirst, table)
            }
            Strategy::GenericRankingItem => {
                extract_items(blocks, &RANKING_ITEM_SELECTOR, NameSource::HeadingFirst, table)
            }
            Strategy::LinkAnchor => extract_links(blocks, table),
            Strategy::SequentialLineScan => {
                let lines: Vec<String> = blocks.iter().flat_map(RawBlock::lines).collect();
                scan_lines(&lines)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy)]
enum NameSource {
    AnchorFirst,
    HeadingFirst,
}

fn texts_of(element: ElementRef, selector: &Selector) -> Vec<String> {
    element
        .select(selector)
        .map(|el| element_lines(el).join(" "))
        .collect()
}

fn item_name(item: ElementRef, source: NameSource) -> Option<String> {
    let (primary, secondary) = match source {
        NameSource::AnchorFirst => (&*ANCHOR_SELECTOR, &*HEADING_SELECTOR),
        NameSource::HeadingFirst => (&*HEADING_SELECTOR, &*ANCHOR_SELECTOR),
    };
    first_name(texts_of(item, primary)).or_else(|| first_name(texts_of(item, secondary)))
}

/// First line of an item that reads as a location and canonicalizes to
/// something known or at least non-trivial.
fn item_location(lines: &[String], name: &str, table: &AliasTable) -> Option<String> {
    let name_lower = name.to_lowercase();
    lines.iter().find_map(|line| {
        let lower = line.to_lowercase();
        if lower.contains(&name_lower)
            || line.starts_with('#')
            || lower.contains("score")
            || lower.contains("enrollment")
            || lower.contains("read more")
            || !is_likely_location(line)
        {
            return None;
        }
        let country = canonicalize_with(table, line);
        (country != NOT_AVAILABLE).then_some(country)
    })
}

fn extract_items(
    blocks: &[RawBlock],
    selector: &Selector,
    source: NameSource,
    table: &AliasTable,
) -> Vec<CandidateRecord> {
    let mut candidates = Vec::new();
    let mut position: u32 = 0;

    for block in blocks.iter().filter(|b| b.is_markup()) {
        let fragment = block.fragment();
        for item in fragment.select(selector) {
            position += 1;

            let Some(name) = item_name(item, source) else {
                debug!(block = block.index, position, "item without a usable name");
                continue;
            };

            let text = element_text(item);
            let Some(rank) = find_rank(&text).or_fallback(position) else {
                debug!(block = block.index, %name, "malformed rank in item");
                continue;
            };

            let location = item_location(&element_lines(item), &name, table);
            candidates.push(CandidateRecord::new(Some(rank), name).with_location(location));
        }
    }

    candidates
}

fn nearest_container(element: ElementRef) -> Option<ElementRef> {
    element.ancestors().filter_map(ElementRef::wrap).find(|el| {
        let value = el.value();
        value.name() == "li"
            || (value.name() == "div"
                && value
                    .attr("class")
                    .is_some_and(|class| class.contains("ranking-item")))
    })
}

fn extract_links(blocks: &[RawBlock], table: &AliasTable) -> Vec<CandidateRecord> {
    let mut candidates = Vec::new();
    let mut accepted: HashSet<String> = HashSet::new();
    let mut position: u32 = 0;

    for block in blocks.iter().filter(|b| b.is_markup()) {
        let fragment = block.fragment();
        for link in fragment.select(&ANCHOR_SELECTOR) {
            position += 1;

            let name = element_lines(link).join(" ");
            if accepted.contains(&name) || !is_link_name(&name) {
                continue;
            }

            let Some(container) = nearest_container(link) else {
                continue;
            };
            let text = element_text(container);
            if !text.contains('#') {
                debug!(%name, "discarding link: container has no rank marker");
                continue;
            }

            let Some(rank) = find_rank(&text).or_fallback(position) else {
                debug!(%name, "discarding link: malformed rank");
                continue;
            };

            let location = item_location(&element_lines(container), &name, table);
            candidates.push(CandidateRecord::new(Some(rank), name.clone()).with_location(location));
            accepted.insert(name);
        }
    }

    candidates
}

/// Whether a line can open a new entry in the line scan.
fn is_name_line(line: &str) -> bool {
    !NON_NAME_PREFIXES.iter().any(|p| line.starts_with(p))
        && !DATE_STAMP.is_match(line)
        && !BARE_WORD.is_match(line)
        && !line.contains('|')
}

/// States of the line scan after a name line has been taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekCountry,
    SeekRank,
    SeekBestGlobalLabel,
    SeekScoreLabel,
    SeekScoreValue,
    SeekEnrollmentLabel,
    SeekEnrollmentValue,
    Done,
}

enum Transition {
    /// Move to the next state, consuming the current line or not.
    Advance { next: ScanState, consumed: bool },
    /// Drop the entry after consuming the current line.
    Abort,
}

#[derive(Debug)]
struct PartialEntry {
    university: String,
    country: Option<String>,
    rank: Option<u32>,
    score: Option<String>,
    enrollment: Option<String>,
}

impl PartialEntry {
    fn new(university: &str) -> Self {
        Self {
            university: university.to_string(),
            country: None,
            rank: None,
            score: None,
            enrollment: None,
        }
    }

    fn into_candidate(self) -> Option<CandidateRecord> {
        let rank = self.rank?;
        let mut candidate = CandidateRecord::new(Some(rank), self.university);
        candidate.raw_location = self.country;
        if let Some(score) = self.score {
            candidate.score = score;
        }
        if let Some(enrollment) = self.enrollment {
            candidate.enrollment = enrollment;
        }
        Some(candidate)
    }
}

fn step(state: ScanState, line: &str, entry: &mut PartialEntry) -> Transition {
    use ScanState::*;

    let advance = |next, consumed| Transition::Advance { next, consumed };
    match state {
        SeekCountry => match line.split_once('|') {
            Some((country, _)) => {
                entry.country = Some(country.trim().to_string());
                advance(SeekRank, true)
            }
            None => advance(SeekRank, false),
        },
        SeekRank => match parse_rank_line(line) {
            RankToken::Found(rank) => {
                entry.rank = Some(rank);
                advance(SeekBestGlobalLabel, true)
            }
            RankToken::Malformed => Transition::Abort,
            RankToken::Missing => advance(SeekBestGlobalLabel, false),
        },
        SeekBestGlobalLabel => advance(SeekScoreLabel, line.contains(BEST_GLOBAL_LABEL)),
        SeekScoreLabel if line == SCORE_LABEL => advance(SeekScoreValue, true),
        SeekScoreLabel => advance(SeekEnrollmentLabel, false),
        SeekScoreValue if is_score_value(line) => {
            entry.score = Some(line.to_string());
            advance(SeekEnrollmentLabel, true)
        }
        SeekScoreValue => advance(SeekEnrollmentLabel, false),
        SeekEnrollmentLabel if line == ENROLLMENT_LABEL => advance(SeekEnrollmentValue, true),
        SeekEnrollmentLabel => advance(Done, false),
        SeekEnrollmentValue => {
            entry.enrollment = Some(clean_enrollment(line));
            advance(Done, true)
        }
        Done => advance(Done, false),
    }
}

/// Walk pre-split, non-empty lines and emit one candidate per complete entry.
pub(crate) fn scan_lines(lines: &[String]) -> Vec<CandidateRecord> {
    let mut candidates = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].as_str();
        cursor += 1;
        if !is_name_line(line) {
            continue;
        }

        let mut entry = PartialEntry::new(line);
        let mut state = ScanState::SeekCountry;
        let mut aborted = false;

        while state != ScanState::Done {
            let Some(line) = lines.get(cursor) else {
                break;
            };
            match step(state, line, &mut entry) {
                Transition::Advance { next, consumed } => {
                    if consumed {
                        cursor += 1;
                    }
                    state = next;
                }
                Transition::Abort => {
                    debug!(line = cursor, rank = %line, "invalid rank format");
                    cursor += 1;
                    aborted = true;
                    break;
                }
            }
        }

        if aborted {
            continue;
        }
        let university = entry.university.clone();
        match entry.into_candidate() {
            Some(candidate) => candidates.push(candidate),
            None => debug!(line = cursor, %university, "skipping incomplete entry"),
        }
    }

    candidates
}

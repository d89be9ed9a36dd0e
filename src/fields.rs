//! Field parsers shared by the extraction strategies.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names that are navigation chrome rather than institutions.
pub const RESERVED_NAMES: [&str; 4] = ["read more", "view more", "details", "unknown university"];

/// Words that mark a link's text as site navigation.
const GENERIC_LINK_KEYWORDS: [&str; 5] = ["rankings", "methodology", "education", "news", "view"];

static TIE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*\(\s*tie\s*\)").expect("valid tie regex"));
static RANK_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\s*(\d+)").expect("valid rank regex"));
static RANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*(\d+)").expect("valid rank regex"));
static SCORE_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+$").expect("valid score regex"));

/// Outcome of looking for a `#<digits>` rank token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankToken {
    Found(u32),
    /// No rank token; the caller may substitute a positional rank.
    Missing,
    /// A rank token is present but does not parse.
    Malformed,
}

impl RankToken {
    /// Resolve to a rank, substituting `fallback` when no token was present.
    pub fn or_fallback(self, fallback: u32) -> Option<u32> {
        match self {
            RankToken::Found(rank) => Some(rank),
            RankToken::Missing => Some(fallback),
            RankToken::Malformed => None,
        }
    }
}

fn strip_tie(text: &str) -> std::borrow::Cow<'_, str> {
    TIE_MARKER.replace_all(text, "")
}

fn parse_digits(digits: &str) -> RankToken {
    digits
        .parse::<u32>()
        .map(RankToken::Found)
        .unwrap_or(RankToken::Malformed)
}

/// Find the first rank token anywhere in a block of text.
///
/// ```rust
/// use rankingrs::fields::{find_rank, RankToken};
///
/// assert_eq!(find_rank("Harvard\n#1 (tie) in Best Global"), RankToken::Found(1));
/// assert_eq!(find_rank("no marker here"), RankToken::Missing);
/// ```
pub fn find_rank(text: &str) -> RankToken {
    let stripped = strip_tie(text);
    match RANK_TOKEN.captures(&stripped) {
        Some(caps) => parse_digits(&caps[1]),
        None => RankToken::Missing,
    }
}

/// Parse a line that is expected to start with a rank token.
///
/// A `#` line without digits right after the marker is malformed rather than
/// missing.
pub fn parse_rank_line(line: &str) -> RankToken {
    let stripped = strip_tie(line);
    let stripped = stripped.trim();
    if !stripped.starts_with('#') {
        return RankToken::Missing;
    }
    match RANK_LINE.captures(stripped) {
        Some(caps) => parse_digits(&caps[1]),
        None => RankToken::Malformed,
    }
}

/// Whether a name is one of the reserved non-names.
pub fn is_reserved_name(name: &str) -> bool {
    let lower = name.trim().to_lowercase();
    RESERVED_NAMES.contains(&lower.as_str())
}

/// Whether an anchor or heading text is usable as an institution name.
pub fn is_name_like(text: &str) -> bool {
    let text = text.trim();
    text.chars().count() > 3
        && !is_reserved_name(text)
        && !text.chars().all(|c| c.is_ascii_digit())
}

/// Stricter name rule for bare links, which also carry site navigation.
pub fn is_link_name(text: &str) -> bool {
    if !is_name_like(text) {
        return false;
    }
    let lower = text.to_lowercase();
    !GENERIC_LINK_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Pick the first candidate text that passes [`is_name_like`].
pub fn first_name<I, S>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .map(|c| c.as_ref().trim().to_string())
        .find(|c| is_name_like(c))
}

/// Whether a line is a decimal score value such as `99.1`.
pub fn is_score_value(line: &str) -> bool {
    SCORE_VALUE.is_match(line.trim())
}

/// Normalize an enrollment value by dropping thousands separators.
pub fn clean_enrollment(line: &str) -> String {
    line.trim().replace(',', "")
}

//! Location classification and country canonicalization.
//!
//! ```rust
//! use rankingrs::{canonicalize, is_likely_location};
//!
//! assert!(is_likely_location("Tokyo"));
//! assert_eq!(canonicalize("Tokyo"), "Japan");
//! assert_eq!(canonicalize("Cambridge (U.K.)"), "United Kingdom");
//! ```

use crate::aliases::{AliasTable, LOCATION_INDICATORS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker for a field whose value is unknown.
pub const NOT_AVAILABLE: &str = "N/A";

static SKIP_PATTERNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\d+$|global score|enrollment|founded|read more|^#\d+|best global|universities",
    )
    .expect("valid skip regex")
});

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical regex"));
static DASH_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*-.*$").expect("valid dash clause regex"));
static LEADING_NON_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{L}]+").expect("valid leading regex"));

/// Whether a text line plausibly names a location.
pub fn is_likely_location(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || SKIP_PATTERNS.is_match(text) {
        return false;
    }

    if LOCATION_INDICATORS.is_match(text) {
        return true;
    }

    text.split_whitespace().count() <= 3
        && text.chars().next().is_some_and(char::is_uppercase)
        && !text.chars().any(|c| c.is_ascii_digit())
}

/// Strip parenthetical groups, a trailing dash clause and leading non-letters,
/// then collapse whitespace. Case is preserved.
///
/// Whitespace is collapsed before the dash clause is cut so that a clause
/// spanning line breaks is removed in one pass.
pub fn clean_location(text: &str) -> String {
    let without_parens = PARENTHETICAL.replace_all(text, " ");
    let flat = collapse_whitespace(&without_parens);
    let without_dash = DASH_CLAUSE.replace(&flat, "");
    let trimmed = LEADING_NON_LETTERS.replace(without_dash.trim(), "");
    collapse_whitespace(&trimmed)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a free-text location to a canonical country using the global table.
pub fn canonicalize(text: &str) -> String {
    canonicalize_with(AliasTable::global(), text)
}

/// Map a free-text location to a canonical country, a cleaned fallback, or
/// [`NOT_AVAILABLE`]. Never panics and is idempotent on its own output.
pub fn canonicalize_with(table: &AliasTable, text: &str) -> String {
    let raw_key = text.trim().to_lowercase();
    if raw_key.is_empty() || raw_key == "n/a" {
        return NOT_AVAILABLE.to_string();
    }
    if let Some(country) = table.lookup(&raw_key) {
        return country.to_string();
    }

    let cleaned = clean_location(text);
    let key = cleaned.to_lowercase();
    if key == "n/a" {
        return NOT_AVAILABLE.to_string();
    }

    let resolved = table
        .lookup(&key)
        .or_else(|| table.match_pattern(&key))
        .or_else(|| table.match_country_name(&key));
    if let Some(country) = resolved {
        return country.to_string();
    }

    if cleaned.chars().count() > 2 {
        title_case(&cleaned)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // Only take the uppercase form when it is a single char that lowercases
    // back to the same thing, so the lookup key stays stable across passes.
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(u), None) if u.to_lowercase().eq(first.to_lowercase()) => u,
        _ => first,
    };

    let mut out = String::with_capacity(word.len());
    out.push(head);
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_examples() {
        assert_eq!(canonicalize("Cambridge (U.K.)"), "United Kingdom");
        assert_eq!(canonicalize("Cambridge (U.S.)"), "United States");
        assert_eq!(canonicalize("Tokyo"), "Japan");
        assert_eq!(canonicalize("Unknown Town"), "Unknown Town");
    }

    #[test]
    fn patterns_and_country_names() {
        assert_eq!(canonicalize("Boston, USA"), "United States");
        assert_eq!(canonicalize("Edinburgh, Scotland"), "United Kingdom");
        assert_eq!(canonicalize("Republic of Korea"), "South Korea");
        assert_eq!(canonicalize("Lyon, France"), "France");
        assert_eq!(canonicalize("  Zurich - main campus"), "Switzerland");
    }

    #[test]
    fn fallback_is_cleaned_and_title_cased() {
        assert_eq!(canonicalize("  st. gallen (hsg)"), "St. Gallen");
        assert_eq!(canonicalize("12 porto alegre"), "Porto Alegre");
        assert_eq!(canonicalize("ab"), NOT_AVAILABLE);
        assert_eq!(canonicalize(""), NOT_AVAILABLE);
        assert_eq!(canonicalize("(only parens)"), NOT_AVAILABLE);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let inputs = [
            "Cambridge (U.K.)",
            "Tokyo",
            "Unknown Town",
            "N/A",
            "(x) n/a",
            "12 porto alegre",
            "ıstanbul",
            "straße",
            "Hong Kong SAR",
            "Taiwan",
            "--",
            "#42",
            "Massachusetts",
            "foo\nx - y\nz",
            "Lyon\r\n- Rhône\n(France)",
        ];
        for input in inputs {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn canonical_countries_map_to_themselves() {
        for country in AliasTable::global().countries() {
            assert_eq!(canonicalize(country), *country);
        }
    }

    #[test]
    fn likely_location_rules() {
        assert!(is_likely_location("Paris"));
        assert!(is_likely_location("Cambridge, Massachusetts, United States"));
        assert!(is_likely_location("New South Wales"));
        assert!(!is_likely_location("Global Score 99.1"));
        assert!(!is_likely_location("#12"));
        assert!(!is_likely_location("2024"));
        assert!(!is_likely_location("in Best Global Universities"));
        assert!(!is_likely_location("lowercase place"));
        assert!(!is_likely_location("Founded 1636"));
        assert!(!is_likely_location("A very long phrase that is not a place"));
    }
}

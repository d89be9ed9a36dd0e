//! Static location alias data.
//!
//! The table is built once per process and handed out as `&'static AliasTable`.
//! Nothing mutates it after construction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Lowercase location → canonical country. Order matters: the canonical
/// country list used for containment matching follows first appearance here.
const DIRECT_ENTRIES: &[(&str, &str)] = &[
    ("cambridge (u.s.)", "United States"),
    ("cambridge", "United States"),
    ("stanford", "United States"),
    ("new haven", "United States"),
    ("princeton", "United States"),
    ("berkeley", "United States"),
    ("los angeles", "United States"),
    ("ann arbor", "United States"),
    ("seattle", "United States"),
    ("philadelphia", "United States"),
    ("chicago", "United States"),
    ("boston", "United States"),
    ("new york", "United States"),
    ("baltimore", "United States"),
    ("atlanta", "United States"),
    ("durham", "United States"),
    ("ithaca", "United States"),
    ("pasadena", "United States"),
    ("oxford", "United Kingdom"),
    ("cambridge (u.k.)", "United Kingdom"),
    ("london", "United Kingdom"),
    ("edinburgh", "United Kingdom"),
    ("glasgow", "United Kingdom"),
    ("manchester", "United Kingdom"),
    ("toronto", "Canada"),
    ("vancouver", "Canada"),
    ("montreal", "Canada"),
    ("sydney", "Australia"),
    ("melbourne", "Australia"),
    ("canberra", "Australia"),
    ("brisbane", "Australia"),
    ("zurich", "Switzerland"),
    ("lausanne", "Switzerland"),
    ("geneva", "Switzerland"),
    ("beijing", "China"),
    ("shanghai", "China"),
    ("hangzhou", "China"),
    ("hong kong", "Hong Kong"),
    ("singapore", "Singapore"),
    ("tokyo", "Japan"),
    ("kyoto", "Japan"),
    ("osaka", "Japan"),
    ("munich", "Germany"),
    ("berlin", "Germany"),
    ("heidelberg", "Germany"),
    ("paris", "France"),
    ("stockholm", "Sweden"),
    ("copenhagen", "Denmark"),
    ("oslo", "Norway"),
    ("helsinki", "Finland"),
    ("amsterdam", "Netherlands"),
    ("utrecht", "Netherlands"),
    ("leiden", "Netherlands"),
    ("milan", "Italy"),
    ("rome", "Italy"),
    ("madrid", "Spain"),
    ("barcelona", "Spain"),
    ("vienna", "Austria"),
    ("brussels", "Belgium"),
    ("leuven", "Belgium"),
    ("tel aviv", "Israel"),
    ("jerusalem", "Israel"),
    ("seoul", "South Korea"),
    ("taipei", "Taiwan"),
    ("mumbai", "India"),
    ("delhi", "India"),
    ("bangalore", "India"),
    ("são paulo", "Brazil"),
    ("sao paulo", "Brazil"),
    ("rio de janeiro", "Brazil"),
    ("mexico city", "Mexico"),
];

/// Substring rules consulted when the direct lookup misses, in order.
const PATTERN_RULES: &[(&str, &[&str])] = &[
    ("United States", &["u.s.", "usa", "america", "states"]),
    (
        "United Kingdom",
        &["u.k.", "uk", "britain", "england", "scotland", "wales"],
    ),
    ("China", &["prc", "mainland china"]),
    ("South Korea", &["korea", "republic of korea"]),
    ("Taiwan", &["republic of china", "roc"]),
    ("Hong Kong", &["hk", "hong kong sar"]),
];

static GLOBAL: Lazy<AliasTable> = Lazy::new(AliasTable::builtin);

/// Country and city tokens that mark a line as a location.
pub(crate) static LOCATION_INDICATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bu\.s\.|\bu\.k\.|\b(?:united states|united kingdom|canada|australia|germany|france|china|japan|india|brazil|italy|spain|netherlands|sweden|switzerland|belgium|austria|denmark|norway|finland|singapore|hong kong|south korea|taiwan|israel|mexico)\b|\b(?:cambridge|oxford|london|paris|tokyo|beijing|sydney|toronto|munich|zurich|stockholm|amsterdam|copenhagen|vienna|brussels|madrid|barcelona|milan|rome)\b",
    )
    .expect("valid location indicator regex")
});

/// Read-only mapping from location strings to canonical country names.
#[derive(Debug)]
pub struct AliasTable {
    direct: HashMap<&'static str, &'static str>,
    countries: Vec<&'static str>,
    patterns: &'static [(&'static str, &'static [&'static str])],
}

impl AliasTable {
    /// The process-wide table.
    pub fn global() -> &'static AliasTable {
        &GLOBAL
    }

    fn builtin() -> Self {
        let mut countries: Vec<&'static str> = Vec::new();
        for (_, country) in DIRECT_ENTRIES {
            if !countries.contains(country) {
                countries.push(*country);
            }
        }

        Self {
            direct: DIRECT_ENTRIES.iter().copied().collect(),
            countries,
            patterns: PATTERN_RULES,
        }
    }

    /// Exact lookup of an already lowercased, trimmed key.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.direct.get(key).copied()
    }

    /// First pattern rule with a pattern contained in `key`.
    pub fn match_pattern(&self, key: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| key.contains(p)))
            .map(|(country, _)| *country)
    }

    /// First canonical country whose lowercase name is contained in `key`.
    pub fn match_country_name(&self, key: &str) -> Option<&'static str> {
        self.countries
            .iter()
            .find(|country| key.contains(&country.to_lowercase()))
            .copied()
    }

    /// Canonical country names, in table order.
    pub fn countries(&self) -> &[&'static str] {
        &self.countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_list_is_deduplicated_in_order() {
        let table = AliasTable::global();
        assert_eq!(table.countries()[0], "United States");
        assert_eq!(table.countries()[1], "United Kingdom");
        let mut sorted = table.countries().to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), table.countries().len());
    }

    #[test]
    fn pattern_rules_apply_in_order() {
        let table = AliasTable::global();
        assert_eq!(table.match_pattern("usa"), Some("United States"));
        assert_eq!(table.match_pattern("republic of korea"), Some("South Korea"));
        assert_eq!(table.match_pattern("atlantis"), None);
    }

    #[test]
    fn indicators_match_on_word_boundaries() {
        assert!(LOCATION_INDICATORS.is_match("Paris, France"));
        assert!(LOCATION_INDICATORS.is_match("Cambridge (U.S.)"));
        assert!(!LOCATION_INDICATORS.is_match("Parisian Institute"));
    }
}

//! Validation, deduplication and ordering of candidate records.
//!
//! Order of operations:
//!
//! 1. trim the name and drop empty, short (< 3 chars) or reserved names;
//! 2. drop ranks outside `1..=max_rank`;
//! 3. normalize country, score and enrollment (blank becomes `"N/A"`);
//! 4. stable sort by rank;
//! 5. keep the first record at each rank;
//! 6. keep the first record for each name, in rank order;
//! 7. truncate to `max_entries`.
//!
//! Rank collisions are resolved before name collisions. For the input
//! `[{5, A}, {5, B}, {3, A}]` this yields `[{3, A}]`: `B` loses rank 5 to the
//! earlier `A`, and that `A` then loses to the better ranked `A` at 3.

use crate::fields::is_reserved_name;
use crate::location::NOT_AVAILABLE;
use crate::options::RankingOptions;
use crate::record::{CandidateRecord, NormalizedRecord};
use std::collections::HashSet;
use tracing::{debug, info};

fn or_not_available(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn normalize(candidate: CandidateRecord, max_rank: u32) -> Option<NormalizedRecord> {
    let university = candidate.university.trim();
    if university.chars().count() < 3 || is_reserved_name(university) {
        debug!(?candidate, "discarding entry: invalid name");
        return None;
    }

    let rank = match candidate.rank {
        Some(rank) if (1..=max_rank).contains(&rank) => rank,
        _ => {
            debug!(?candidate, "discarding entry: missing or out-of-range rank");
            return None;
        }
    };

    Some(NormalizedRecord {
        rank,
        university: university.to_string(),
        country: or_not_available(candidate.raw_location.as_deref().unwrap_or_default()),
        score: or_not_available(&candidate.score),
        enrollment: or_not_available(&candidate.enrollment),
    })
}

/// Clean candidates into the final ordered, collision-free sequence.
pub fn validate(candidates: Vec<CandidateRecord>, options: &RankingOptions) -> Vec<NormalizedRecord> {
    let total = candidates.len();

    let mut records: Vec<NormalizedRecord> = candidates
        .into_iter()
        .filter_map(|candidate| normalize(candidate, options.max_rank))
        .collect();
    records.sort_by_key(|record| record.rank);

    let mut last_rank = None;
    records.retain(|record| {
        let fresh = last_rank != Some(record.rank);
        if !fresh {
            debug!(rank = record.rank, university = %record.university, "discarding entry: duplicate rank");
        }
        last_rank = Some(record.rank);
        fresh
    });

    let mut seen_names: HashSet<String> = HashSet::new();
    records.retain(|record| {
        let fresh = seen_names.insert(record.university.clone());
        if !fresh {
            debug!(rank = record.rank, university = %record.university, "discarding entry: duplicate name");
        }
        fresh
    });

    if let Some(cap) = options.max_entries {
        if records.len() > cap {
            info!(from = records.len(), to = cap, "applying max_entries limit");
            records.truncate(cap);
        }
    }

    let discarded = total.saturating_sub(records.len());
    if discarded > 0 {
        info!(discarded, kept = records.len(), "discarded entries during cleaning");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(rank: Option<u32>, name: &str) -> CandidateRecord {
        CandidateRecord::new(rank, name)
    }

    fn summary(records: &[NormalizedRecord]) -> Vec<(u32, &str)> {
        records
            .iter()
            .map(|r| (r.rank, r.university.as_str()))
            .collect()
    }

    #[test]
    fn rank_collisions_resolve_before_name_collisions() {
        let input = vec![
            candidate(Some(5), "Alpha University"),
            candidate(Some(5), "Beta University"),
            candidate(Some(3), "Alpha University"),
        ];
        let out = validate(input, &RankingOptions::default());
        assert_eq!(summary(&out), vec![(3, "Alpha University")]);
    }

    #[test]
    fn invalid_names_and_ranks_are_dropped() {
        let input = vec![
            candidate(Some(1), "  "),
            candidate(Some(2), "AB"),
            candidate(Some(3), "Read More"),
            candidate(Some(4), "Unknown University"),
            candidate(None, "No Rank College"),
            candidate(Some(0), "Zero Rank College"),
            candidate(Some(2501), "Too Far College"),
            candidate(Some(7), "  Padded University  "),
        ];
        let out = validate(input, &RankingOptions::default());
        assert_eq!(summary(&out), vec![(7, "Padded University")]);
    }

    #[test]
    fn blank_fields_become_sentinel() {
        let mut c = candidate(Some(1), "Harvard University").with_location(Some("  ".into()));
        c.score = String::new();
        let out = validate(vec![c], &RankingOptions::default());
        assert_eq!(out[0].country, NOT_AVAILABLE);
        assert_eq!(out[0].score, NOT_AVAILABLE);
        assert_eq!(out[0].enrollment, NOT_AVAILABLE);
    }

    #[test]
    fn output_is_sorted_and_capped() {
        let input = vec![
            candidate(Some(9), "Ninth University"),
            candidate(Some(2), "Second University"),
            candidate(Some(4), "Fourth University"),
        ];
        let options = RankingOptions::builder().max_entries(2).build();
        let out = validate(input, &options);
        assert_eq!(
            summary(&out),
            vec![(2, "Second University"), (4, "Fourth University")]
        );
    }

    #[test]
    fn names_compare_case_sensitively() {
        let input = vec![
            candidate(Some(1), "Kyoto University"),
            candidate(Some(2), "KYOTO UNIVERSITY"),
        ];
        let out = validate(input, &RankingOptions::default());
        assert_eq!(out.len(), 2);
    }
}

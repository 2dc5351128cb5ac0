//! Hidden-gem scoring and ranking.
//!
//! A "hidden gem" is a place that looks underrated in the map data: barely
//! named, lightly referenced, yet rich in descriptive tags. The score is a
//! deterministic sum of three independent signals, so two passes over the
//! same table always rank identically.

use itertools::Itertools;

use crate::Error;
use crate::model::{AmenityRecord, ScoredAmenity};

/// Names shorter than this (in non-space characters) count as missing.
const SHORT_NAME_LEN: usize = 5;

/// Hidden-gem score for one record.
///
/// Sub-scores:
/// - +1 when the name is missing, blank, or shorter than
///   [`SHORT_NAME_LEN`] non-space characters;
/// - +1 for up to 5 tags, +2 for 6 to 10, +3 for 11 or more;
/// - +1 when neither a `wikipedia` nor a `wikidata` tag key is present.
pub fn score(record: &AmenityRecord) -> u32 {
    let mut score = 0;

    let name_len = record
        .name
        .as_deref()
        .unwrap_or("")
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();
    if name_len < SHORT_NAME_LEN {
        score += 1;
    }

    score += match record.tags.len() {
        0..=5 => 1,
        6..=10 => 2,
        _ => 3,
    };

    if !record.tags.contains_key("wikipedia") && !record.tags.contains_key("wikidata") {
        score += 1;
    }

    score
}

/// Scores every record and returns the top `n` by descending score.
///
/// The sort is stable: records with equal scores keep their original
/// relative order. `n == 0` yields an empty result.
pub fn rank_top_n(records: &[AmenityRecord], n: usize) -> Vec<ScoredAmenity> {
    if n == 0 {
        return Vec::new();
    }
    records
        .iter()
        .map(|record| ScoredAmenity {
            score: score(record),
            record: record.clone(),
        })
        .sorted_by(|a, b| b.score.cmp(&a.score))
        .take(n)
        .collect()
}

/// Ranks the full input, then keeps the top `n` of one category.
///
/// Category matching is case-insensitive and ignores surrounding
/// whitespace.
///
/// # Errors
///
/// Returns [`Error::CategoryNotFound`] when no record has the requested
/// category at all; an `Ok` empty result means the category exists but `n`
/// truncated it away.
pub fn rank_top_n_by_category(
    records: &[AmenityRecord],
    category: &str,
    n: usize,
) -> Result<Vec<ScoredAmenity>, Error> {
    let wanted = category.trim().to_lowercase();
    let matches: Vec<ScoredAmenity> = rank_top_n(records, records.len())
        .into_iter()
        .filter(|scored| scored.record.category.trim().to_lowercase() == wanted)
        .collect();

    if matches.is_empty() {
        return Err(Error::CategoryNotFound(category.trim().to_string()));
    }

    Ok(matches.into_iter().take(n).collect())
}

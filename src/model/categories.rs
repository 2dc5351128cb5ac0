//! Category vocabularies from the amenity taxonomy.

use itertools::Itertools;

use super::AmenityRecord;

/// Categories counted as food places by the proximity filter presets.
pub const FOOD_CATEGORIES: &[&str] = &[
    "cafe",
    "restaurant",
    "fast_food",
    "bar",
    "pub",
    "internet_cafe",
    "food_court",
    "ice_cream",
    "biergarten",
];

/// Sightseeing-worthy categories used to pre-filter tour candidates.
pub const INTERESTING_CATEGORIES: &[&str] = &[
    "museum",
    "theatre",
    "arts_centre",
    "cinema",
    "library",
    "public_bookcase",
    "monastery",
    "courthouse",
    "townhall",
    "bar",
    "pub",
    "nightclub",
    "casino",
    "biergarten",
    "playground",
    "marketplace",
    "park",
    "fountain",
    "Observation Platform",
    "ferry_terminal",
    "seaplane terminal",
    "university",
    "college",
    "hospital",
    "fire_station",
    "police",
];

pub fn is_food_category(category: &str) -> bool {
    FOOD_CATEGORIES.contains(&category)
}

/// Keeps only records whose category is in [`INTERESTING_CATEGORIES`].
pub fn filter_interesting(records: &[AmenityRecord]) -> Vec<AmenityRecord> {
    records
        .iter()
        .filter(|record| INTERESTING_CATEGORIES.contains(&record.category.as_str()))
        .cloned()
        .collect()
}

/// Sorted, deduplicated list of every category present in the input.
pub fn unique_categories(records: &[AmenityRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.category.clone())
        .sorted()
        .dedup()
        .collect()
}

use crate::models::budget::SuggestedBudget;

/// Fallback when the destination is unknown.
const DEFAULT_RANGE: SuggestedBudget = SuggestedBudget {
    min: 2000,
    max: 8000,
    average: 4500,
};

/// Daily budget ranges per destination, keyed by normalized city/region name.
/// Amounts are per person per day.
const DESTINATION_RANGES: &[(&str, SuggestedBudget)] = &[
    ("goa", SuggestedBudget { min: 2500, max: 9000, average: 5000 }),
    ("manali", SuggestedBudget { min: 1800, max: 6500, average: 3500 }),
    ("jaipur", SuggestedBudget { min: 2000, max: 7000, average: 4000 }),
    ("udaipur", SuggestedBudget { min: 2200, max: 7500, average: 4200 }),
    ("kerala", SuggestedBudget { min: 2500, max: 8500, average: 4800 }),
    ("ladakh", SuggestedBudget { min: 3000, max: 10000, average: 6000 }),
    ("rishikesh", SuggestedBudget { min: 1500, max: 5500, average: 3000 }),
    ("darjeeling", SuggestedBudget { min: 1800, max: 6000, average: 3200 }),
    ("andaman", SuggestedBudget { min: 4000, max: 12000, average: 7000 }),
    ("bali", SuggestedBudget { min: 4500, max: 15000, average: 8000 }),
    ("dubai", SuggestedBudget { min: 8000, max: 25000, average: 14000 }),
    ("thailand", SuggestedBudget { min: 4000, max: 13000, average: 7500 }),
    ("singapore", SuggestedBudget { min: 9000, max: 28000, average: 16000 }),
    ("paris", SuggestedBudget { min: 12000, max: 35000, average: 20000 }),
];

fn normalize(destination: &str) -> String {
    destination
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

/// Suggests a daily budget range for a free-text destination.
///
/// The text before the first comma is normalized and matched against the
/// static table with containment in either direction ("north goa" matches
/// "goa", and "goa" matches a hypothetical longer key). When several keys
/// match, the longest key wins so overlapping entries resolve the same way
/// regardless of table order. Unknown destinations get the default range.
pub fn suggest_budget(destination: &str) -> SuggestedBudget {
    let needle = normalize(destination);
    if needle.is_empty() {
        return DEFAULT_RANGE;
    }

    DESTINATION_RANGES
        .iter()
        .filter(|(key, _)| needle.contains(key) || key.contains(needle.as_str()))
        .max_by_key(|(key, _)| key.len())
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_RANGE)
}

use chrono::NaiveDate;

/// Inclusive day count for a trip. Returns 0 when either endpoint is missing
/// or when the end precedes the start (the date picker upstream should make
/// that impossible, but the math stays total either way). Identical start and
/// end dates count as a 1-day trip.
pub fn trip_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => {
            let diff = (end - start).num_days();
            if diff < 0 {
                0
            } else {
                diff + 1
            }
        }
        _ => 0,
    }
}

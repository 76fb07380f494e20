use chrono::NaiveDate;

use super::types::RatingValue;
use crate::domain::RatingPoint;

/// Rating in effect on `target`: the latest checkpoint dated on or before it.
///
/// Points may arrive unsorted and may share a date. Among points sharing the
/// latest qualifying date, the one encountered last wins.
pub fn resolve_as_of(history: &[RatingPoint], target: NaiveDate) -> Option<RatingValue> {
    find_latest_point(history, target).map(|point| point.rating)
}

fn find_latest_point(history: &[RatingPoint], target: NaiveDate) -> Option<&RatingPoint> {
    // `max_by_key` returns the last of equally maximal elements.
    history
        .iter()
        .filter(|point| point.date <= target)
        .max_by_key(|point| point.date)
}

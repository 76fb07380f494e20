use chrono::{Days, NaiveDate};

use super::resolver::resolve_as_of;
use super::types::{DateSeries, RatingValue};
use crate::domain::RatingPoint;

/// `days` consecutive dates ending with `today`, oldest first
pub fn date_series(days: u32, today: NaiveDate) -> DateSeries {
    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .collect()
}

/// Walk `dates` oldest to newest, carrying the last known rating forward.
///
/// Each date gets, in order of preference: the as-of rating from `history`,
/// the last rating emitted, or `fallback`. `None` means none of them exist yet.
pub fn forward_fill<'a>(
    history: &'a [RatingPoint],
    fallback: Option<RatingValue>,
    dates: &'a [NaiveDate],
) -> impl Iterator<Item = (NaiveDate, Option<RatingValue>)> + 'a {
    dates.iter().scan(None, move |last_known, &date| {
        let rating = resolve_as_of(history, date).or(*last_known).or(fallback);
        if rating.is_some() {
            *last_known = rating;
        }
        Some((date, rating))
    })
}

use chrono::{Local, NaiveDate};

use super::series::{date_series, forward_fill};
use super::types::{RatingSeries, RatingValue};
use crate::domain::RatingPoint;

/// Day-by-day ratings for the last `days` days, ending today (local time)
pub fn tabulate(
    history: &[RatingPoint],
    fallback_current_rating: Option<RatingValue>,
    days: u32,
) -> RatingSeries {
    tabulate_until(history, fallback_current_rating, days, today())
}

/// Day-by-day ratings for the `days` days ending with `today`.
///
/// Days before the first known rating are omitted rather than zero-filled,
/// so the result can be shorter than `days`.
pub fn tabulate_until(
    history: &[RatingPoint],
    fallback_current_rating: Option<RatingValue>,
    days: u32,
    today: NaiveDate,
) -> RatingSeries {
    let dates = date_series(days, today);
    forward_fill(history, fallback_current_rating, &dates)
        .filter_map(|(date, rating)| rating.map(|rating| (date, rating)))
        .collect()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

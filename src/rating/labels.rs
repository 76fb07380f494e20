use chrono::NaiveDate;

use super::types::DatedRating;

/// Date format of CSV headers
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format of JSON rating maps, e.g. `Jan 08`
pub const SHORT_DATE_FORMAT: &str = "%b %d";

pub fn iso_label(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn short_label(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

/// Pair each rating with its short label, keeping series order
pub fn short_labeled(series: &[DatedRating]) -> Vec<(String, i32)> {
    series
        .iter()
        .map(|&(date, rating)| (short_label(date), rating))
        .collect()
}

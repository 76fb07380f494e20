use chrono::NaiveDate;

pub type RatingValue = i32;

/// A rating observed (or filled) on a given day
pub type DatedRating = (NaiveDate, RatingValue);

/// Day-by-day ratings, oldest first
pub type RatingSeries = Vec<DatedRating>;

/// Consecutive calendar days, oldest first
pub type DateSeries = Vec<NaiveDate>;

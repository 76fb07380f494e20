pub mod labels;
pub mod resolver;
pub mod series;
pub mod table;
pub mod tabulator;
pub mod types;

pub use labels::{iso_label, short_label, short_labeled};
pub use resolver::resolve_as_of;
pub use series::{date_series, forward_fill};
pub use table::{TableEntry, build_table, build_table_until};
pub use tabulator::{tabulate, tabulate_until, today};
pub use types::{DateSeries, DatedRating, RatingSeries, RatingValue};

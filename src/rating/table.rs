use chrono::NaiveDate;

use super::labels::iso_label;
use super::series::{date_series, forward_fill};
use super::tabulator::today;
use crate::domain::{CurrentPerformance, PerfType, PerformanceHistory, RatingRow, RatingTable};

/// Everything needed to render one player's row
#[derive(Debug, Clone)]
pub struct TableEntry {
    pub username: String,
    pub history: PerformanceHistory,
    pub current: Option<CurrentPerformance>,
}

impl TableEntry {
    pub fn new(
        username: impl Into<String>,
        history: PerformanceHistory,
        current: Option<CurrentPerformance>,
    ) -> Self {
        Self {
            username: username.into(),
            history,
            current,
        }
    }
}

/// Build a rectangular table of ratings for the last `days` days.
pub fn build_table(entries: &[TableEntry], perf: PerfType, days: u32) -> RatingTable {
    build_table_until(entries, perf, days, today())
}

/// Every row holds exactly one cell per header date; cells with no
/// rating yet are blank.
pub fn build_table_until(
    entries: &[TableEntry],
    perf: PerfType,
    days: u32,
    today: NaiveDate,
) -> RatingTable {
    let dates = date_series(days, today);
    let header = dates.iter().copied().map(iso_label).collect();
    let rows = entries
        .iter()
        .map(|entry| build_row(entry, perf, &dates))
        .collect();

    RatingTable { header, rows }
}

fn build_row(entry: &TableEntry, perf: PerfType, dates: &[NaiveDate]) -> RatingRow {
    let history = entry.history.for_perf(perf);
    let fallback = entry.current.as_ref().and_then(|current| current.rating);

    let values = forward_fill(history, fallback, dates)
        .map(|(_, rating)| format_cell(rating))
        .collect();

    RatingRow {
        username: entry.username.clone(),
        values,
    }
}

fn format_cell(rating: Option<i32>) -> String {
    rating.map(|rating| rating.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RatingPoint;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn history_with(perf: PerfType, points: Vec<RatingPoint>) -> PerformanceHistory {
        let mut history = PerformanceHistory::new();
        history.insert(perf.history_label(), points);
        history
    }

    fn current(rating: Option<i32>) -> Option<CurrentPerformance> {
        Some(CurrentPerformance {
            rating,
            ..Default::default()
        })
    }

    #[test]
    fn test_header_uses_iso_dates() {
        let table = build_table_until(&[], PerfType::Classical, 3, date(2024, 1, 1));

        assert_eq!(table.header, vec!["2023-12-30", "2023-12-31", "2024-01-01"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_rows_are_blank_filled() {
        let entries = vec![TableEntry::new("nobody", PerformanceHistory::new(), None)];

        let table = build_table_until(&entries, PerfType::Blitz, 2, date(2024, 1, 10));

        assert_eq!(table.rows[0].username, "nobody");
        assert_eq!(table.rows[0].values, vec!["", ""]);
    }

    #[test]
    fn test_mixed_histories_keep_table_rectangular() {
        let entries = vec![
            TableEntry::new(
                "early",
                history_with(PerfType::Rapid, vec![RatingPoint::new(date(2024, 1, 1), 2500)]),
                None,
            ),
            TableEntry::new(
                "late",
                history_with(PerfType::Rapid, vec![RatingPoint::new(date(2024, 1, 9), 2400)]),
                None,
            ),
            TableEntry::new("fallback", PerformanceHistory::new(), current(Some(2300))),
            TableEntry::new("empty", PerformanceHistory::new(), current(None)),
        ];

        let table = build_table_until(&entries, PerfType::Rapid, 3, date(2024, 1, 10));

        assert!(table.rows.iter().all(|row| row.values.len() == table.header.len()));
        let usernames: Vec<_> = table.rows.iter().map(|row| row.username.as_str()).collect();
        assert_eq!(usernames, vec!["early", "late", "fallback", "empty"]);
        assert_eq!(table.rows[0].values, vec!["2500", "2500", "2500"]);
        assert_eq!(table.rows[1].values, vec!["", "2400", "2400"]);
        assert_eq!(table.rows[2].values, vec!["2300", "2300", "2300"]);
        assert_eq!(table.rows[3].values, vec!["", "", ""]);
    }

    #[test]
    fn test_only_requested_category_is_used() {
        let entries = vec![TableEntry::new(
            "blitzer",
            history_with(PerfType::Blitz, vec![RatingPoint::new(date(2024, 1, 1), 2900)]),
            None,
        )];

        let table = build_table_until(&entries, PerfType::Classical, 2, date(2024, 1, 10));

        assert_eq!(table.rows[0].values, vec!["", ""]);
    }
}

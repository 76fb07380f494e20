use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use log::info;

use crate::domain::{PerfType, RatingTable};

const USERNAME_COLUMN: &str = "username";

/// `top_{count}_{type}_ratings_{days}days.csv`
pub fn default_filename(perf: PerfType, count: u32, days: u32) -> String {
    format!("top_{}_{}_ratings_{}days.csv", count, perf.as_key(), days)
}

/// Render a table as CSV: a `username,<dates...>` header, then one line per row
pub fn render_csv(table: &RatingTable) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(std::iter::once(USERNAME_COLUMN).chain(table.header.iter().map(String::as_str)))
        .context("Failed to write CSV header")?;

    for row in &table.rows {
        writer
            .write_record(std::iter::once(row.username.as_str()).chain(row.values.iter().map(String::as_str)))
            .with_context(|| format!("Failed to write CSV row for {}", row.username))?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Save a table as a CSV file
pub fn write_csv<P: AsRef<Path>>(table: &RatingTable, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_csv(table)?)
        .with_context(|| format!("Failed to write CSV file {}", path.display()))?;

    info!("CSV file '{}' has been created successfully!", path.display());
    Ok(())
}

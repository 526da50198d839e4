//! Event extraction - turns a flattened sheet into validated [`Event`]s.
//!
//! This is the only place that looks at raw cell strings. Everything past it
//! works on typed events.

use std::collections::HashMap;

use crate::error::{Result, TimelineError};
use crate::parser::SheetTable;
use crate::types::Event;

/// Header label of the title column.
pub const TITLE_COLUMN: &str = "Name";
/// Header label of the start year column.
pub const START_YEAR_COLUMN: &str = "year";
/// Header label of the optional end year column.
pub const END_YEAR_COLUMN: &str = "endYear";

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    pub title: usize,
    pub start_year: usize,
    pub end_year: Option<usize>,
}

impl HeaderColumns {
    /// Resolve column positions from a header row.
    ///
    /// Labels are trimmed and matched case-sensitively; empty labels are
    /// ignored. When a label repeats, the right-most column wins.
    pub fn from_header(header: &[String]) -> Result<Self> {
        let positions: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.trim(), idx))
            .filter(|(label, _)| !label.is_empty())
            .collect();

        match (
            positions.get(TITLE_COLUMN),
            positions.get(START_YEAR_COLUMN),
        ) {
            (Some(&title), Some(&start_year)) => Ok(Self {
                title,
                start_year,
                end_year: positions.get(END_YEAR_COLUMN).copied(),
            }),
            _ => Err(TimelineError::Schema(format!(
                "expected \"{TITLE_COLUMN}\" and \"{START_YEAR_COLUMN}\" columns in the header row"
            ))),
        }
    }
}

/// Extract events from a sheet, preserving row order.
///
/// The first row is the header. Data rows with a blank title or an
/// unparseable start year are skipped. A missing or unparseable end year
/// makes the row a point event.
///
/// # Errors
/// Returns [`TimelineError::Schema`] when the header lacks the title or
/// start year column. An empty sheet yields no events and no error.
pub fn extract_events(table: &SheetTable) -> Result<Vec<Event>> {
    let Some((header, data_rows)) = table.rows.split_first() else {
        return Ok(Vec::new());
    };
    let columns = HeaderColumns::from_header(header)?;

    let mut events = Vec::with_capacity(data_rows.len());
    for (offset, row) in data_rows.iter().enumerate() {
        match event_from_row(row, columns) {
            Some(event) => events.push(event),
            // Header is sheet row 1, so data starts at 2
            None => tracing::debug!(row = offset + 2, "skipping incomplete row"),
        }
    }

    tracing::debug!(
        sheet = %table.name,
        events = events.len(),
        skipped = data_rows.len() - events.len(),
        "extracted events"
    );
    Ok(events)
}

fn event_from_row(row: &[String], columns: HeaderColumns) -> Option<Event> {
    let title = row.get(columns.title)?.trim();
    if title.is_empty() {
        return None;
    }

    let start_year = parse_year(row.get(columns.start_year).map(String::as_str))?;
    let end_year = columns
        .end_year
        .and_then(|idx| parse_year(row.get(idx).map(String::as_str)))
        .unwrap_or(start_year);

    Some(Event::new(title, start_year, end_year))
}

/// Parse a year cell, rounding to the nearest integer (ties to even).
///
/// Returns `None` for blank, non-numeric, non-finite or out-of-range input.
pub fn parse_year(cell: Option<&str>) -> Option<i64> {
    let text = cell?.trim();
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    f64_to_i64_rounded(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn f64_to_i64_rounded(v: f64) -> Option<i64> {
    let rounded = v.round_ties_even();
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

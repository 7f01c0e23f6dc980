//! Month and day-of-week filtering.

use chrono::Weekday;
use tracing::debug;

use crate::table::{Table, TripRecord};

/// Month names covered by the source data, in calendar order. The data
/// spans January through June only.
pub const MONTHS: &[&str] = &["january", "february", "march", "april", "may", "june"];

/// Converts a full month name (case-insensitive) to its 1-based number.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// Converts a full weekday name (case-insensitive) to a [`Weekday`].
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// The full English name for a weekday, for display and reports.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A month and/or day-of-week constraint. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub month: Option<u32>,
    pub day: Option<Weekday>,
}

impl FilterSpec {
    /// Builds a spec from the validated lowercase tokens the prompt layer
    /// produces (`all` or a full month/weekday name). Returns `None` only
    /// for tokens the prompt layer should never let through.
    pub fn from_tokens(month: &str, day: &str) -> Option<FilterSpec> {
        let month = match month {
            "all" => None,
            name => Some(month_number(name)?),
        };
        let day = match day {
            "all" => None,
            name => Some(weekday_from_name(name)?),
        };
        Some(FilterSpec { month, day })
    }

    /// True when the record satisfies both constraints.
    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month.is_none_or(|m| record.month == m)
            && self.day.is_none_or(|d| record.weekday == d)
    }
}

/// Applies a filter, returning a new table with only the matching rows.
///
/// Row order is preserved and the schema flags carry through. An empty
/// result is a valid table, not an error; the statistics routines report
/// the empty case themselves.
pub fn apply(table: &Table, spec: &FilterSpec) -> Table {
    let rows: Vec<TripRecord> = table
        .rows
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();

    debug!(
        before = table.len(),
        after = rows.len(),
        month = ?spec.month,
        day = ?spec.day,
        "Filter applied"
    );

    Table {
        rows,
        has_gender: table.has_gender,
        has_birth_year: table.has_birth_year,
    }
}

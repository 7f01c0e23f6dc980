//! Descriptive statistics over a filtered trip table.
//!
//! Four independent routines, each a pure function of the table: travel
//! times, station popularity, trip durations, and user demographics.
//! Derived values (start hour, route label) are computed on the fly rather
//! than written back into the table.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{ExplorerError, Result};
use crate::table::Table;

/// Most frequent month, weekday, and start hour.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TimeReport {
    pub popular_month: u32,
    /// Full weekday name, e.g. "Wednesday".
    pub popular_day: String,
    pub popular_hour: u32,
}

/// Most used start station, end station, and route.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationReport {
    pub popular_start: String,
    pub popular_end: String,
    pub popular_route: String,
}

/// Total and mean trip duration in seconds.
#[derive(Debug, Serialize, PartialEq)]
pub struct DurationReport {
    pub total_secs: f64,
    pub mean_secs: f64,
}

/// Earliest, most recent, and most common birth year.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// User demographics. The optional fields are populated only when the
/// table's schema carries the corresponding column.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserReport {
    /// Distinct user types with their counts, most frequent first.
    pub user_types: Vec<(String, usize)>,
    pub gender: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// The most frequent value in `values`, ties broken by the first
/// occurrence in row order.
fn mode<T: Eq + Hash + Clone>(values: &[T], statistic: &'static str) -> Result<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let best = *counts
        .values()
        .max()
        .ok_or(ExplorerError::EmptyTable { statistic })?;

    // scan in row order so the first value reaching the top count wins
    Ok(values
        .iter()
        .find(|v| counts[*v] == best)
        .cloned()
        .expect("non-empty values have a mode"))
}

/// Distinct values with their counts, sorted by count descending; ties
/// keep first-occurrence order.
fn value_counts<I: IntoIterator<Item = String>>(values: I) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(k, _)| *k == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Statistics on the most frequent times of travel.
pub fn time_stats(table: &Table) -> Result<TimeReport> {
    let months: Vec<u32> = table.rows.iter().map(|r| r.month).collect();
    let days: Vec<chrono::Weekday> = table.rows.iter().map(|r| r.weekday).collect();
    let hours: Vec<u32> = table.rows.iter().map(|r| r.hour()).collect();

    Ok(TimeReport {
        popular_month: mode(&months, "popular month")?,
        popular_day: crate::filter::weekday_name(mode(&days, "popular day")?).to_string(),
        popular_hour: mode(&hours, "popular hour")?,
    })
}

/// Statistics on the most popular stations and route.
pub fn station_stats(table: &Table) -> Result<StationReport> {
    let starts: Vec<&str> = table.rows.iter().map(|r| r.start_station.as_str()).collect();
    let ends: Vec<&str> = table.rows.iter().map(|r| r.end_station.as_str()).collect();
    let routes: Vec<String> = table.rows.iter().map(|r| r.route()).collect();

    Ok(StationReport {
        popular_start: mode(&starts, "popular start station")?.to_string(),
        popular_end: mode(&ends, "popular end station")?.to_string(),
        popular_route: mode(&routes, "popular route")?,
    })
}

/// Total and mean travel time over the remaining rows.
pub fn duration_stats(table: &Table) -> Result<DurationReport> {
    if table.is_empty() {
        return Err(ExplorerError::EmptyTable {
            statistic: "mean duration",
        });
    }
    let total: f64 = table.rows.iter().map(|r| r.duration_secs).sum();

    Ok(DurationReport {
        total_secs: total,
        mean_secs: total / table.len() as f64,
    })
}

/// User type counts, plus gender counts and birth-year extremes when the
/// schema has those columns.
pub fn user_stats(table: &Table) -> Result<UserReport> {
    if table.is_empty() {
        return Err(ExplorerError::EmptyTable {
            statistic: "user types",
        });
    }

    let user_types = value_counts(table.rows.iter().map(|r| r.user_type.clone()));

    let gender = table
        .has_gender
        .then(|| value_counts(table.rows.iter().filter_map(|r| r.gender.clone())));

    let birth_years = if table.has_birth_year {
        let years: Vec<i32> = table.rows.iter().filter_map(|r| r.birth_year).collect();
        // the column can be entirely blank for the filtered rows
        match (years.iter().min(), years.iter().max()) {
            (Some(&earliest), Some(&latest)) => Some(BirthYearStats {
                earliest,
                latest,
                most_common: mode(&years, "common birth year")?,
            }),
            _ => None,
        }
    } else {
        None
    };

    Ok(UserReport {
        user_types,
        gender,
        birth_years,
    })
}

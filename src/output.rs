//! Console rendering of statistics reports.
//!
//! Each renderer returns a plain string so the run loop decides where it
//! goes; JSON output reuses the reports' serde derives.

use anyhow::Result;
use serde::Serialize;

use crate::stats::{DurationReport, StationReport, TimeReport, UserReport};
use crate::table::TripRecord;

pub fn render_time_report(report: &TimeReport) -> String {
    format!(
        "Most frequent month: {}\n\
         Most frequent day of the week: {}\n\
         Most frequent start hour: {}:00",
        report.popular_month, report.popular_day, report.popular_hour
    )
}

pub fn render_station_report(report: &StationReport) -> String {
    format!(
        "Most commonly used start station: {}\n\
         Most commonly used end station: {}\n\
         Most frequent trip: {}",
        report.popular_start, report.popular_end, report.popular_route
    )
}

pub fn render_duration_report(report: &DurationReport) -> String {
    format!(
        "Total trip duration: {} seconds\n\
         Mean trip duration: {} seconds",
        report.total_secs, report.mean_secs
    )
}

pub fn render_user_report(report: &UserReport) -> String {
    let mut out = String::from("Counts of user types:");
    for (value, count) in &report.user_types {
        out.push_str(&format!("\n  {value}: {count}"));
    }

    if let Some(gender) = &report.gender {
        out.push_str("\nCounts of gender:");
        for (value, count) in gender {
            out.push_str(&format!("\n  {value}: {count}"));
        }
    }

    if let Some(years) = &report.birth_years {
        out.push_str(&format!(
            "\nEarliest year of birth: {}\n\
             Most recent year of birth: {}\n\
             Most common year of birth: {}",
            years.earliest, years.latest, years.most_common
        ));
    }

    out
}

/// One line per raw record, in source-column order.
pub fn render_records(records: &[TripRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{} | {} | {} | {} | {} | {} | {} | {}",
                r.start_time,
                r.end_time,
                r.duration_secs,
                r.start_station,
                r.end_station,
                r.user_type,
                r.gender.as_deref().unwrap_or("-"),
                r.birth_year.map_or("-".to_string(), |y| y.to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// All four reports as one pretty-printed JSON document.
pub fn reports_to_json(
    time: &TimeReport,
    stations: &StationReport,
    durations: &DurationReport,
    users: &UserReport,
) -> Result<String> {
    #[derive(Serialize)]
    struct Reports<'a> {
        time: &'a TimeReport,
        stations: &'a StationReport,
        durations: &'a DurationReport,
        users: &'a UserReport,
    }

    Ok(serde_json::to_string_pretty(&Reports {
        time,
        stations,
        durations,
        users,
    })?)
}

//! CSV loading for city trip data.
//!
//! Reads a city's source file into a [`Table`], parsing both timestamp
//! columns and deriving the month and weekday columns from the start time.
//! A single malformed row aborts the whole load.

use std::fs::File;

use chrono::{Datelike, NaiveDateTime};
use csv::StringRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::DatasetCatalog;
use crate::error::{ExplorerError, Result};
use crate::table::{Table, TripRecord};

/// Timestamp format used by all three source files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single row as it appears in the source CSV, before the timestamp
/// columns are parsed. Columns outside this set (the files carry an
/// unnamed index column) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // stored as a float ("1992.0") in the source files
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads the trip table for a city registered in the catalog.
///
/// # Errors
///
/// Returns [`ExplorerError::UnknownCity`] for an unmapped city key and
/// [`ExplorerError::MalformedRecord`] if any row's timestamp or numeric
/// field fails to parse. There is no partial load.
pub fn load_table(catalog: &DatasetCatalog, city: &str) -> Result<Table> {
    let path = catalog.source_path(city)?;
    debug!(city, path = %path.display(), "Loading city data");

    let mut rdr = csv::Reader::from_reader(File::open(&path)?);
    let headers = rdr.headers()?.clone();

    // Optional-column schema is decided once, from the header.
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut rows = Vec::new();

    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let raw: RawTrip = record
            .deserialize(Some(&headers))
            .map_err(|_| malformed(row, &record))?;

        let start_time = parse_timestamp(&raw.start_time, row)?;
        let end_time = parse_timestamp(&raw.end_time, row)?;

        rows.push(TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            end_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_secs: raw.duration_secs,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year.map(|y| y as i32),
        });
    }

    info!(
        city,
        rows = rows.len(),
        has_gender,
        has_birth_year,
        "City data loaded"
    );

    Ok(Table {
        rows,
        has_gender,
        has_birth_year,
    })
}

fn parse_timestamp(raw: &str, row: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|_| {
        ExplorerError::MalformedRecord {
            row,
            raw: raw.to_string(),
        }
    })
}

fn malformed(row: usize, record: &StringRecord) -> ExplorerError {
    let raw = record.iter().collect::<Vec<_>>().join(",");
    ExplorerError::MalformedRecord { row, raw }
}

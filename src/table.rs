//! In-memory table types for one city's trip records.

use chrono::{NaiveDateTime, Weekday};

/// One trip, with the time-based columns derived at load time.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip duration in seconds. Washington's source data carries
    /// fractional values, so this is a float.
    pub duration_secs: f64,
    pub user_type: String,

    // present only when the source file has the column (see Table schema)
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub weekday: Weekday,
}

impl TripRecord {
    /// Start hour of the trip, 0-23.
    pub fn hour(&self) -> u32 {
        use chrono::Timelike;
        self.start_time.hour()
    }

    /// Route label, start and end station joined with " to ".
    pub fn route(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

/// An ordered collection of trip records plus the optional-column schema
/// decided once at load time. Row order is insertion order from the source
/// and is preserved through filtering.
#[derive(Debug, Clone)]
pub struct Table {
    pub rows: Vec<TripRecord>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;

    /// Builds a record from a timestamp string and station pair; the other
    /// fields get neutral defaults that individual tests override.
    pub fn record(start: &str, start_station: &str, end_station: &str) -> TripRecord {
        let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord {
            start_time,
            end_time: start_time + chrono::Duration::seconds(300),
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            duration_secs: 300.0,
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
            month: chrono::Datelike::month(&start_time),
            weekday: chrono::Datelike::weekday(&start_time),
        }
    }

    pub fn table(rows: Vec<TripRecord>) -> Table {
        Table {
            rows,
            has_gender: false,
            has_birth_year: false,
        }
    }

    /// A quick date-only record where only the start day matters.
    pub fn record_on(date: (i32, u32, u32)) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        record(
            &start.format("%Y-%m-%d %H:%M:%S").to_string(),
            "A",
            "B",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::record;

    #[test]
    fn test_route_joins_with_to() {
        let r = record("2017-01-01 00:00:00", "A", "B");
        assert_eq!(r.route(), "A to B");
    }

    #[test]
    fn test_hour_comes_from_start_time() {
        let r = record("2017-03-15 17:45:12", "A", "B");
        assert_eq!(r.hour(), 17);
    }

    #[test]
    fn test_derived_month_and_weekday() {
        // 2017-06-05 was a Monday
        let r = record("2017-06-05 08:00:00", "A", "B");
        assert_eq!(r.month, 6);
        assert_eq!(r.weekday, chrono::Weekday::Mon);
    }
}

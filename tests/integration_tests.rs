//! End-to-end pipeline tests over the fixture CSVs:
//! catalog -> loader -> filter -> statistics -> pager.

use bikeshare_explorer::catalog::DatasetCatalog;
use bikeshare_explorer::error::ExplorerError;
use bikeshare_explorer::filter::{self, FilterSpec};
use bikeshare_explorer::loader::load_table;
use bikeshare_explorer::pager::RawRecordPager;
use bikeshare_explorer::stats::{duration_stats, station_stats, time_stats, user_stats};

fn fixture_catalog() -> DatasetCatalog {
    DatasetCatalog::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

#[test]
fn test_full_pipeline_unfiltered() {
    let catalog = fixture_catalog();
    let table = load_table(&catalog, "chicago").expect("fixture should load");

    assert_eq!(table.len(), 7);
    assert!(table.rows.iter().all(|r| (1..=6).contains(&r.month)));

    let time = time_stats(&table).unwrap();
    assert_eq!(time.popular_month, 6);
    assert_eq!(time.popular_day, "Monday");
    assert_eq!(time.popular_hour, 8);

    let stations = station_stats(&table).unwrap();
    assert_eq!(stations.popular_start, "Canal St");
    assert_eq!(stations.popular_end, "Clark St");
    assert_eq!(stations.popular_route, "Canal St to Clark St");

    let durations = duration_stats(&table).unwrap();
    assert_eq!(durations.total_secs, 4500.0);
    assert!((durations.mean_secs - 4500.0 / 7.0).abs() < 1e-9);

    let users = user_stats(&table).unwrap();
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 5), ("Customer".to_string(), 2)]
    );
    let gender = users.gender.expect("chicago fixture has the Gender column");
    assert_eq!(
        gender,
        vec![("Male".to_string(), 4), ("Female".to_string(), 2)]
    );
    let years = users
        .birth_years
        .expect("chicago fixture has the Birth Year column");
    assert_eq!(years.earliest, 1979);
    assert_eq!(years.latest, 1992);
    assert_eq!(years.most_common, 1990);
}

#[test]
fn test_month_and_day_filter_then_stats() {
    let catalog = fixture_catalog();
    let table = load_table(&catalog, "chicago").unwrap();

    let spec = FilterSpec::from_tokens("june", "monday").unwrap();
    let filtered = filter::apply(&table, &spec);

    // June Mondays in the fixture: rows at 08:15, 17:30, 08:30, 09:00
    assert_eq!(filtered.len(), 4);
    let durations = duration_stats(&filtered).unwrap();
    assert_eq!(durations.total_secs, 2550.0);
    assert_eq!(durations.mean_secs, 637.5);
}

#[test]
fn test_filter_with_no_matches_reports_empty_table() {
    let catalog = fixture_catalog();
    let table = load_table(&catalog, "chicago").unwrap();

    // The only January trip is on a Monday
    let spec = FilterSpec::from_tokens("january", "tuesday").unwrap();
    let filtered = filter::apply(&table, &spec);
    assert!(filtered.is_empty());

    let err = time_stats(&filtered).unwrap_err();
    assert!(matches!(err, ExplorerError::EmptyTable { .. }));
}

#[test]
fn test_city_without_optional_columns() {
    let catalog = fixture_catalog();
    let table = load_table(&catalog, "washington").unwrap();

    assert!(!table.has_gender);
    assert!(!table.has_birth_year);

    let users = user_stats(&table).unwrap();
    assert_eq!(
        users.user_types,
        vec![("Registered".to_string(), 1), ("Casual".to_string(), 1)]
    );
    assert_eq!(users.gender, None);
    assert_eq!(users.birth_years, None);

    let durations = duration_stats(&table).unwrap();
    assert_eq!(durations.total_secs, 2100.5);
}

#[test]
fn test_pager_over_filtered_table() {
    let catalog = fixture_catalog();
    let table = load_table(&catalog, "chicago").unwrap();
    let mut pager = RawRecordPager::new(&table);

    let first = pager.next_page();
    assert_eq!(first.len(), 5);
    assert_eq!(first[0].start_station, "Canal St");

    let second = pager.next_page();
    assert_eq!(second.len(), 2);

    assert!(pager.next_page().is_empty());
}

#[test]
fn test_unknown_city_is_rejected() {
    let catalog = fixture_catalog();
    let err = load_table(&catalog, "springfield").unwrap_err();
    assert!(matches!(err, ExplorerError::UnknownCity(_)));
}

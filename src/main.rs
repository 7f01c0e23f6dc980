//! CLI entry point for the bikeshare explorer.
//!
//! Prompts for a city and time filter (or takes them as flags), loads the
//! city's trip data, prints the four statistics reports, and optionally
//! pages through raw records.

use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use bikeshare_explorer::catalog::DatasetCatalog;
use bikeshare_explorer::error::ExplorerError;
use bikeshare_explorer::filter::{self, FilterSpec};
use bikeshare_explorer::loader::load_table;
use bikeshare_explorer::output::{
    render_duration_report, render_records, render_station_report, render_time_report,
    render_user_report, reports_to_json,
};
use bikeshare_explorer::pager::RawRecordPager;
use bikeshare_explorer::stats::{duration_stats, station_stats, time_stats, user_stats};
use bikeshare_explorer::table::Table;
use bikeshare_explorer::ui::Prompter;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "A tool to explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// City to analyze (chicago, "new york city", washington); prompted when omitted
    #[arg(short, long)]
    city: Option<String>,

    /// Month filter: "all" or a month name january..june; prompted when omitted
    #[arg(short, long)]
    month: Option<String>,

    /// Day filter: "all" or a full weekday name; prompted when omitted
    #[arg(short, long)]
    day: Option<String>,

    /// Directory containing the city CSV files
    /// (falls back to BIKESHARE_DATA_DIR, then "data")
    #[arg(long)]
    data_dir: Option<String>,

    /// Print the four reports as one JSON document instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok())
        .unwrap_or_else(|| "data".to_string());
    let catalog = DatasetCatalog::new(&data_dir);

    // With all three filters on the command line there is nothing to ask;
    // run the pipeline once and exit.
    if let (Some(city), Some(month), Some(day)) = (&cli.city, &cli.month, &cli.day) {
        let table = load_filtered(
            &catalog,
            &city.to_lowercase(),
            &month.to_lowercase(),
            &day.to_lowercase(),
        )?;
        match print_reports(&table, cli.json) {
            Ok(()) => {}
            Err(err) if is_empty_table(&err) => println!("No data for this filter."),
            Err(err) => return Err(err),
        }
        return Ok(());
    }

    // Interactive session: prompt, report, page, restart.
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let city = match &cli.city {
            Some(c) => c.to_lowercase(),
            None => prompter.city(&catalog)?,
        };
        let month = match &cli.month {
            Some(m) => m.to_lowercase(),
            None => prompter.month()?,
        };
        let day = match &cli.day {
            Some(d) => d.to_lowercase(),
            None => prompter.day()?,
        };
        println!("{}", "-".repeat(40));

        explore(&catalog, &city, &month, &day, cli.json, &mut prompter)?;

        if !prompter.yes_no("\nWould you like to restart? Enter yes or no.")? {
            break;
        }
    }

    Ok(())
}

/// One full run over an already-validated (city, month, day) selection.
#[tracing::instrument(skip(catalog, json, prompter))]
fn explore<R: BufRead, W: Write>(
    catalog: &DatasetCatalog,
    city: &str,
    month: &str,
    day: &str,
    json: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let table = load_filtered(catalog, city, month, day)?;

    match print_reports(&table, json) {
        Ok(()) => {}
        Err(err) if is_empty_table(&err) => {
            println!("No data for this filter.");
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    // Raw-record paging dialog
    if prompter.yes_no("Would you like to see raw data?")? {
        let mut pager = RawRecordPager::new(&table);
        loop {
            let page = pager.next_page();
            if page.is_empty() {
                println!("No more data to show.");
                break;
            }
            println!("{}", render_records(page));
            if !prompter.yes_no("Would you like to see 5 more lines of data?")? {
                break;
            }
        }
    }

    Ok(())
}

fn load_filtered(catalog: &DatasetCatalog, city: &str, month: &str, day: &str) -> Result<Table> {
    let spec = FilterSpec::from_tokens(month, day)
        .with_context(|| format!("invalid month or day filter: {month:?} / {day:?}"))?;

    let table = load_table(catalog, city)?;
    let filtered = filter::apply(&table, &spec);
    info!(city, rows = filtered.len(), "Table loaded and filtered");
    Ok(filtered)
}

fn is_empty_table(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ExplorerError>(),
        Some(ExplorerError::EmptyTable { .. })
    )
}

fn print_reports(table: &Table, json: bool) -> Result<()> {
    if json {
        let time = time_stats(table)?;
        let stations = station_stats(table)?;
        let durations = duration_stats(table)?;
        let users = user_stats(table)?;
        println!("{}", reports_to_json(&time, &stations, &durations, &users)?);
        return Ok(());
    }

    print_section("The Most Frequent Times of Travel", table, |t| {
        Ok(render_time_report(&time_stats(t)?))
    })?;
    print_section("The Most Popular Stations and Trip", table, |t| {
        Ok(render_station_report(&station_stats(t)?))
    })?;
    print_section("Trip Duration", table, |t| {
        Ok(render_duration_report(&duration_stats(t)?))
    })?;
    print_section("User Stats", table, |t| {
        Ok(render_user_report(&user_stats(t)?))
    })?;
    Ok(())
}

/// Computes and prints one report section, timing the computation the way
/// the console output reports it.
fn print_section(
    title: &str,
    table: &Table,
    compute: impl Fn(&Table) -> std::result::Result<String, ExplorerError>,
) -> std::result::Result<(), ExplorerError> {
    let started = Instant::now();
    println!("\nCalculating {title}...\n");
    let body = compute(table)?;
    println!("{body}");
    println!(
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    );
    println!("{}", "-".repeat(40));
    Ok(())
}

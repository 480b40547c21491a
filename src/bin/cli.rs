//! worktime CLI - daily work-duration and commute reports from a
//! location-history export.
//!
//! Usage:
//!   worktime work <file> <work_coord> [--tolerance <km>] [--since <date>]
//!   worktime commute <file> <home_coord> <work_coord> [--tolerance <km>] [--since <date>]
//!
//! Coordinates are "lat:lon" in decimal degrees, comma-separated when a
//! location has several reference points. The export is scanned newest first
//! and stops at the --since cutoff.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use worktime::{
    average_work_duration, commute_report, parse_coordinate_list, parse_start_date, read_location_history,
    scan_records, work_report, GeofenceSet, PlanarDistance, Result, ScanResult,
    DEFAULT_TOLERANCE_KM,
};

#[derive(Parser)]
#[command(name = "worktime")]
#[command(about = "Daily work-duration and commute reports from a location-history export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report daily work durations
    Work {
        /// JSON extraction of your location history
        file: PathBuf,

        /// Work coordinates as "lat:lon", comma-separated for multiple points
        work_coord: String,

        /// Geofence tolerance radius in kilometers
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE_KM)]
        tolerance: f64,

        /// Ignore records older than this local date (YYYY-MM-DD)
        #[arg(short, long)]
        since: Option<String>,
    },

    /// Report daily work durations plus morning/evening commutes
    Commute {
        /// JSON extraction of your location history
        file: PathBuf,

        /// Home coordinates as "lat:lon", comma-separated for multiple points
        home_coord: String,

        /// Work coordinates as "lat:lon", comma-separated for multiple points
        work_coord: String,

        /// Geofence tolerance radius in kilometers
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE_KM)]
        tolerance: f64,

        /// Ignore records older than this local date (YYYY-MM-DD)
        #[arg(short, long)]
        since: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let result = match cli.command {
        Commands::Work {
            file,
            work_coord,
            tolerance,
            since,
        } => run_work(&file, &work_coord, tolerance, since.as_deref()),
        Commands::Commute {
            file,
            home_coord,
            work_coord,
            tolerance,
            since,
        } => run_commute(&file, &home_coord, &work_coord, tolerance, since.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Work-only report over the export.
fn run_work(file: &PathBuf, work_coord: &str, tolerance: f64, since: Option<&str>) -> Result<()> {
    let start_threshold = match since {
        Some(date) => parse_start_date(date)?,
        None => 0,
    };
    let work_points = parse_coordinate_list(work_coord)?;
    let distance = PlanarDistance::new(work_points[0].latitude);
    let work = GeofenceSet::new(work_points, tolerance)?;

    let history = read_location_history(file)?;
    let scan = scan_records(history.locations, start_threshold, &distance, &work, None)?;

    print_work_report(&scan)
}

/// Work plus commute report over the export.
fn run_commute(
    file: &PathBuf,
    home_coord: &str,
    work_coord: &str,
    tolerance: f64,
    since: Option<&str>,
) -> Result<()> {
    let start_threshold = match since {
        Some(date) => parse_start_date(date)?,
        None => 0,
    };
    let home_points = parse_coordinate_list(home_coord)?;
    let work_points = parse_coordinate_list(work_coord)?;
    let distance = PlanarDistance::new(home_points[0].latitude);

    println!(
        "Distance between work and home: {:.2} km",
        distance.distance_km(&home_points[0], &work_points[0])
    );

    let home = GeofenceSet::new(home_points, tolerance)?;
    let work = GeofenceSet::new(work_points, tolerance)?;

    let history = read_location_history(file)?;
    let scan = scan_records(
        history.locations,
        start_threshold,
        &distance,
        &work,
        Some(&home),
    )?;

    print_work_report(&scan)?;
    print_commute_report(&scan);
    Ok(())
}

/// Print per-day work lines, stream counters, and the eligible-day average.
fn print_work_report(scan: &ScanResult) -> Result<()> {
    let days = work_report(&scan.aggregator);

    for day in &days {
        println!(
            "Worked on {} from {} to {} ({}:{:02})",
            day.arrived.format("%a %b %d"),
            day.arrived.format("%H:%M"),
            day.left.format("%H:%M"),
            day.hours(),
            day.minutes()
        );
    }

    println!("Processed {} records", scan.processed);
    println!("Worked for {} days", days.len());

    let average = average_work_duration(&days)?;
    println!(
        "On average: {} hours and {} minutes",
        average.hours, average.minutes
    );
    Ok(())
}

/// Print per-day commute lines for days with both work and home presence.
fn print_commute_report(scan: &ScanResult) {
    println!("At home on {} days", scan.aggregator.home_day_count());

    for commute in commute_report(&scan.aggregator) {
        println!(
            "Commute on {}: {} min to work, {} min back home",
            commute.date, commute.morning_minutes, commute.evening_minutes
        );
    }
}

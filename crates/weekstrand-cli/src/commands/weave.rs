use chrono::{NaiveDate, Weekday};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use weekstrand_core::{
    create_dna_strands, date_from_julian_day, read_events, week_start, StrandConfig, StrandMap,
    WeekGeometry,
};

#[derive(Args)]
pub struct WeaveArgs {
    /// JSON file with an array of events
    #[arg(long)]
    events: PathBuf,
    /// Any date inside the week to draw (defaults to today)
    #[arg(long)]
    week_of: Option<NaiveDate>,
    /// First day of the week
    #[arg(long, default_value = "sun")]
    first_weekday: Weekday,
    /// Number of day columns
    #[arg(long, default_value_t = 7)]
    days: usize,
    /// Top of the drawing area in pixels
    #[arg(long, default_value_t = 0)]
    top: i32,
    /// Bottom of the drawing area in pixels
    #[arg(long, default_value_t = 200)]
    bottom: i32,
    /// Minimum drawn length of a segment in pixels
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    min_pixels: i32,
    /// x of the left edge of the first column
    #[arg(long, default_value_t = 0.0)]
    left: f32,
    /// Width of each day column
    #[arg(long, default_value_t = 40.0)]
    column_width: f32,
}

#[derive(Serialize)]
struct WeaveOutput {
    week_start: Option<NaiveDate>,
    first_julian_day: i32,
    days: usize,
    /// `None` when there was nothing to draw
    strands: Option<StrandMap>,
}

pub fn run(args: WeaveArgs, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = StrandConfig::load(config_path)?;
    let events = read_events(&args.events)
        .map_err(|e| format!("cannot read {}: {e}", args.events.display()))?;

    let week_of = args
        .week_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let first_julian_day = week_start(week_of, args.first_weekday);
    let geometry = WeekGeometry::with_even_columns(
        first_julian_day,
        args.days,
        args.left,
        args.column_width,
        args.top,
        args.bottom,
        args.min_pixels,
    );

    tracing::debug!(
        "Weaving {} events for week starting on julian day {}",
        events.len(),
        first_julian_day
    );
    let output = WeaveOutput {
        week_start: date_from_julian_day(first_julian_day),
        first_julian_day,
        days: args.days,
        strands: create_dna_strands(&events, &geometry, &config),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

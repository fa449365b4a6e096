//! # Prayer Clock Application Entry Point
//!
//! Computes the next five prayers (or a full day with `--date`), logs and prints
//! them, writes the JSON timetable, and prints the block windows the network
//! blocker should apply. Scheduling the blocks and driving the status LED is left
//! to the services that consume these outputs.
//!
//! Usage: `prayer-clock [--config PATH] [--date YYYY-MM-DD]`


use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use log::info;
use std::env;
use std::path::PathBuf;

use prayer_clock_lib::calculator::compute_all_prayer_times;
use prayer_clock_lib::config::Config;
use prayer_clock_lib::timediff::blink_period_hours;
use prayer_clock_lib::timetable::{block_windows, format_table, write_prayer_times, TIME_FORMAT};
use prayer_clock_lib::upcoming::next_five_prayers;

/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    date: Option<NaiveDate>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--date" => {
                let value = args.next().context("--date needs YYYY-MM-DD")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .with_context(|| format!("invalid --date '{value}'"))?;
                parsed.date = Some(date);
            }
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(parsed)
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    // Validate everything before computing anything
    let coordinates = config.coordinates().context("bad [location] in config")?;
    let fajr_isha = config.fajr_isha().context("bad [conventions] in config")?;
    let asr = config.asr().context("bad [conventions] in config")?;
    let timezone = config.location.timezone;

    if let Some(date) = args.date {
        let table = compute_all_prayer_times(date, coordinates, timezone, fajr_isha, asr)
            .with_context(|| format!("computing prayer times for {date}"))?;
        println!("Prayer Times:");
        println!("{}", format_table(&table));
        return Ok(());
    }

    // Read the clock exactly once
    let now = Local::now().naive_local();
    info!("Computing next five prayers after {now}");

    let prayers = next_five_prayers(coordinates, timezone, fajr_isha, asr, now)
        .context("computing upcoming prayer times")?;

    let timings = prayers
        .iter()
        .map(|(p, t)| format!("{p}: {}", t.format("%Y-%m-%d %H:%M")))
        .collect::<Vec<_>>()
        .join(", ");
    info!("Prayer times generated: {timings}");

    write_prayer_times(&prayers, &config.paths.prayer).with_context(|| {
        format!(
            "writing timetable to {}",
            config.paths.prayer.display()
        )
    })?;
    println!("Prayer Times:");
    println!("{}", format_table(&prayers));

    println!("\nBlock Windows:");
    for window in block_windows(&prayers, &config.block) {
        println!(
            "{:<8}: {} - {} ({} min)",
            window.prayer.name(),
            window.start.format(TIME_FORMAT),
            window.end.format(TIME_FORMAT),
            window.duration().num_minutes()
        );
    }

    if let Some(next) = prayers.times().next() {
        info!(
            "Next prayer at {}, LED blink period {:.2}h",
            next.format(TIME_FORMAT),
            blink_period_hours(now, next)
        );
    }

    Ok(())
}

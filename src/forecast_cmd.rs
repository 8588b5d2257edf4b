use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use meteoreo_ephemeris::MeeusEphemeris;
use meteoreo_visibility::{ForecastPoint, ScanConfig, VisibilityEngine};

use crate::cli::ForecastArgs;
use crate::config::MeteoreoConfig;
use crate::setup;

/// Run the `forecast` subcommand.
pub fn run(args: ForecastArgs) -> Result<()> {
    let config = MeteoreoConfig::load_or_default(&args.site.config)?;
    let catalog = setup::load_catalog(args.site.catalog.as_deref(), &config)?;
    let sky = setup::sky_source(&args.site, &config)?;
    let observer = setup::observer(&args.site, &config)?;
    let scan_config = ScanConfig::new(args.step_minutes, args.hours)?;
    info!(
        latitude = observer.latitude_deg(),
        longitude = observer.longitude_deg(),
        hours = args.hours,
        step_minutes = args.step_minutes,
        "scanning forecast window"
    );

    let mut engine = VisibilityEngine::new(&catalog, MeeusEphemeris::new(), sky);
    let series = engine.scan(&observer, &scan_config)?;

    match &args.output {
        Some(path) => {
            write_csv(path, &series)?;
            info!(path = %path.display(), n_points = series.len(), "forecast written");
        }
        None => print_table(&series),
    }

    if let Some(best) = series
        .iter()
        .max_by(|a, b| a.hourly_rate.total_cmp(&b.hourly_rate))
    {
        if best.hourly_rate > 0.0 {
            println!(
                "Best time: {} with {:.0} meteor(s)/hour.",
                best.instant.format("%Y-%m-%d %H:%M UTC"),
                best.hourly_rate
            );
        } else {
            println!("No dark-sky meteor visibility in this window.");
        }
    }
    Ok(())
}

fn print_table(series: &[ForecastPoint]) {
    println!(
        "{:<17} {:>10} {:>9} {:>9} {:>7}",
        "time (UTC)", "meteors/h", "sun alt", "moon alt", "moon %"
    );
    for point in series {
        println!(
            "{:<17} {:>10.1} {:>9.1} {:>9.1} {:>7.0}",
            point.instant.format("%Y-%m-%d %H:%M"),
            point.hourly_rate,
            point.sun_altitude_deg,
            point.moon_altitude_deg,
            point.moon_illuminated_fraction * 100.0,
        );
    }
}

fn write_csv(path: &Path, series: &[ForecastPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record([
        "time_utc",
        "hourly_rate",
        "sun_altitude_deg",
        "moon_altitude_deg",
        "moon_illuminated_fraction",
    ])?;
    for point in series {
        writer.write_record(&[
            point.instant.to_rfc3339(),
            format!("{:.3}", point.hourly_rate),
            format!("{:.3}", point.sun_altitude_deg),
            format!("{:.3}", point.moon_altitude_deg),
            format!("{:.4}", point.moon_illuminated_fraction),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

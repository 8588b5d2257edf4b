use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meteoreo meteor visibility predictor.
#[derive(Parser)]
#[command(
    name = "meteoreo",
    version,
    about = "Predicts the number of meteors visible per hour"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Predict the visible-meteor rate for one instant.
    Predict(PredictArgs),
    /// Scan a multi-day forecast window.
    Forecast(ForecastArgs),
    /// Print the shower catalog.
    Showers(ShowersArgs),
}

/// Observer site, time, and collaborator options shared by the prediction
/// subcommands.
#[derive(clap::Args)]
pub struct SiteArgs {
    /// Observer latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Observer longitude in degrees (negative for West).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Observer elevation in meters.
    #[arg(long)]
    pub elevation: Option<f64>,

    /// Observation time, RFC 3339 (e.g. 2026-08-12T03:30:00Z). Defaults to now.
    #[arg(long)]
    pub time: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "meteoreo.toml")]
    pub config: PathBuf,

    /// Light pollution API key (overrides METEOREO_API_KEY and the config).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Fixed sky brightness in mag/arcsec², skipping the network lookup.
    #[arg(long)]
    pub sky_brightness: Option<f64>,

    /// Path to a shower catalog CSV (defaults to the built-in list).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Site, time, and collaborator options.
    #[command(flatten)]
    pub site: SiteArgs,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Site, time, and collaborator options.
    #[command(flatten)]
    pub site: SiteArgs,

    /// Window length in hours.
    #[arg(long, default_value_t = 72)]
    pub hours: u32,

    /// Minutes between forecast points.
    #[arg(long = "step-minutes", default_value_t = 15)]
    pub step_minutes: u32,

    /// Write the series to a CSV file instead of printing a table.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `showers` subcommand.
#[derive(clap::Args)]
pub struct ShowersArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "meteoreo.toml")]
    pub config: PathBuf,

    /// Path to a shower catalog CSV (defaults to the built-in list).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

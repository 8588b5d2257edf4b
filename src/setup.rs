use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use meteoreo_catalog::ShowerCatalog;
use meteoreo_lightpollution::{
    FixedBrightness, LightPollutionClient, LightPollutionError, SkyBrightnessSource,
};
use meteoreo_visibility::Observer;

use crate::cli::SiteArgs;
use crate::config::MeteoreoConfig;

/// Environment variable consulted for the light pollution API key.
const API_KEY_ENV: &str = "METEOREO_API_KEY";

/// The concrete sky-brightness source assembled from CLI and config inputs.
pub enum SkySource {
    /// A fixed SQM reading supplied by the user.
    Fixed(FixedBrightness),
    /// The lightpollutionmap.info raster client.
    Client(Box<LightPollutionClient>),
}

impl SkyBrightnessSource for SkySource {
    fn brightness(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, LightPollutionError> {
        match self {
            SkySource::Fixed(source) => source.brightness(latitude_deg, longitude_deg),
            SkySource::Client(client) => client.brightness(latitude_deg, longitude_deg),
        }
    }
}

/// Selects the sky-brightness source.
///
/// An explicit `--sky-brightness` wins; otherwise the raster client is
/// built with the first key found among `--api-key`, the environment, and
/// the config file.
pub fn sky_source(args: &SiteArgs, config: &MeteoreoConfig) -> Result<SkySource> {
    if let Some(sky_mag) = args.sky_brightness {
        info!(sky_mag, "using fixed sky brightness");
        return Ok(SkySource::Fixed(FixedBrightness(sky_mag)));
    }

    let key = args
        .api_key
        .clone()
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .or_else(|| config.api_key.clone());

    match key {
        Some(key) => Ok(SkySource::Client(Box::new(LightPollutionClient::new(key)))),
        None => bail!(
            "no light pollution API key: pass --api-key, set {API_KEY_ENV}, \
             or set api_key in the config (--sky-brightness skips the lookup entirely)"
        ),
    }
}

/// Loads the shower catalog from the CLI path, the config path, or the
/// built-in table, in that order.
pub fn load_catalog(cli_path: Option<&Path>, config: &MeteoreoConfig) -> Result<ShowerCatalog> {
    match cli_path.or(config.catalog.as_deref()) {
        Some(path) => ShowerCatalog::from_csv_path(path)
            .with_context(|| format!("failed to load shower catalog {}", path.display())),
        None => Ok(ShowerCatalog::builtin()),
    }
}

/// Builds the observer from CLI flags with config-file fallbacks.
pub fn observer(args: &SiteArgs, config: &MeteoreoConfig) -> Result<Observer> {
    let latitude = args
        .lat
        .or(config.observer.latitude)
        .context("no latitude: pass --lat or set [observer].latitude in the config")?;
    let longitude = args
        .lon
        .or(config.observer.longitude)
        .context("no longitude: pass --lon or set [observer].longitude in the config")?;
    let elevation = args.elevation.or(config.observer.elevation).unwrap_or(0.0);

    let instant = match &args.time {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --time '{raw}', expected RFC 3339"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    Ok(Observer::new(latitude, longitude, elevation, instant)?)
}

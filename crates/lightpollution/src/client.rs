//! HTTP client for the lightpollutionmap.info raster service.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::LightPollutionError;
use crate::source::SkyBrightnessSource;

/// Production endpoint of the raster query service.
pub const DEFAULT_BASE_URL: &str = "https://www.lightpollutionmap.info";

/// Sky brightness assumed where the raster has no coverage, mag/arcsec².
///
/// The world atlas raster covers latitudes -60 to 75; outside that band the
/// darkest-tier value is returned without touching the network.
pub const DARKEST_SKY_MAG: f64 = 22.0;

/// Southern edge of raster coverage, degrees latitude.
const COVERAGE_SOUTH_LAT: f64 = -60.0;
/// Northern edge of raster coverage, degrees latitude.
const COVERAGE_NORTH_LAT: f64 = 75.0;

/// Natural night-sky brightness added to the artificial raster value, mcd/m².
const NATURAL_SKY_MCD: f64 = 0.171_168_465;

/// Request timeout for the raster service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Converts a luminance in mcd/m² to mag/arcsec².
pub fn mcd_to_sqm(mcd: f64) -> f64 {
    (mcd / 108_000_000.0).log10() / -0.4
}

/// Blocking client for the world-atlas light pollution raster.
///
/// The API key is an explicit constructor parameter; there is no ambient
/// configuration. One client per engine is the expected shape.
#[derive(Debug, Clone)]
pub struct LightPollutionClient {
    api_key: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl LightPollutionClient {
    /// Creates a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternate endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http,
        }
    }

    /// Queries the raster for artificial brightness at a point, mcd/m².
    fn query_artificial(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, LightPollutionError> {
        let url = format!("{}/QueryRaster/", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("ql", "wa_2015".to_string()),
                ("qt", "point".to_string()),
                ("qd", format!("{longitude_deg},{latitude_deg}")),
                ("key", self.api_key.clone()),
            ])
            .send()
            .map_err(|e| LightPollutionError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LightPollutionError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<f64>()
            .map_err(|e| LightPollutionError::Malformed {
                reason: e.to_string(),
            })
    }
}

impl SkyBrightnessSource for LightPollutionClient {
    fn brightness(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, LightPollutionError> {
        // The raster has no data outside this latitude band; report the
        // darkest sky rather than a spurious lookup failure.
        if latitude_deg <= COVERAGE_SOUTH_LAT || latitude_deg >= COVERAGE_NORTH_LAT {
            debug!(latitude_deg, "outside raster coverage, using darkest sky");
            return Ok(DARKEST_SKY_MAG);
        }

        let artificial = self.query_artificial(latitude_deg, longitude_deg)?;
        let total_mcd = NATURAL_SKY_MCD + artificial;
        let sqm = mcd_to_sqm(total_mcd);
        info!(latitude_deg, longitude_deg, artificial, sqm, "light pollution lookup");
        Ok(sqm)
    }
}

//! The sky-brightness source seam.

use crate::error::LightPollutionError;

/// A source of the location-only sky-brightness baseline.
///
/// Implementations return mag/arcsec² (higher = darker). The engine calls
/// this at most once per observer location and caches the result, so an
/// implementation is free to be slow or to hit the network.
pub trait SkyBrightnessSource {
    /// Returns the sky-brightness baseline for a location.
    ///
    /// # Errors
    ///
    /// Returns [`LightPollutionError`] when the baseline cannot be obtained.
    /// Implementations must not substitute defaults on failure.
    fn brightness(&self, latitude_deg: f64, longitude_deg: f64)
        -> Result<f64, LightPollutionError>;
}

/// A constant sky brightness, for tests and for sites with a known SQM reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBrightness(pub f64);

impl SkyBrightnessSource for FixedBrightness {
    fn brightness(&self, _latitude_deg: f64, _longitude_deg: f64)
        -> Result<f64, LightPollutionError> {
        Ok(self.0)
    }
}

//! Gaussian activity curve for a single shower.

use meteoreo_catalog::ShowerRecord;

use crate::solar::{days_to_solar_lon, ACTIVITY_SIGMA_DAYS};

/// Gaussian rate-over-solar-longitude curve for one shower.
///
/// A small immutable value object: height is the shower's maximum ZHR, the
/// mean is its peak solar longitude, and the sigma is the solar-longitude
/// equivalent of five days. One curve per catalog record, built once at
/// engine construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityCurve {
    peak_zhr: f64,
    peak_solar_lon_deg: f64,
    sigma_deg: f64,
}

impl ActivityCurve {
    /// Builds the activity curve for a catalog record.
    pub fn for_shower(record: &ShowerRecord) -> Self {
        Self {
            peak_zhr: record.max_zhr(),
            peak_solar_lon_deg: record.peak_solar_lon_deg(),
            sigma_deg: days_to_solar_lon(ACTIVITY_SIGMA_DAYS),
        }
    }

    /// Returns the peak rate (the shower's maximum ZHR).
    pub fn peak_zhr(&self) -> f64 {
        self.peak_zhr
    }

    /// Returns the solar longitude of the peak in degrees.
    pub fn peak_solar_lon_deg(&self) -> f64 {
        self.peak_solar_lon_deg
    }

    /// Returns the curve sigma in degrees of solar longitude.
    pub fn sigma_deg(&self) -> f64 {
        self.sigma_deg
    }

    /// Evaluates the instantaneous zenithal rate at a solar longitude.
    ///
    /// Total over all finite inputs, symmetric about the peak, and exactly
    /// equal to the peak ZHR at the peak itself.
    ///
    /// The curve is evaluated on the unwrapped longitude axis: a shower
    /// peaking near the 0/360 boundary is not mirrored across it, matching
    /// the published model this implements.
    pub fn rate_at(&self, solar_lon_deg: f64) -> f64 {
        let d = solar_lon_deg - self.peak_solar_lon_deg;
        self.peak_zhr * (-(d * d) / (2.0 * self.sigma_deg * self.sigma_deg)).exp()
    }
}

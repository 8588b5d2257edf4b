//! Linear day <-> solar-longitude conversions.
//!
//! The Sun advances 360 degrees of ecliptic longitude per tropical year.
//! These helpers treat that motion as uniform, which is the approximation
//! used throughout the activity model; the error against the true Sun stays
//! below two degrees and is small next to the five-day activity sigma.

/// Length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Width of a shower's activity period, as the Gaussian sigma in days.
pub const ACTIVITY_SIGMA_DAYS: f64 = 5.0;

/// Converts a span of days to the equivalent span of solar longitude.
pub fn days_to_solar_lon(days: f64) -> f64 {
    days / TROPICAL_YEAR_DAYS * 360.0
}

/// Converts a span of solar longitude to the equivalent span of days.
pub fn solar_lon_to_days(degrees: f64) -> f64 {
    degrees / 360.0 * TROPICAL_YEAR_DAYS
}

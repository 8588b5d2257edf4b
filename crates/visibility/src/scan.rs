//! The multi-day forecast scanner.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use meteoreo_ephemeris::Ephemeris;
use meteoreo_lightpollution::SkyBrightnessSource;
use meteoreo_skyquality::{
    is_astronomical_twilight, limiting_magnitude, moon_sky_brightness, SkyConditions,
};

use crate::engine::VisibilityEngine;
use crate::error::VisibilityError;
use crate::observer::Observer;

/// Step size and window length of a forecast scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Minutes between consecutive points.
    step_minutes: u32,
    /// Total window length in hours.
    total_hours: u32,
}

impl Default for ScanConfig {
    /// Every 15 minutes for 3 days: 288 points.
    fn default() -> Self {
        Self {
            step_minutes: 15,
            total_hours: 72,
        }
    }
}

impl ScanConfig {
    /// Creates a scan configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::InvalidScanConfig`] when either value is
    /// zero, the window exceeds one year, or the step is longer than the
    /// window.
    pub fn new(step_minutes: u32, total_hours: u32) -> Result<Self, VisibilityError> {
        let fail = |reason: String| VisibilityError::InvalidScanConfig { reason };
        if step_minutes == 0 {
            return Err(fail("step must be at least one minute".into()));
        }
        if total_hours == 0 {
            return Err(fail("window must be at least one hour".into()));
        }
        if total_hours > 24 * 366 {
            return Err(fail(format!(
                "window of {total_hours} hours exceeds one year"
            )));
        }
        if step_minutes > total_hours * 60 {
            return Err(fail(format!(
                "step of {step_minutes} minutes exceeds the {total_hours}-hour window"
            )));
        }
        Ok(Self {
            step_minutes,
            total_hours,
        })
    }

    /// Returns the step size in minutes.
    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    /// Returns the window length in hours.
    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }

    /// Returns the number of points the scan will produce.
    pub fn points(&self) -> usize {
        (self.total_hours * 60 / self.step_minutes) as usize
    }
}

/// One row of a forecast series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    /// Instant of this point (UTC).
    pub instant: DateTime<Utc>,
    /// Predicted visible-meteor rate, meteors/hour.
    pub hourly_rate: f64,
    /// Sun altitude in degrees.
    pub sun_altitude_deg: f64,
    /// Illuminated fraction of the moon, 0..=1.
    pub moon_illuminated_fraction: f64,
    /// Moon altitude in degrees.
    pub moon_altitude_deg: f64,
}

impl<E: Ephemeris, S: SkyBrightnessSource> VisibilityEngine<E, S> {
    /// Scans a forecast window starting at the observer's instant.
    ///
    /// The light-pollution baseline is location-only, so it is captured
    /// once at scan start and combined with a fresh moon term at every
    /// step. Points outside astronomical
    /// twilight get an exact zero rate without any shower or
    /// limiting-magnitude work; moon altitude and illumination are still
    /// reported for every point.
    ///
    /// The returned series has exactly [`ScanConfig::points`] entries,
    /// strictly increasing in time, the first at the observer's instant.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::SkyBrightnessUnavailable`] when the
    /// initial light-pollution lookup fails.
    pub fn scan(
        &mut self,
        observer: &Observer,
        config: &ScanConfig,
    ) -> Result<Vec<ForecastPoint>, VisibilityError> {
        let baseline =
            self.baseline_sky_mag(observer.latitude_deg(), observer.longitude_deg())?;

        let n_points = config.points();
        let mut points = Vec::with_capacity(n_points);

        for step in 0..n_points {
            let instant = observer.instant()
                + Duration::minutes(step as i64 * config.step_minutes() as i64);
            let sun = self.ephemeris().sun_position(
                instant,
                observer.latitude_deg(),
                observer.longitude_deg(),
            );
            let moon = self.ephemeris().moon_position(
                instant,
                observer.latitude_deg(),
                observer.longitude_deg(),
            );

            let hourly_rate = if is_astronomical_twilight(sun.altitude_deg) {
                let moon_sky = moon
                    .is_up()
                    .then(|| moon_sky_brightness(moon.illuminated_fraction));
                let conditions = SkyConditions::new(baseline, moon_sky, true);
                let limiting = limiting_magnitude(&conditions);
                let at = observer.with_instant(instant);
                let solar_lon = self.ephemeris().solar_longitude(instant);
                self.total_rate(&at, solar_lon, limiting)
            } else {
                0.0
            };

            points.push(ForecastPoint {
                instant,
                hourly_rate,
                sun_altitude_deg: sun.altitude_deg,
                moon_illuminated_fraction: moon.illuminated_fraction,
                moon_altitude_deg: moon.altitude_deg,
            });
        }

        info!(
            n_points = points.len(),
            step_minutes = config.step_minutes(),
            total_hours = config.total_hours(),
            "forecast scan complete"
        );
        Ok(points)
    }
}

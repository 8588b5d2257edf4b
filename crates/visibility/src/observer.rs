//! The observer: where and when.

use chrono::{DateTime, Utc};

use crate::error::VisibilityError;

/// An observing site at an instant in time.
///
/// Coordinates are validated at construction, so the engine can treat an
/// `Observer` as total input. The instant is the only part that changes
/// during a scan; everything else is fixed per calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    instant: DateTime<Utc>,
}

impl Observer {
    /// Creates a validated observer.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::InvalidObserver`] when latitude is outside
    /// [-90, 90], longitude is outside [-180, 180], or elevation is negative
    /// or non-finite.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        instant: DateTime<Utc>,
    ) -> Result<Self, VisibilityError> {
        let fail = |reason: String| VisibilityError::InvalidObserver { reason };

        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(fail(format!("latitude {latitude_deg} outside [-90, 90]")));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(fail(format!("longitude {longitude_deg} outside [-180, 180]")));
        }
        if !elevation_m.is_finite() || elevation_m < 0.0 {
            return Err(fail(format!("elevation {elevation_m} must be >= 0 meters")));
        }

        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            instant,
        })
    }

    /// Returns the latitude in signed degrees.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Returns the longitude in signed degrees (negative = West).
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Returns the elevation in meters.
    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    /// Returns the observation instant (UTC).
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Returns a copy of this observer at a different instant.
    pub fn with_instant(&self, instant: DateTime<Utc>) -> Self {
        Self { instant, ..*self }
    }

    /// Moves this observer's instant, keeping the site fixed.
    pub fn set_instant(&mut self, instant: DateTime<Utc>) {
        self.instant = instant;
    }
}

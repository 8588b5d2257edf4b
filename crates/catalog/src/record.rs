//! A single meteor shower record.

use serde::Deserialize;

use crate::error::CatalogError;

/// Parameters of one meteor shower, as published in annual working lists.
///
/// Radiant coordinates are J2000 degrees. The peak position on the activity
/// calendar is expressed as solar longitude rather than a calendar date, so
/// the record stays valid from year to year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowerRecord {
    /// Three-letter IAU shower code, e.g. "PER".
    code: String,
    /// Human-readable shower name.
    name: String,
    /// Radiant right ascension in degrees (0..360).
    radiant_ra_deg: f64,
    /// Radiant declination in degrees (-90..=90).
    radiant_dec_deg: f64,
    /// Population index r (> 1). Higher r means relatively more faint meteors.
    population_index: f64,
    /// Zenithal hourly rate at peak (meteors/hour, > 0).
    max_zhr: f64,
    /// Solar longitude of the activity peak in degrees (0..360).
    peak_solar_lon_deg: f64,
}

impl ShowerRecord {
    /// Creates a record from raw parts. The caller is expected to run
    /// [`validate`](Self::validate) before handing the record to a catalog.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        radiant_ra_deg: f64,
        radiant_dec_deg: f64,
        population_index: f64,
        max_zhr: f64,
        peak_solar_lon_deg: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            radiant_ra_deg,
            radiant_dec_deg,
            population_index,
            max_zhr,
            peak_solar_lon_deg,
        }
    }

    /// Returns the IAU shower code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the shower name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the radiant right ascension in degrees.
    pub fn radiant_ra_deg(&self) -> f64 {
        self.radiant_ra_deg
    }

    /// Returns the radiant declination in degrees.
    pub fn radiant_dec_deg(&self) -> f64 {
        self.radiant_dec_deg
    }

    /// Returns the population index r.
    pub fn population_index(&self) -> f64 {
        self.population_index
    }

    /// Returns the zenithal hourly rate at peak.
    pub fn max_zhr(&self) -> f64 {
        self.max_zhr
    }

    /// Returns the solar longitude of the activity peak in degrees.
    pub fn peak_solar_lon_deg(&self) -> f64 {
        self.peak_solar_lon_deg
    }

    /// Validates the record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecord`] when any field is outside its
    /// documented domain.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fail = |reason: String| CatalogError::InvalidRecord {
            code: self.code.clone(),
            reason,
        };

        if self.code.trim().is_empty() {
            return Err(fail("code must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(fail("name must not be empty".into()));
        }
        if !self.radiant_ra_deg.is_finite() || !(0.0..360.0).contains(&self.radiant_ra_deg) {
            return Err(fail(format!(
                "radiant right ascension must be in [0, 360), got {}",
                self.radiant_ra_deg
            )));
        }
        if !self.radiant_dec_deg.is_finite() || !(-90.0..=90.0).contains(&self.radiant_dec_deg) {
            return Err(fail(format!(
                "radiant declination must be in [-90, 90], got {}",
                self.radiant_dec_deg
            )));
        }
        if !self.population_index.is_finite() || self.population_index <= 1.0 {
            return Err(fail(format!(
                "population index must be finite and > 1, got {}",
                self.population_index
            )));
        }
        if !self.max_zhr.is_finite() || self.max_zhr <= 0.0 {
            return Err(fail(format!(
                "max ZHR must be finite and > 0, got {}",
                self.max_zhr
            )));
        }
        if !self.peak_solar_lon_deg.is_finite() || !(0.0..360.0).contains(&self.peak_solar_lon_deg)
        {
            return Err(fail(format!(
                "peak solar longitude must be in [0, 360), got {}",
                self.peak_solar_lon_deg
            )));
        }
        Ok(())
    }
}

//! The visibility aggregator.

use chrono::Datelike;
use tracing::{debug, trace};

use meteoreo_activity::ActivityCurve;
use meteoreo_catalog::{ShowerCatalog, ShowerRecord};
use meteoreo_ephemeris::Ephemeris;
use meteoreo_lightpollution::SkyBrightnessSource;
use meteoreo_skyquality::{
    effective_sky_magnitude, is_astronomical_twilight, limiting_magnitude, moon_sky_brightness,
    BortleClass, SkyConditions, LIMITING_MAG_CAP,
};

use crate::error::VisibilityError;
use crate::observer::Observer;
use crate::result::{ActiveShower, MoonReport, VisibilityResult};

/// Population index assumed for the sporadic background (anthelion-source
/// convention).
const SPORADIC_POPULATION_INDEX: f64 = 3.0;

/// One catalog shower with its prebuilt activity curve.
#[derive(Debug, Clone)]
pub(crate) struct ShowerEntry {
    pub(crate) record: ShowerRecord,
    pub(crate) curve: ActivityCurve,
}

/// Cached light-pollution baseline for one location.
#[derive(Debug, Clone, Copy)]
struct BaselineCache {
    latitude_deg: f64,
    longitude_deg: f64,
    sky_mag: f64,
}

/// The meteor visibility prediction engine.
///
/// Owns the shower table (with curves built once at construction), the two
/// collaborators, and the per-location light-pollution cache. One engine per
/// observer site is the expected shape; engines share no state, so separate
/// instances may serve concurrent observers.
#[derive(Debug)]
pub struct VisibilityEngine<E, S> {
    ephemeris: E,
    sky_source: S,
    showers: Vec<ShowerEntry>,
    baseline: Option<BaselineCache>,
}

impl<E: Ephemeris, S: SkyBrightnessSource> VisibilityEngine<E, S> {
    /// Builds an engine over a catalog and its collaborators.
    ///
    /// Activity curves are derived here, once per shower.
    pub fn new(catalog: &ShowerCatalog, ephemeris: E, sky_source: S) -> Self {
        let showers = catalog
            .iter()
            .map(|record| ShowerEntry {
                curve: ActivityCurve::for_shower(record),
                record: record.clone(),
            })
            .collect();
        Self {
            ephemeris,
            sky_source,
            showers,
            baseline: None,
        }
    }

    /// Returns the engine's ephemeris collaborator.
    pub(crate) fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Drops the cached light-pollution baseline.
    ///
    /// The baseline is location-only and cached for the engine's lifetime;
    /// callers wanting a fresh lookup (for example after a long-running
    /// process moves sites) must bypass the cache explicitly with this.
    pub fn refresh_light_pollution(&mut self) {
        self.baseline = None;
    }

    /// Predicts the visible-meteor rate for an observer, meteors/hour.
    ///
    /// Outside astronomical twilight this returns exactly `0.0` without
    /// consulting the sky-brightness source: the limiting-magnitude model
    /// pins the rate to a negligible value there, and the engine
    /// special-cases it to a true zero for determinism.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::SkyBrightnessUnavailable`] when the
    /// light-pollution lookup fails. No default is substituted.
    pub fn predict(&mut self, observer: &Observer) -> Result<f64, VisibilityError> {
        let sun = self.ephemeris.sun_position(
            observer.instant(),
            observer.latitude_deg(),
            observer.longitude_deg(),
        );
        if !is_astronomical_twilight(sun.altitude_deg) {
            debug!(
                sun_altitude_deg = sun.altitude_deg,
                "not astronomical twilight, rate is zero"
            );
            return Ok(0.0);
        }

        let limiting = self.limiting_now(observer)?;
        let solar_lon = self.ephemeris.solar_longitude(observer.instant());
        Ok(self.total_rate(observer, solar_lon, limiting))
    }

    /// Predicts the rate plus the auxiliary report (active showers, Bortle
    /// class, moon state).
    ///
    /// Unlike [`predict`](Self::predict), this always needs the
    /// light-pollution baseline (the Bortle class is part of the report),
    /// so a failing lookup is an error even in daylight.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::SkyBrightnessUnavailable`] when the
    /// light-pollution lookup fails.
    pub fn predict_with_info(
        &mut self,
        observer: &Observer,
    ) -> Result<VisibilityResult, VisibilityError> {
        let sun = self.ephemeris.sun_position(
            observer.instant(),
            observer.latitude_deg(),
            observer.longitude_deg(),
        );
        let twilight = is_astronomical_twilight(sun.altitude_deg);

        let baseline =
            self.baseline_sky_mag(observer.latitude_deg(), observer.longitude_deg())?;
        let moon = self.ephemeris.moon_position(
            observer.instant(),
            observer.latitude_deg(),
            observer.longitude_deg(),
        );
        let moon_sky = moon
            .is_up()
            .then(|| moon_sky_brightness(moon.illuminated_fraction));

        let bortle = BortleClass::from_sky_magnitude(effective_sky_magnitude(baseline, moon_sky));

        let solar_lon = self.ephemeris.solar_longitude(observer.instant());
        let active: Vec<ActiveShower> = self
            .showers
            .iter()
            .filter(|entry| entry.curve.rate_at(solar_lon).round() > 0.0)
            .map(|entry| ActiveShower {
                code: entry.record.code().to_string(),
                name: entry.record.name().to_string(),
            })
            .collect();

        let hourly_rate = if twilight {
            let conditions = SkyConditions::new(baseline, moon_sky, true);
            self.total_rate(observer, solar_lon, limiting_magnitude(&conditions))
        } else {
            0.0
        };

        Ok(VisibilityResult::new(
            hourly_rate,
            active,
            bortle,
            MoonReport {
                up: moon.is_up(),
                illuminated_fraction: moon.illuminated_fraction,
            },
        ))
    }

    /// Returns the limiting magnitude for an observer known to be in
    /// astronomical twilight.
    pub(crate) fn limiting_now(&mut self, observer: &Observer) -> Result<f64, VisibilityError> {
        let baseline =
            self.baseline_sky_mag(observer.latitude_deg(), observer.longitude_deg())?;
        let moon = self.ephemeris.moon_position(
            observer.instant(),
            observer.latitude_deg(),
            observer.longitude_deg(),
        );
        let moon_sky = moon
            .is_up()
            .then(|| moon_sky_brightness(moon.illuminated_fraction));
        let conditions = SkyConditions::new(baseline, moon_sky, true);
        Ok(limiting_magnitude(&conditions))
    }

    /// Fetches or reuses the cached light-pollution baseline.
    pub(crate) fn baseline_sky_mag(
        &mut self,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, VisibilityError> {
        if let Some(cached) = self.baseline {
            if cached.latitude_deg == latitude_deg && cached.longitude_deg == longitude_deg {
                return Ok(cached.sky_mag);
            }
        }
        let sky_mag = self.sky_source.brightness(latitude_deg, longitude_deg)?;
        self.baseline = Some(BaselineCache {
            latitude_deg,
            longitude_deg,
            sky_mag,
        });
        Ok(sky_mag)
    }

    /// Sums the shower and sporadic contributions for one instant.
    ///
    /// Per shower: the activity rate scaled by `sin(radiant altitude)` and
    /// divided by `r^(6.5 - limiting_mag)`; a radiant at or below the
    /// horizon contributes nothing. The sporadic background assumes a
    /// zenith radiant and population index 3.
    pub(crate) fn total_rate(
        &self,
        observer: &Observer,
        solar_lon_deg: f64,
        limiting_mag: f64,
    ) -> f64 {
        let dimming_exponent = LIMITING_MAG_CAP - limiting_mag;

        let mut total = 0.0;
        for entry in &self.showers {
            let rate = entry.curve.rate_at(solar_lon_deg);
            let altitude_deg = self.ephemeris.radiant_altitude(
                observer.instant(),
                observer.latitude_deg(),
                observer.longitude_deg(),
                entry.record.radiant_ra_deg(),
                entry.record.radiant_dec_deg(),
            );
            if altitude_deg <= 0.0 {
                trace!(code = entry.record.code(), altitude_deg, "radiant below horizon");
                continue;
            }
            let contribution = rate * altitude_deg.to_radians().sin()
                / entry.record.population_index().powf(dimming_exponent);
            trace!(
                code = entry.record.code(),
                rate,
                altitude_deg,
                contribution,
                "shower contribution"
            );
            total += contribution;
        }

        let month = observer.instant().month() as u8;
        let sporadic = meteoreo_sporadic::background_rate(month, observer.latitude_deg())
            / SPORADIC_POPULATION_INDEX.powf(dimming_exponent);
        debug!(total, sporadic, limiting_mag, "aggregated hourly rate");

        total + sporadic
    }
}

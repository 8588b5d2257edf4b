//! The ephemeris seam between the engine and celestial mechanics.

use chrono::{DateTime, Utc};

use crate::horizontal;
use crate::julian::{julian_century, julian_date};
use crate::lunar;
use crate::solar;
use crate::types::{MoonPosition, SunPosition};

/// Celestial geometry needed by the visibility engine.
///
/// All methods are total. Implementations must report altitudes in degrees
/// and illumination as a fraction in 0..=1. The engine is generic over this
/// trait so tests can substitute a deterministic fake.
pub trait Ephemeris {
    /// Sun altitude and right ascension for an observer.
    fn sun_position(
        &self,
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> SunPosition;

    /// Moon altitude and illuminated fraction for an observer.
    fn moon_position(
        &self,
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> MoonPosition;

    /// Altitude of a fixed equatorial point (a shower radiant) for an observer.
    fn radiant_altitude(
        &self,
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
        ra_deg: f64,
        dec_deg: f64,
    ) -> f64;

    /// Solar longitude on the linear activity calendar, degrees in [0, 360).
    fn solar_longitude(&self, instant: DateTime<Utc>) -> f64;
}

/// Built-in [`Ephemeris`] backed by low-precision Meeus series.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusEphemeris;

impl MeeusEphemeris {
    /// Creates the built-in provider.
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for MeeusEphemeris {
    fn sun_position(
        &self,
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> SunPosition {
        let jd = julian_date(instant);
        let t = julian_century(jd);
        let (ra, dec) = solar::sun_equatorial(t);
        let lst = horizontal::local_sidereal(jd, longitude_deg);
        SunPosition {
            altitude_deg: horizontal::altitude_deg(ra, dec, latitude_deg, lst),
            right_ascension_deg: ra,
        }
    }

    fn moon_position(
        &self,
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> MoonPosition {
        let jd = julian_date(instant);
        let t = julian_century(jd);
        let (moon_lon, moon_lat) = lunar::moon_ecliptic(t);
        let (ra, dec) = solar::ecliptic_to_equatorial(moon_lon, moon_lat, solar::mean_obliquity(t));
        let lst = horizontal::local_sidereal(jd, longitude_deg);
        MoonPosition {
            altitude_deg: horizontal::altitude_deg(ra, dec, latitude_deg, lst),
            illuminated_fraction: lunar::illuminated_fraction(t),
        }
    }

    fn radiant_altitude(
        &self,
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
        ra_deg: f64,
        dec_deg: f64,
    ) -> f64 {
        let jd = julian_date(instant);
        let lst = horizontal::local_sidereal(jd, longitude_deg);
        horizontal::altitude_deg(ra_deg, dec_deg, latitude_deg, lst)
    }

    fn solar_longitude(&self, instant: DateTime<Utc>) -> f64 {
        solar::linear_solar_longitude(julian_date(instant))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const NEW_HAVEN_LAT: f64 = 41.3083;
    const NEW_HAVEN_LON: f64 = -72.9279;

    #[test]
    fn sun_high_at_summer_noon() {
        // Solar noon in New Haven on the June solstice is close to 16:52 UTC;
        // the sun culminates near 72 degrees.
        let eph = MeeusEphemeris::new();
        let noon = Utc.with_ymd_and_hms(2024, 6, 20, 16, 52, 0).unwrap();
        let sun = eph.sun_position(noon, NEW_HAVEN_LAT, NEW_HAVEN_LON);
        assert!(sun.altitude_deg > 60.0, "altitude = {}", sun.altitude_deg);
    }

    #[test]
    fn sun_deep_below_horizon_at_summer_midnight() {
        let eph = MeeusEphemeris::new();
        let midnight = Utc.with_ymd_and_hms(2024, 6, 21, 4, 52, 0).unwrap();
        let sun = eph.sun_position(midnight, NEW_HAVEN_LAT, NEW_HAVEN_LON);
        assert!(sun.altitude_deg < -20.0, "altitude = {}", sun.altitude_deg);
    }

    #[test]
    fn moon_nearly_full_at_known_full_moon() {
        let eph = MeeusEphemeris::new();
        let full = Utc.with_ymd_and_hms(2024, 4, 23, 23, 49, 0).unwrap();
        let moon = eph.moon_position(full, NEW_HAVEN_LAT, NEW_HAVEN_LON);
        assert!(
            moon.illuminated_fraction > 0.97,
            "fraction = {}",
            moon.illuminated_fraction
        );
    }

    #[test]
    fn moon_nearly_new_at_known_new_moon() {
        let eph = MeeusEphemeris::new();
        let new = Utc.with_ymd_and_hms(2024, 4, 8, 18, 21, 0).unwrap();
        let moon = eph.moon_position(new, NEW_HAVEN_LAT, NEW_HAVEN_LON);
        assert!(
            moon.illuminated_fraction < 0.03,
            "fraction = {}",
            moon.illuminated_fraction
        );
    }

    #[test]
    fn near_polar_radiant_altitude_tracks_latitude() {
        // A radiant within a degree of the celestial pole sits near the
        // observer's latitude at any hour.
        let eph = MeeusEphemeris::new();
        for hour in [0, 6, 12, 18] {
            let instant = Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap();
            let alt =
                eph.radiant_altitude(instant, NEW_HAVEN_LAT, NEW_HAVEN_LON, 37.95, 89.26);
            assert!(
                (alt - NEW_HAVEN_LAT).abs() < 1.0,
                "altitude = {alt} at hour {hour}"
            );
        }
    }

    #[test]
    fn solar_longitude_in_range_and_advancing() {
        let eph = MeeusEphemeris::new();
        let aug_1 = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
        let aug_12 = Utc.with_ymd_and_hms(2024, 8, 12, 0, 0, 0).unwrap();
        let lon_1 = eph.solar_longitude(aug_1);
        let lon_12 = eph.solar_longitude(aug_12);
        assert!((0.0..360.0).contains(&lon_1));
        // Around the Perseid peak in mid-August the calendar reads ~139-140.
        assert!((135.0..145.0).contains(&lon_12), "lon = {lon_12}");
        assert!(lon_12 > lon_1);
    }
}

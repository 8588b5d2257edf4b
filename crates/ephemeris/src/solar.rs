//! Low-precision solar position (Meeus Ch. 25).

use crate::julian::{normalize_degrees, J2000};

/// Geometric mean longitude of the sun, degrees.
pub(crate) fn mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t)
}

/// Mean anomaly of the sun, degrees.
pub(crate) fn mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.52911 + 35999.05029 * t - 0.0001537 * t * t)
}

/// Equation of center, degrees.
fn equation_of_center(t: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// True ecliptic longitude of the sun, degrees.
pub(crate) fn true_longitude(t: f64) -> f64 {
    normalize_degrees(mean_longitude(t) + equation_of_center(t, mean_anomaly(t)))
}

/// Mean obliquity of the ecliptic, degrees.
pub(crate) fn mean_obliquity(t: f64) -> f64 {
    23.439_291_1 - 0.013_004_2 * t
}

/// Converts ecliptic (longitude, latitude) to equatorial (RA, Dec), degrees.
pub(crate) fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let obl = obliquity_deg.to_radians();

    let ra = (lon.sin() * obl.cos() - lat.tan() * obl.sin()).atan2(lon.cos());
    let dec = (lat.sin() * obl.cos() + lat.cos() * obl.sin() * lon.sin()).asin();

    (normalize_degrees(ra.to_degrees()), dec.to_degrees())
}

/// Equatorial (RA, Dec) of the sun, degrees.
pub(crate) fn sun_equatorial(t: f64) -> (f64, f64) {
    ecliptic_to_equatorial(true_longitude(t), 0.0, mean_obliquity(t))
}

/// Solar longitude on the linear activity calendar, degrees.
///
/// This is the sun's *mean* longitude, which advances uniformly at
/// 360 degrees per tropical year. It deliberately skips the equation of
/// center: the activity model treats solar motion as linear in time, and
/// the sub-two-degree error is small against the five-day shower sigma.
pub(crate) fn linear_solar_longitude(jd: f64) -> f64 {
    normalize_degrees(280.46646 + 0.985_647_36 * (jd - J2000))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linear_longitude_at_j2000() {
        assert_relative_eq!(linear_solar_longitude(J2000), 280.46646, epsilon = 1e-9);
    }

    #[test]
    fn linear_longitude_daily_motion() {
        let a = linear_solar_longitude(J2000 + 100.0);
        let b = linear_solar_longitude(J2000 + 101.0);
        assert_relative_eq!(normalize_degrees(b - a), 0.985_647_36, epsilon = 1e-9);
    }

    #[test]
    fn sun_ra_at_j2000() {
        // The sun's apparent RA at J2000.0 is close to 281.3 degrees.
        let (ra, dec) = sun_equatorial(0.0);
        assert!((280.0..282.0).contains(&ra), "ra = {ra}");
        assert!((-24.0..-22.0).contains(&dec), "dec = {dec}");
    }

    #[test]
    fn obliquity_near_23_44() {
        assert_relative_eq!(mean_obliquity(0.0), 23.4392911, epsilon = 1e-6);
    }
}

//! Low-precision lunar position and illumination (Meeus Ch. 47/48).
//!
//! Uses only the dominant periodic terms, which keeps the moon's ecliptic
//! position within about half a degree of the full series. Distance and
//! topocentric parallax are not modeled.

use crate::julian::normalize_degrees;
use crate::solar;

/// Moon mean longitude L', degrees.
fn mean_longitude(t: f64) -> f64 {
    normalize_degrees(218.316_447_7 + 481_267.881_234_21 * t)
}

/// Moon mean elongation D, degrees.
fn mean_elongation(t: f64) -> f64 {
    normalize_degrees(297.850_192_1 + 445_267.111_403_4 * t)
}

/// Moon mean anomaly M', degrees.
fn mean_anomaly(t: f64) -> f64 {
    normalize_degrees(134.963_396_4 + 477_198.867_505_5 * t)
}

/// Moon argument of latitude F, degrees.
fn argument_of_latitude(t: f64) -> f64 {
    normalize_degrees(93.272_095_0 + 483_202.017_523_3 * t)
}

/// Ecliptic (longitude, latitude) of the moon in degrees.
pub(crate) fn moon_ecliptic(t: f64) -> (f64, f64) {
    let lp = mean_longitude(t);
    let d = mean_elongation(t).to_radians();
    let m = solar::mean_anomaly(t).to_radians();
    let mp = mean_anomaly(t).to_radians();
    let f = argument_of_latitude(t).to_radians();

    // Dominant longitude terms, coefficients in degrees.
    let lon_correction = 6.288774 * mp.sin()
        + 1.274027 * (2.0 * d - mp).sin()
        + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * mp).sin()
        - 0.185116 * m.sin()
        - 0.114332 * (2.0 * f).sin()
        + 0.058793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057066 * (2.0 * d - m - mp).sin()
        + 0.053322 * (2.0 * d + mp).sin()
        + 0.045758 * (2.0 * d - m).sin();

    // Dominant latitude terms, coefficients in degrees.
    let lat = 5.128122 * f.sin()
        + 0.280602 * (mp + f).sin()
        + 0.277693 * (mp - f).sin()
        + 0.173237 * (2.0 * d - f).sin()
        + 0.055413 * (2.0 * d - mp + f).sin()
        + 0.046271 * (2.0 * d - mp - f).sin();

    (normalize_degrees(lp + lon_correction), lat)
}

/// Fraction of the moon's disk that is illuminated, 0..=1.
///
/// Derived from the sun-moon elongation: zero at conjunction (new moon),
/// one at opposition (full moon).
pub(crate) fn illuminated_fraction(t: f64) -> f64 {
    let (moon_lon, moon_lat) = moon_ecliptic(t);
    let sun_lon = solar::true_longitude(t);

    let delta_lon = (moon_lon - sun_lon).to_radians();
    let lat = moon_lat.to_radians();
    let cos_elongation = (lat.cos() * delta_lon.cos()).clamp(-1.0, 1.0);

    ((1.0 - cos_elongation) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_stays_within_orbit_inclination_band() {
        // The moon never strays more than ~5.7 degrees from the ecliptic.
        for day in 0..60 {
            let t = day as f64 / 36_525.0;
            let (_, lat) = moon_ecliptic(t);
            assert!(lat.abs() < 6.0, "latitude {lat} out of band at t={t}");
        }
    }

    #[test]
    fn illumination_is_a_fraction() {
        for day in 0..60 {
            let t = day as f64 / 36_525.0;
            let k = illuminated_fraction(t);
            assert!((0.0..=1.0).contains(&k), "fraction {k} out of range");
        }
    }

    #[test]
    fn illumination_cycles_over_a_synodic_month() {
        // Across one synodic month (~29.53 days) the fraction must visit
        // both a near-new and a near-full state.
        let mut min_k = f64::INFINITY;
        let mut max_k = f64::NEG_INFINITY;
        for step in 0..300 {
            let t = step as f64 * 0.1 / 36_525.0;
            let k = illuminated_fraction(t);
            min_k = min_k.min(k);
            max_k = max_k.max(k);
        }
        assert!(min_k < 0.05, "never saw a new moon, min {min_k}");
        assert!(max_k > 0.95, "never saw a full moon, max {max_k}");
    }
}

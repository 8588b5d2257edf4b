//! Julian date plumbing.

use chrono::{DateTime, Utc};

/// Julian date of the J2000.0 epoch.
pub(crate) const J2000: f64 = 2_451_545.0;

/// Converts a UTC instant to a Julian date.
pub(crate) fn julian_date(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 86_400_000.0 + 2_440_587.5
}

/// Julian centuries since J2000.0.
pub(crate) fn julian_century(jd: f64) -> f64 {
    (jd - J2000) / 36_525.0
}

/// Wraps an angle in degrees into [0, 360).
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn j2000_epoch() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_relative_eq!(julian_date(epoch), J2000, epsilon = 1e-9);
        assert_relative_eq!(julian_century(julian_date(epoch)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn unix_epoch() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_relative_eq!(julian_date(epoch), 2_440_587.5, epsilon = 1e-9);
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_relative_eq!(normalize_degrees(365.0), 5.0);
        assert_relative_eq!(normalize_degrees(-10.0), 350.0);
        assert_relative_eq!(normalize_degrees(720.0), 0.0);
    }
}

//! Equatorial to horizontal conversion.

use crate::julian::{normalize_degrees, J2000};

/// Greenwich mean sidereal time in degrees.
fn greenwich_sidereal(jd: f64) -> f64 {
    normalize_degrees(280.460_618_37 + 360.985_647_366_29 * (jd - J2000))
}

/// Local sidereal time in degrees for an observer longitude (east positive).
pub(crate) fn local_sidereal(jd: f64, longitude_deg: f64) -> f64 {
    normalize_degrees(greenwich_sidereal(jd) + longitude_deg)
}

/// Altitude of an equatorial position above the observer's horizon, degrees.
pub(crate) fn altitude_deg(ra_deg: f64, dec_deg: f64, latitude_deg: f64, lst_deg: f64) -> f64 {
    let hour_angle = (lst_deg - ra_deg).to_radians();
    let dec = dec_deg.to_radians();
    let lat = latitude_deg.to_radians();

    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos();
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

//! Limiting magnitude from sky brightness.

use tracing::debug;

/// Sun altitude at or below which astronomical twilight holds, in degrees.
pub const ASTRONOMICAL_TWILIGHT_SUN_ALT_DEG: f64 = -18.0;

/// Upper bound on the limiting magnitude used in rate math.
///
/// The local-ZHR correction is only defined for limiting magnitudes of 6.5
/// and brighter, so darker skies are capped here rather than fed through.
pub const LIMITING_MAG_CAP: f64 = 6.5;

/// Sky-brightness tier table: (SQM threshold in mag/arcsec², limiting magnitude).
///
/// A sky at or above a row's threshold gets that row's limiting magnitude;
/// anything below the last threshold falls into the dimmest tier. The
/// thresholds follow the Bortle-class boundaries.
#[rustfmt::skip]
const SQM_TIERS: [(f64, f64); 7] = [
    (21.75, 7.6),
    (21.60, 7.1),
    (21.45, 6.6),
    (20.55, 6.1),
    (19.25, 5.6),
    (18.50, 5.1),
    (18.00, 4.6),
];

/// Limiting magnitude of the dimmest tier (Bortle classes 8 and 9).
const DIMMEST_TIER_LIMITING_MAG: f64 = 4.0;

/// Sky conditions feeding the limiting-magnitude derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyConditions {
    /// Light-pollution baseline in mag/arcsec² (higher = darker).
    light_pollution_mag: f64,
    /// Moon sky glow in mag/arcsec², or `None` when the moon is below the horizon.
    moon_sky_mag: Option<f64>,
    /// Whether the sun is at or below astronomical twilight altitude.
    astronomical_twilight: bool,
}

impl SkyConditions {
    /// Bundles the inputs to [`limiting_magnitude`].
    pub fn new(
        light_pollution_mag: f64,
        moon_sky_mag: Option<f64>,
        astronomical_twilight: bool,
    ) -> Self {
        Self {
            light_pollution_mag,
            moon_sky_mag,
            astronomical_twilight,
        }
    }

    /// Returns the light-pollution baseline in mag/arcsec².
    pub fn light_pollution_mag(&self) -> f64 {
        self.light_pollution_mag
    }

    /// Returns the moon sky glow in mag/arcsec², if the moon is up.
    pub fn moon_sky_mag(&self) -> Option<f64> {
        self.moon_sky_mag
    }

    /// Returns whether astronomical twilight holds.
    pub fn astronomical_twilight(&self) -> bool {
        self.astronomical_twilight
    }
}

/// Returns `true` when the sun is low enough for faint-object visibility.
pub fn is_astronomical_twilight(sun_altitude_deg: f64) -> bool {
    sun_altitude_deg <= ASTRONOMICAL_TWILIGHT_SUN_ALT_DEG
}

/// Combines the light-pollution baseline with the moon's glow.
///
/// Whichever source is brighter wins: a lower magnitude number means a
/// brighter sky, so this is the minimum of the two values. A moon below
/// the horizon (`None`) leaves the baseline untouched.
pub fn effective_sky_magnitude(light_pollution_mag: f64, moon_sky_mag: Option<f64>) -> f64 {
    match moon_sky_mag {
        Some(moon) if moon < light_pollution_mag => moon,
        _ => light_pollution_mag,
    }
}

/// Maps a sky magnitude to the limiting magnitude of its tier, uncapped.
///
/// Monotonically non-decreasing in the sky magnitude: a darker sky never
/// lowers the limiting magnitude.
pub fn tier_limiting_magnitude(sky_mag: f64) -> f64 {
    for &(threshold, limiting) in &SQM_TIERS {
        if sky_mag >= threshold {
            return limiting;
        }
    }
    DIMMEST_TIER_LIMITING_MAG
}

/// Derives the limiting magnitude used by the rate math.
///
/// Outside astronomical twilight this returns 0.0, an explicit full-stop
/// value that the engine treats as "no meteors visible" rather than an
/// error. Otherwise the brighter of the light-pollution and moon skies is
/// pushed through the tier table and capped at [`LIMITING_MAG_CAP`].
pub fn limiting_magnitude(conditions: &SkyConditions) -> f64 {
    if !conditions.astronomical_twilight() {
        return 0.0;
    }
    let effective =
        effective_sky_magnitude(conditions.light_pollution_mag(), conditions.moon_sky_mag());
    let uncapped = tier_limiting_magnitude(effective);
    let limiting = uncapped.min(LIMITING_MAG_CAP);
    debug!(effective, uncapped, limiting, "derived limiting magnitude");
    limiting
}

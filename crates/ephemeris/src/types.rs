//! Position types returned by an [`Ephemeris`](crate::Ephemeris).

/// Sun position as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Altitude above the horizon in degrees (negative below).
    pub altitude_deg: f64,
    /// Right ascension in degrees.
    pub right_ascension_deg: f64,
}

/// Moon state as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Altitude above the horizon in degrees (negative below).
    pub altitude_deg: f64,
    /// Illuminated fraction of the disk, 0..=1.
    pub illuminated_fraction: f64,
}

impl MoonPosition {
    /// Returns `true` when the moon is above the horizon.
    pub fn is_up(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

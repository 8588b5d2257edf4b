//! Bortle dark-sky class, for display.

use std::fmt;

use crate::limiting::tier_limiting_magnitude;

/// Bortle dark-sky scale class of an observing site.
///
/// Classes 8 and 9 share a tier: the limiting-magnitude table cannot tell
/// an inner-city sky from a city-center one, so they are reported together.
/// Derived from the *uncapped* tier limiting magnitude, independent of the
/// 6.5 cap applied in rate math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BortleClass {
    /// Excellent dark-sky site.
    One,
    /// Typical truly dark site.
    Two,
    /// Rural sky.
    Three,
    /// Rural/suburban transition.
    Four,
    /// Suburban sky.
    Five,
    /// Bright suburban sky.
    Six,
    /// Suburban/urban transition.
    Seven,
    /// City sky (classes 8 and 9 combined).
    EightOrNine,
}

/// Thresholds pairing an uncapped limiting magnitude with its class.
#[rustfmt::skip]
const LIMITING_MAG_CLASSES: [(f64, BortleClass); 7] = [
    (7.6, BortleClass::One),
    (7.1, BortleClass::Two),
    (6.6, BortleClass::Three),
    (6.1, BortleClass::Four),
    (5.6, BortleClass::Five),
    (5.1, BortleClass::Six),
    (4.6, BortleClass::Seven),
];

impl BortleClass {
    /// Classifies an uncapped limiting magnitude.
    pub fn from_limiting_magnitude(limiting_mag: f64) -> Self {
        for &(threshold, class) in &LIMITING_MAG_CLASSES {
            if limiting_mag >= threshold {
                return class;
            }
        }
        BortleClass::EightOrNine
    }

    /// Classifies a sky brightness in mag/arcsec² directly.
    pub fn from_sky_magnitude(sky_mag: f64) -> Self {
        Self::from_limiting_magnitude(tier_limiting_magnitude(sky_mag))
    }

    /// Returns the class number, or `None` for the combined 8/9 tier.
    pub fn number(&self) -> Option<u8> {
        match self {
            BortleClass::One => Some(1),
            BortleClass::Two => Some(2),
            BortleClass::Three => Some(3),
            BortleClass::Four => Some(4),
            BortleClass::Five => Some(5),
            BortleClass::Six => Some(6),
            BortleClass::Seven => Some(7),
            BortleClass::EightOrNine => None,
        }
    }
}

impl fmt::Display for BortleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "class {n}"),
            None => write!(f, "class 8 or 9"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tier_values() {
        assert_eq!(BortleClass::from_limiting_magnitude(7.6), BortleClass::One);
        assert_eq!(BortleClass::from_limiting_magnitude(7.1), BortleClass::Two);
        assert_eq!(BortleClass::from_limiting_magnitude(6.6), BortleClass::Three);
        assert_eq!(BortleClass::from_limiting_magnitude(6.1), BortleClass::Four);
        assert_eq!(BortleClass::from_limiting_magnitude(5.6), BortleClass::Five);
        assert_eq!(BortleClass::from_limiting_magnitude(5.1), BortleClass::Six);
        assert_eq!(BortleClass::from_limiting_magnitude(4.6), BortleClass::Seven);
        assert_eq!(
            BortleClass::from_limiting_magnitude(4.0),
            BortleClass::EightOrNine
        );
    }

    #[test]
    fn classifies_sky_magnitude() {
        assert_eq!(BortleClass::from_sky_magnitude(21.8), BortleClass::One);
        assert_eq!(BortleClass::from_sky_magnitude(19.5), BortleClass::Five);
        assert_eq!(BortleClass::from_sky_magnitude(17.0), BortleClass::EightOrNine);
    }

    #[test]
    fn display_forms() {
        assert_eq!(BortleClass::Four.to_string(), "class 4");
        assert_eq!(BortleClass::EightOrNine.to_string(), "class 8 or 9");
    }

    #[test]
    fn numbers() {
        assert_eq!(BortleClass::One.number(), Some(1));
        assert_eq!(BortleClass::EightOrNine.number(), None);
    }
}

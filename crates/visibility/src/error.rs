//! Error types for the meteoreo-visibility crate.

use meteoreo_lightpollution::LightPollutionError;

/// Error type for all fallible operations in the meteoreo-visibility crate.
///
/// An instant outside astronomical twilight is *not* an error: it is a
/// valid zero-rate state and never appears here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VisibilityError {
    /// Returned when the light-pollution baseline could not be obtained.
    ///
    /// The engine never substitutes a default sky; callers decide whether
    /// to retry or surface the failure.
    #[error("sky brightness unavailable: {0}")]
    SkyBrightnessUnavailable(#[from] LightPollutionError),

    /// Returned when observer coordinates are outside their domain.
    #[error("invalid observer: {reason}")]
    InvalidObserver {
        /// Description of the violated constraint.
        reason: String,
    },

    /// Returned when a scan configuration cannot produce a sensible series.
    #[error("invalid scan configuration: {reason}")]
    InvalidScanConfig {
        /// Description of the violated constraint.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_light_pollution_error() {
        let inner = LightPollutionError::Status { status: 503 };
        let e = VisibilityError::from(inner);
        assert_eq!(
            e.to_string(),
            "sky brightness unavailable: light pollution service returned HTTP 503"
        );
    }

    #[test]
    fn invalid_observer_message() {
        let e = VisibilityError::InvalidObserver {
            reason: "latitude 95 outside [-90, 90]".into(),
        };
        assert_eq!(e.to_string(), "invalid observer: latitude 95 outside [-90, 90]");
    }
}

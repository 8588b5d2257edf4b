//! Error types for the meteoreo-lightpollution crate.

/// Error type for sky-brightness lookups.
///
/// Every variant means the same thing to the engine: the baseline is
/// unavailable and the prediction cannot proceed honestly. The split exists
/// so callers can phrase retry advice.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LightPollutionError {
    /// Returned when the HTTP request could not be sent or completed.
    #[error("light pollution request failed: {reason}")]
    Transport {
        /// Description of the underlying transport failure.
        reason: String,
    },

    /// Returned when the service answered with a non-success status code.
    #[error("light pollution service returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// Returned when the response body was not a brightness value.
    #[error("unreadable light pollution response: {reason}")]
    Malformed {
        /// Description of the decode failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message() {
        let e = LightPollutionError::Status { status: 429 };
        assert_eq!(e.to_string(), "light pollution service returned HTTP 429");
    }

    #[test]
    fn transport_message() {
        let e = LightPollutionError::Transport {
            reason: "connection refused".into(),
        };
        assert_eq!(
            e.to_string(),
            "light pollution request failed: connection refused"
        );
    }
}

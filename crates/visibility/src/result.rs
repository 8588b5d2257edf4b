//! Result types for a single prediction.

use meteoreo_skyquality::BortleClass;

/// One currently-active shower, as reported in a detailed prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveShower {
    /// Three-letter IAU shower code.
    pub code: String,
    /// Human-readable shower name.
    pub name: String,
}

/// Moon state attached to a detailed prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonReport {
    /// Whether the moon is above the horizon.
    pub up: bool,
    /// Illuminated fraction of the disk, 0..=1.
    pub illuminated_fraction: f64,
}

/// Outcome of a detailed visibility prediction.
///
/// Produced fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityResult {
    hourly_rate: f64,
    active_showers: Vec<ActiveShower>,
    bortle: BortleClass,
    moon: MoonReport,
}

impl VisibilityResult {
    /// Assembles a result.
    pub(crate) fn new(
        hourly_rate: f64,
        active_showers: Vec<ActiveShower>,
        bortle: BortleClass,
        moon: MoonReport,
    ) -> Self {
        Self {
            hourly_rate,
            active_showers,
            bortle,
            moon,
        }
    }

    /// Returns the predicted visible-meteor rate in meteors/hour.
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    /// Returns the currently-active showers.
    pub fn active_showers(&self) -> &[ActiveShower] {
        &self.active_showers
    }

    /// Returns the Bortle class of the sky.
    pub fn bortle(&self) -> BortleClass {
        self.bortle
    }

    /// Returns the moon state.
    pub fn moon(&self) -> MoonReport {
        self.moon
    }

    /// Returns a sentence naming the active showers.
    ///
    /// Names are joined serial-comma style; with no active showers a fixed
    /// sentence is returned.
    pub fn active_shower_sentence(&self) -> String {
        let names: Vec<&str> = self
            .active_showers
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        match names.as_slice() {
            [] => "There are no active meteor showers.".to_string(),
            [only] => format!("The {only} shower is active."),
            [first, second] => format!("The {first} and {second} showers are active."),
            [rest @ .., last] => {
                format!("The {}, and {last} showers are active.", rest.join(", "))
            }
        }
    }

    /// Returns a sentence describing the moon.
    pub fn moon_description(&self) -> String {
        if self.moon.up {
            format!(
                "The moon is up and {:.0}% illuminated.",
                self.moon.illuminated_fraction * 100.0
            )
        } else {
            "The moon is below the horizon.".to_string()
        }
    }
}

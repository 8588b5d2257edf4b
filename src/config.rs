use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level meteoreo configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeteoreoConfig {
    /// Light pollution API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Path to a shower catalog CSV.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default observer site.
    #[serde(default)]
    pub observer: ObserverDefaults,
}

/// Default observing site, used when the CLI flags are omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverDefaults {
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees (negative for West).
    pub longitude: Option<f64>,
    /// Elevation in meters.
    pub elevation: Option<f64>,
}

impl MeteoreoConfig {
    /// Loads the configuration file, or falls back to defaults when the
    /// file does not exist. A file that exists but fails to parse is an
    /// error, never silently ignored.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config {}", path.display()))
    }
}

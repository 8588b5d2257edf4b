//! # meteoreo-visibility
//!
//! The meteor visibility prediction engine.
//!
//! Combines the shower activity curves, radiant geometry, the sporadic
//! background, and the sky-quality model into one number: how many meteors
//! an observer should see per hour. A scanner drives the same model across
//! a multi-day window for forecasts.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────┐   ┌──────────────┐   ┌──────────────┐   ┌───────────┐
//!  │ activity    │──▶│ radiant       │──▶│ sky quality   │──▶│ hourly    │
//!  │ (per shower)│   │ altitude      │   │ (limiting mag)│   │ rate      │
//!  └────────────┘   └──────────────┘   └──────────────┘   └───────────┘
//!                        ▲ sporadic background joins at the last step
//! ```
//!
//! The engine is generic over its two collaborators: an
//! [`Ephemeris`](meteoreo_ephemeris::Ephemeris) for celestial geometry and a
//! [`SkyBrightnessSource`](meteoreo_lightpollution::SkyBrightnessSource) for
//! the location-only light-pollution baseline, which is fetched at most once
//! per observer location and cached on the engine.

mod engine;
mod error;
mod observer;
mod result;
mod scan;

pub use engine::VisibilityEngine;
pub use error::VisibilityError;
pub use observer::Observer;
pub use result::{ActiveShower, MoonReport, VisibilityResult};
pub use scan::{ForecastPoint, ScanConfig};

//! # meteoreo-activity
//!
//! Per-shower activity curves over solar longitude.
//!
//! A shower's hourly rate rises and falls around its peak as the Earth
//! crosses the meteoroid stream. This crate models that as a Gaussian
//! centred on the peak solar longitude with a standard deviation equal to
//! five days of solar motion, scaled so the curve tops out at the shower's
//! published maximum ZHR.
//!
//! ## Quick start
//!
//! ```rust
//! use meteoreo_activity::ActivityCurve;
//! use meteoreo_catalog::ShowerCatalog;
//!
//! let catalog = ShowerCatalog::builtin();
//! let perseids = catalog.get("PER").unwrap();
//! let curve = ActivityCurve::for_shower(perseids);
//!
//! // The curve reproduces the published ZHR exactly at the peak.
//! assert_eq!(curve.rate_at(perseids.peak_solar_lon_deg()), 100.0);
//! ```

mod curve;
mod solar;

pub use curve::ActivityCurve;
pub use solar::{days_to_solar_lon, solar_lon_to_days, ACTIVITY_SIGMA_DAYS, TROPICAL_YEAR_DAYS};

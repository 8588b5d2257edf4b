//! # meteoreo-lightpollution
//!
//! Sky-brightness baseline lookup for an observing site.
//!
//! The baseline depends only on location, so callers are expected to cache
//! the value per site; the engine does exactly that. The production source
//! is the lightpollutionmap.info raster service, queried over HTTP with a
//! caller-supplied API key. [`FixedBrightness`] provides an offline source
//! for tests and for users who already know their site's SQM reading.
//!
//! Failures are surfaced as [`LightPollutionError`] and are meant to be
//! propagated: substituting a default sky would silently skew every rate
//! computed from it.

mod client;
mod error;
mod source;

pub use client::{mcd_to_sqm, LightPollutionClient, DARKEST_SKY_MAG, DEFAULT_BASE_URL};
pub use error::LightPollutionError;
pub use source::{FixedBrightness, SkyBrightnessSource};

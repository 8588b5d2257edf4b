//! # meteoreo-skyquality
//!
//! Turns sky brightness into a usable limiting magnitude.
//!
//! The visible-meteor math downstream needs one number: the faintest
//! stellar magnitude an observer can see. This crate derives it from the
//! light-pollution baseline and the moon's contribution, with astronomical
//! twilight as a hard gate.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  twilight     │────▶│ effective sky  │────▶│ tier table + cap │
//!  │  gate         │     │ (min of LP,    │     │ -> limiting mag  │
//!  │               │     │  moon glow)    │     │                  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! Everything here is a total function: out-of-domain interpolation inputs
//! are clamped, never errored.

mod bortle;
mod limiting;
mod moonlight;

pub use bortle::BortleClass;
pub use limiting::{
    effective_sky_magnitude, is_astronomical_twilight, limiting_magnitude,
    tier_limiting_magnitude, SkyConditions, ASTRONOMICAL_TWILIGHT_SUN_ALT_DEG, LIMITING_MAG_CAP,
};
pub use moonlight::{moon_apparent_magnitude, moon_sky_brightness, MOON_SKY_GLOW_OFFSET_MAG};

use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};

use meteoreo_catalog::ShowerCatalog;
use meteoreo_ephemeris::{Ephemeris, MoonPosition, SunPosition};
use meteoreo_lightpollution::{LightPollutionError, SkyBrightnessSource};
use meteoreo_visibility::{Observer, ScanConfig, VisibilityEngine, VisibilityError};

const NEW_HAVEN_LAT: f64 = 41.3083;
const NEW_HAVEN_LON: f64 = -72.9279;
const NEW_HAVEN_ELEV_M: f64 = 18.0;

/// Solar-longitude sigma of the activity curves, degrees.
const SIGMA_DEG: f64 = 5.0 / 365.2422 * 360.0;

/// Deterministic ephemeris returning fixed geometry for every instant.
#[derive(Debug, Clone, Copy)]
struct FakeEphemeris {
    sun_altitude_deg: f64,
    solar_lon_deg: f64,
    radiant_altitude_deg: f64,
    moon_altitude_deg: f64,
    moon_fraction: f64,
}

impl FakeEphemeris {
    /// Dark December night at the Geminid peak, moon down, all radiants at 45°.
    fn geminid_night() -> Self {
        Self {
            sun_altitude_deg: -30.0,
            solar_lon_deg: 262.2,
            radiant_altitude_deg: 45.0,
            moon_altitude_deg: -10.0,
            moon_fraction: 0.5,
        }
    }
}

impl Ephemeris for FakeEphemeris {
    fn sun_position(&self, _: DateTime<Utc>, _: f64, _: f64) -> SunPosition {
        SunPosition {
            altitude_deg: self.sun_altitude_deg,
            right_ascension_deg: 0.0,
        }
    }

    fn moon_position(&self, _: DateTime<Utc>, _: f64, _: f64) -> MoonPosition {
        MoonPosition {
            altitude_deg: self.moon_altitude_deg,
            illuminated_fraction: self.moon_fraction,
        }
    }

    fn radiant_altitude(&self, _: DateTime<Utc>, _: f64, _: f64, _: f64, _: f64) -> f64 {
        self.radiant_altitude_deg
    }

    fn solar_longitude(&self, _: DateTime<Utc>) -> f64 {
        self.solar_lon_deg
    }
}

/// Sky-brightness source that counts its lookups.
#[derive(Debug, Clone)]
struct CountingSource {
    sky_mag: f64,
    calls: Rc<Cell<usize>>,
}

impl CountingSource {
    fn new(sky_mag: f64) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                sky_mag,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl SkyBrightnessSource for CountingSource {
    fn brightness(&self, _: f64, _: f64) -> Result<f64, LightPollutionError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.sky_mag)
    }
}

/// Sky-brightness source that always fails.
#[derive(Debug, Clone, Copy)]
struct FailingSource;

impl SkyBrightnessSource for FailingSource {
    fn brightness(&self, _: f64, _: f64) -> Result<f64, LightPollutionError> {
        Err(LightPollutionError::Status { status: 500 })
    }
}

fn december_night() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 12, 14, 9, 0, 0).unwrap()
}

fn new_haven(instant: DateTime<Utc>) -> Observer {
    Observer::new(NEW_HAVEN_LAT, NEW_HAVEN_LON, NEW_HAVEN_ELEV_M, instant).expect("valid observer")
}

/// Gaussian activity rate for one shower at a solar-longitude distance.
fn activity(zhr: f64, distance_deg: f64) -> f64 {
    zhr * (-(distance_deg * distance_deg) / (2.0 * SIGMA_DEG * SIGMA_DEG)).exp()
}

// ---------------------------------------------------------------------------
// 1. New Haven reference scenario
// ---------------------------------------------------------------------------
#[test]
fn new_haven_reference_value() {
    // Dark site (21.8 mag/arcsec² -> tier 7.6, capped to 6.5), moon down,
    // Geminid peak, every radiant at 45 degrees. With the cap reached the
    // dimming exponent is zero, so each contribution is rate * sin(45°) and
    // the sporadic term is the bare December northern rate.
    let (source, _calls) = CountingSource::new(21.8);
    let mut engine = VisibilityEngine::new(
        &ShowerCatalog::builtin(),
        FakeEphemeris::geminid_night(),
        source,
    );
    let observer = new_haven(december_night());

    let rate = engine.predict(&observer).expect("predict");

    let sin_alt = 45.0f64.to_radians().sin();
    let geminids = activity(150.0, 0.0);
    let ursids = activity(10.0, 270.7 - 262.2);
    let quadrantids = activity(110.0, 283.15 - 262.2);
    let sporadic = 10.0; // northern table, December
    let expected = (geminids + ursids + quadrantids) * sin_alt + sporadic;

    assert_relative_eq!(rate, expected, epsilon = 1e-4);
}

// ---------------------------------------------------------------------------
// 2. Exact zero outside astronomical twilight
// ---------------------------------------------------------------------------
#[test]
fn daylight_rate_is_exactly_zero_without_lookup() {
    let (source, calls) = CountingSource::new(21.8);
    let ephemeris = FakeEphemeris {
        sun_altitude_deg: -10.0,
        ..FakeEphemeris::geminid_night()
    };
    let mut engine = VisibilityEngine::new(&ShowerCatalog::builtin(), ephemeris, source);
    let observer = new_haven(december_night());

    let rate = engine.predict(&observer).expect("predict");

    assert_eq!(rate, 0.0);
    assert_eq!(calls.get(), 0, "no lookup should happen outside twilight");
}

// ---------------------------------------------------------------------------
// 3. Lookup failures propagate
// ---------------------------------------------------------------------------
#[test]
fn lookup_failure_is_surfaced_not_defaulted() {
    let mut engine = VisibilityEngine::new(
        &ShowerCatalog::builtin(),
        FakeEphemeris::geminid_night(),
        FailingSource,
    );
    let observer = new_haven(december_night());

    let err = engine.predict(&observer).unwrap_err();
    assert!(
        matches!(err, VisibilityError::SkyBrightnessUnavailable(_)),
        "got {err:?}"
    );
}

// ---------------------------------------------------------------------------
// 4. Baseline is cached per location
// ---------------------------------------------------------------------------
#[test]
fn baseline_cached_until_refreshed() {
    let (source, calls) = CountingSource::new(21.8);
    let mut engine = VisibilityEngine::new(
        &ShowerCatalog::builtin(),
        FakeEphemeris::geminid_night(),
        source,
    );
    let observer = new_haven(december_night());

    engine.predict(&observer).expect("first predict");
    engine.predict(&observer).expect("second predict");
    assert_eq!(calls.get(), 1, "second predict must reuse the cache");

    engine.refresh_light_pollution();
    engine.predict(&observer).expect("after refresh");
    assert_eq!(calls.get(), 2, "refresh must force a new lookup");
}

// ---------------------------------------------------------------------------
// 5. A bright moon overrides the baseline
// ---------------------------------------------------------------------------
#[test]
fn full_moon_washes_out_a_dark_site() {
    let (source, _calls) = CountingSource::new(21.8);
    let ephemeris = FakeEphemeris {
        moon_altitude_deg: 40.0,
        moon_fraction: 1.0,
        ..FakeEphemeris::geminid_night()
    };
    let mut engine = VisibilityEngine::new(&ShowerCatalog::builtin(), ephemeris, source);
    let observer = new_haven(december_night());

    let rate = engine.predict(&observer).expect("predict");

    // Full moon glow is 17.5 mag/arcsec² -> dimmest tier, limiting mag 4.0,
    // dimming exponent 2.5.
    let sin_alt = 45.0f64.to_radians().sin();
    let dim = |r: f64| r.powf(2.5);
    let geminids = activity(150.0, 0.0) * sin_alt / dim(2.6);
    let ursids = activity(10.0, 270.7 - 262.2) * sin_alt / dim(3.0);
    let quadrantids = activity(110.0, 283.15 - 262.2) * sin_alt / dim(2.1);
    let sporadic = 10.0 / dim(3.0);
    let expected = geminids + ursids + quadrantids + sporadic;

    assert_relative_eq!(rate, expected, epsilon = 1e-4);
}

// ---------------------------------------------------------------------------
// 6. Detailed report
// ---------------------------------------------------------------------------
#[test]
fn detailed_report_names_active_showers() {
    let (source, _calls) = CountingSource::new(21.8);
    let mut engine = VisibilityEngine::new(
        &ShowerCatalog::builtin(),
        FakeEphemeris::geminid_night(),
        source,
    );
    let observer = new_haven(december_night());

    let result = engine.predict_with_info(&observer).expect("predict");

    let codes: Vec<&str> = result
        .active_showers()
        .iter()
        .map(|s| s.code.as_str())
        .collect();
    assert_eq!(codes, ["GEM", "URS"]);
    assert_eq!(
        result.active_shower_sentence(),
        "The Geminids and Ursids showers are active."
    );
    assert_eq!(result.bortle().to_string(), "class 1");
    assert!(!result.moon().up);
    assert_eq!(result.moon_description(), "The moon is below the horizon.");
    assert!(result.hourly_rate() > 100.0);
}

// ---------------------------------------------------------------------------
// 7. Scan shape
// ---------------------------------------------------------------------------
#[test]
fn default_scan_is_288_ordered_points_with_one_lookup() {
    let (source, calls) = CountingSource::new(21.8);
    let mut engine = VisibilityEngine::new(
        &ShowerCatalog::builtin(),
        FakeEphemeris::geminid_night(),
        source,
    );
    let start = december_night();
    let observer = new_haven(start);

    let series = engine
        .scan(&observer, &ScanConfig::default())
        .expect("scan");

    assert_eq!(series.len(), 288);
    assert_eq!(series[0].instant, start);
    for (i, pair) in series.windows(2).enumerate() {
        assert!(
            pair[0].instant < pair[1].instant,
            "series must be strictly increasing at index {i}"
        );
        assert_eq!(
            pair[1].instant - pair[0].instant,
            chrono::Duration::minutes(15)
        );
    }
    assert_eq!(calls.get(), 1, "scan must reuse one baseline lookup");
}

// ---------------------------------------------------------------------------
// 8. Scan points outside twilight
// ---------------------------------------------------------------------------
#[test]
fn scan_daylight_points_are_zero_but_keep_moon_columns() {
    let (source, _calls) = CountingSource::new(21.8);
    let ephemeris = FakeEphemeris {
        sun_altitude_deg: -5.0,
        moon_altitude_deg: 25.0,
        moon_fraction: 0.83,
        ..FakeEphemeris::geminid_night()
    };
    let mut engine = VisibilityEngine::new(&ShowerCatalog::builtin(), ephemeris, source);
    let observer = new_haven(december_night());

    let config = ScanConfig::new(15, 2).expect("config");
    let series = engine.scan(&observer, &config).expect("scan");

    assert_eq!(series.len(), 8);
    for point in &series {
        assert_eq!(point.hourly_rate, 0.0);
        assert_eq!(point.sun_altitude_deg, -5.0);
        assert_eq!(point.moon_altitude_deg, 25.0);
        assert_eq!(point.moon_illuminated_fraction, 0.83);
    }
}

// ---------------------------------------------------------------------------
// 9. Scan matches predict at the same instants
// ---------------------------------------------------------------------------
#[test]
fn scan_rows_agree_with_predict() {
    let (source_a, _) = CountingSource::new(21.8);
    let (source_b, _) = CountingSource::new(21.8);
    let ephemeris = FakeEphemeris::geminid_night();
    let catalog = ShowerCatalog::builtin();

    let mut scanning = VisibilityEngine::new(&catalog, ephemeris, source_a);
    let mut single = VisibilityEngine::new(&catalog, ephemeris, source_b);

    let start = december_night();
    let observer = new_haven(start);
    let config = ScanConfig::new(60, 3).expect("config");
    let series = scanning.scan(&observer, &config).expect("scan");

    for point in &series {
        let there = observer.with_instant(point.instant);
        let rate = single.predict(&there).expect("predict");
        assert_relative_eq!(point.hourly_rate, rate, epsilon = 1e-12);
    }
}

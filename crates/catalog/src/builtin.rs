//! Built-in working list of the major annual meteor showers.

use crate::record::ShowerRecord;

/// Raw built-in shower table.
///
/// Columns: code, name, radiant RA (deg), radiant Dec (deg),
/// population index r, max ZHR, peak solar longitude (deg).
#[rustfmt::skip]
pub(crate) const BUILTIN_SHOWERS: [(&str, &str, f64, f64, f64, f64, f64); 13] = [
    ("QUA", "Quadrantids",             230.0,  48.5, 2.1, 110.0, 283.15),
    ("LYR", "April Lyrids",            271.0,  33.3, 2.1,  18.0,  32.32),
    ("ETA", "eta-Aquariids",           338.0,  -1.0, 2.4,  50.0,  45.50),
    ("SDA", "Southern delta-Aquariids", 340.0, -16.4, 3.2,  25.0, 125.00),
    ("CAP", "alpha-Capricornids",      307.0, -10.2, 2.5,   5.0, 127.00),
    ("PER", "Perseids",                 48.0,  58.0, 2.2, 100.0, 140.00),
    ("AUR", "Aurigids",                 91.0,  39.0, 2.5,   6.0, 158.60),
    ("ORI", "Orionids",                 95.0,  15.7, 2.5,  20.0, 208.00),
    ("STA", "Southern Taurids",         32.0,   9.0, 2.3,   5.0, 223.00),
    ("NTA", "Northern Taurids",         58.0,  22.0, 2.3,   5.0, 230.00),
    ("LEO", "Leonids",                 152.1,  21.6, 2.5,  10.0, 235.27),
    ("GEM", "Geminids",                112.3,  32.5, 2.6, 150.0, 262.20),
    ("URS", "Ursids",                  217.0,  75.8, 3.0,  10.0, 270.70),
];

/// Materializes the built-in table into owned records.
pub(crate) fn builtin_records() -> Vec<ShowerRecord> {
    BUILTIN_SHOWERS
        .iter()
        .map(|&(code, name, ra, dec, r, zhr, peak)| {
            ShowerRecord::new(code, name, ra, dec, r, zhr, peak)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_record_is_valid() {
        for record in builtin_records() {
            record
                .validate()
                .unwrap_or_else(|e| panic!("builtin record failed validation: {e}"));
        }
    }

    #[test]
    fn builtin_codes_are_unique() {
        let records = builtin_records();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert_ne!(a.code(), b.code(), "duplicate builtin code {}", a.code());
            }
        }
    }

    #[test]
    fn builtin_has_expected_majors() {
        let records = builtin_records();
        for code in ["QUA", "PER", "GEM"] {
            assert!(
                records.iter().any(|r| r.code() == code),
                "missing major shower {code}"
            );
        }
    }
}

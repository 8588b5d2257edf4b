//! Error types for the meteoreo-catalog crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the meteoreo-catalog crate.
///
/// Catalog problems are fatal load-time errors: the engine never validates
/// shower parameters per call, so nothing malformed may get past here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Returned when a catalog file cannot be opened or read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// Path to the catalog file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Wraps a CSV parse failure from the underlying reader.
    #[error("malformed catalog row in {}: {reason}", path.display())]
    Parse {
        /// Path to the catalog file.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when a record fails validation.
    #[error("invalid shower record '{code}': {reason}")]
    InvalidRecord {
        /// Code of the offending record (may be empty if the code itself is bad).
        code: String,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Returned when two records share the same code.
    #[error("duplicate shower code '{code}'")]
    DuplicateCode {
        /// The repeated code.
        code: String,
    },

    /// Returned when a catalog contains no records at all.
    #[error("catalog is empty")]
    Empty,
}

//! The immutable, code-indexed shower catalog.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::builtin::builtin_records;
use crate::error::CatalogError;
use crate::loader;
use crate::record::ShowerRecord;

/// Immutable collection of validated [`ShowerRecord`]s, keyed by code.
///
/// Built once at startup (from the built-in table or a CSV file) and then
/// shared read-only with the prediction engine.
#[derive(Debug, Clone)]
pub struct ShowerCatalog {
    records: Vec<ShowerRecord>,
    index: BTreeMap<String, usize>,
}

impl ShowerCatalog {
    /// Builds a catalog from already-materialized records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty record list,
    /// [`CatalogError::InvalidRecord`] for the first record that fails
    /// validation, and [`CatalogError::DuplicateCode`] for a repeated code.
    pub fn from_records(records: Vec<ShowerRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = BTreeMap::new();
        for (i, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.code().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateCode {
                    code: record.code().to_string(),
                });
            }
        }

        Ok(Self { records, index })
    }

    /// Returns the built-in working list of major annual showers.
    ///
    /// The built-in table is validated by construction, so this cannot fail.
    pub fn builtin() -> Self {
        Self::from_records(builtin_records())
            .unwrap_or_else(|e| unreachable!("builtin shower table is invalid: {e}"))
    }

    /// Loads a catalog from a CSV file.
    ///
    /// Expected header:
    /// `code,name,radiant_ra_deg,radiant_dec_deg,population_index,max_zhr,peak_solar_lon_deg`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] or [`CatalogError::Parse`] for file-level
    /// problems, plus every error [`from_records`](Self::from_records) can
    /// produce. Malformed input is fatal: no partial catalog is returned.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let records = loader::read_csv(path)?;
        let catalog = Self::from_records(records)?;
        info!(
            path = %path.display(),
            n_showers = catalog.len(),
            "loaded shower catalog"
        );
        Ok(catalog)
    }

    /// Looks up a record by shower code.
    pub fn get(&self, code: &str) -> Option<&ShowerRecord> {
        self.index.get(code).map(|&i| &self.records[i])
    }

    /// Iterates over all records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ShowerRecord> {
        self.records.iter()
    }

    /// Returns the number of showers in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the catalog holds no records.
    ///
    /// Always `false` for a successfully constructed catalog; present to
    /// keep the container API conventional.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

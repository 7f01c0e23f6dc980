//! City-to-source-file catalog.

use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};

/// The cities with published trip data, paired with their CSV file names.
static CITY_FILES: &[(&str, &str)] = &[
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

/// Immutable mapping from city key to CSV path, rooted at a data directory
/// chosen at startup.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    data_dir: PathBuf,
}

impl DatasetCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        DatasetCatalog {
            data_dir: data_dir.into(),
        }
    }

    /// The valid city keys, in catalog order.
    pub fn cities(&self) -> impl Iterator<Item = &'static str> {
        CITY_FILES.iter().map(|(city, _)| *city)
    }

    /// Resolves a city key to its CSV path.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UnknownCity`] for a key that is not in the
    /// catalog. The prompt layer validates city names before they reach
    /// here, so this is a contract violation rather than user error.
    pub fn source_path(&self, city: &str) -> Result<PathBuf> {
        CITY_FILES
            .iter()
            .find(|(key, _)| *key == city)
            .map(|(_, file)| self.data_dir.join(file))
            .ok_or_else(|| ExplorerError::UnknownCity(city.to_string()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

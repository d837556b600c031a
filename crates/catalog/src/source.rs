//! Where catalogs come from.
//!
//! Consumers receive a catalog through a [`CatalogSource`] instead of
//! reaching into global data, so a JSON export, a compiled-in dataset and
//! a test fixture are interchangeable.

use crate::error::Result;
use crate::index::Catalog;
use crate::parser;
use std::path::PathBuf;
use tracing::debug;

/// Dataset compiled into the binary, used when no other catalog is available
const STATIC_CATALOG: &str = include_str!("../data/colleges.json");

/// A provider of college catalogs.
///
/// `Send + Sync` so a source can be shared by concurrent requests.
pub trait CatalogSource: Send + Sync {
    /// Returns the name of this source (for logging)
    fn name(&self) -> &str;

    /// Load a fresh catalog
    fn load(&self) -> Result<Catalog>;
}

/// Reads a catalog from a JSON file on every load
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Catalog> {
        Catalog::load_from_file(&self.path)
    }
}

/// The compiled-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<Catalog> {
        let records = parser::parse_catalog(STATIC_CATALOG)?;
        debug!("Parsed {} colleges from the static dataset", records.len());
        Catalog::from_records(records)
    }
}

/// Serves records handed to it directly. Handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    catalog: Catalog,
}

impl InMemorySource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for InMemorySource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_is_valid() {
        let catalog = StaticSource.load().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.validate().is_ok());
        assert!(catalog.records().iter().all(|c| !c.entrance_exams.is_empty()));
    }

    #[test]
    fn test_missing_file_source_errors() {
        let source = JsonFileSource::new("/no/such/catalog.json");
        assert!(source.load().is_err());
        assert_eq!(source.name(), "json-file");
    }
}

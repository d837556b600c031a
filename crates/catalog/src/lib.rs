//! # Catalog Crate
//!
//! This crate owns the data side of college recommendations: the records
//! themselves, the student profile read from the application form, and the
//! sources a catalog can be loaded from.
//!
//! ## Main Components
//!
//! - **types**: Domain types (CollegeRecord, StudentProfile, ExamKind)
//! - **parser**: Parse catalog and profile JSON documents
//! - **index**: The ordered, id-indexed `Catalog`
//! - **source**: `CatalogSource` trait with file, static and in-memory sources
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, CatalogSource, JsonFileSource};
//!
//! let catalog = JsonFileSource::new("data/colleges.json").load()?;
//! let college = catalog.get("nit-trichy").unwrap();
//! println!("{} is in {:?}", college.name, college.state);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use source::{CatalogSource, InMemorySource, JsonFileSource, StaticSource};
pub use types::{CollegeId, CollegeRecord, ExamKind, StudentProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_in_memory_source_returns_copy() {
        let catalog = Catalog::from_records(vec![CollegeRecord::new("a", "Alpha")]).unwrap();
        let source = InMemorySource::new(catalog);

        let first = source.load().unwrap();
        let second = source.load().unwrap();
        assert_eq!(first.records(), second.records());
        assert_eq!(source.name(), "in-memory");
    }
}

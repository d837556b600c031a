//! Parsers for catalog and profile documents.
//!
//! - catalog: a JSON array of college objects, as served by `GET /colleges`
//! - profile: a flat JSON object of form fields

use crate::error::{CatalogError, Result};
use crate::types::{CollegeRecord, StudentProfile};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog document into records, preserving document order
pub fn parse_catalog(text: &str) -> Result<Vec<CollegeRecord>> {
    serde_json::from_str(text).map_err(|source| CatalogError::JsonError {
        document: "catalog".to_string(),
        source,
    })
}

/// Parse a student profile document
pub fn parse_profile(text: &str) -> Result<StudentProfile> {
    serde_json::from_str(text).map_err(|source| CatalogError::JsonError {
        document: "profile".to_string(),
        source,
    })
}

/// Read and parse a catalog file
pub fn load_catalog_file(path: &Path) -> Result<Vec<CollegeRecord>> {
    parse_catalog(&read_file(path)?)
}

/// Read and parse a profile file
pub fn load_profile_file(path: &Path) -> Result<StudentProfile> {
    parse_profile(&read_file(path)?)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

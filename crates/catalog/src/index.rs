//! The indexed, in-memory college catalog.
//!
//! Records keep their document order (ranking ties fall back to it) and a
//! HashMap gives O(1) lookups by id.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{CollegeId, CollegeRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Ordered college records with an id index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) records: Vec<CollegeRecord>,
    pub(crate) by_id: HashMap<CollegeId, usize>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records in order.
    ///
    /// Fails on an empty or repeated id; ranking results are identified by
    /// id so both would make them ambiguous.
    pub fn from_records(records: Vec<CollegeRecord>) -> Result<Self> {
        let mut catalog = Self {
            records: Vec::with_capacity(records.len()),
            by_id: HashMap::with_capacity(records.len()),
        };
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// Load and index a catalog file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading college catalog from {:?}", path);
        let records = parser::load_catalog_file(path)?;
        let catalog = Self::from_records(records)?;
        info!("Loaded {} colleges", catalog.len());
        Ok(catalog)
    }

    /// Append a record, keeping ids unique
    pub fn insert(&mut self, record: CollegeRecord) -> Result<()> {
        if record.id.trim().is_empty() {
            return Err(CatalogError::MissingField {
                field: "id".to_string(),
                position: self.records.len(),
            });
        }
        if self.by_id.contains_key(&record.id) {
            return Err(CatalogError::DuplicateId { id: record.id });
        }
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CollegeRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    /// All records in catalog order
    pub fn records(&self) -> &[CollegeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive name search.
    ///
    /// Exact name matches come first, then substring matches; within each
    /// group higher-rated colleges lead and catalog order breaks ties.
    pub fn search(&self, query: &str) -> Vec<&CollegeRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &CollegeRecord)> = self
            .records
            .iter()
            .filter_map(|college| {
                let name = college.name.to_lowercase();
                if name == query {
                    Some((0, college))
                } else if name.contains(&query) {
                    Some((1, college))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| b.1.rating_or_zero().total_cmp(&a.1.rating_or_zero()))
        });
        debug!("Search '{}' matched {} colleges", query, matches.len());

        matches.into_iter().map(|(_, college)| college).collect()
    }

    /// Check that numeric fields sit in their documented ranges.
    ///
    /// Ranking tolerates out-of-range values, so callers usually just log
    /// the result. Returns the first offending field.
    pub fn validate(&self) -> Result<()> {
        for college in &self.records {
            if let Some(rating) = college.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(invalid(college, "rating", rating));
                }
            }
            if let Some(placement) = college.placement_percent {
                if !(0.0..=100.0).contains(&placement) {
                    return Err(invalid(college, "placementPercent", placement));
                }
            }
        }
        Ok(())
    }
}

fn invalid(college: &CollegeRecord, field: &str, value: f64) -> CatalogError {
    CatalogError::InvalidValue {
        id: college.id.clone(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

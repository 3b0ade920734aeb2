//! The static facility catalogue the pipeline filters against.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Coordinate, Facility, FacilityId};

/// Facility dataset bundled into the binary at compile time.
const BUNDLED_FACILITIES: &str = include_str!("data/facilities.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("facility catalogue parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    facilities: Vec<FacilityRecord>,
}

#[derive(Debug, Deserialize)]
struct FacilityRecord {
    name: String,
    longitude: f64,
    latitude: f64,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    website: Option<String>,
}

/// The read-only candidate set, loaded once for the process lifetime.
///
/// Ids are assigned sequentially in document order, and `facilities` always
/// iterates in that order, which is what makes tie ranking deterministic.
/// Coordinates are taken as given; the catalogue does not validate them.
#[derive(Debug, Clone)]
pub struct FacilityCatalog {
    facilities: Vec<Facility>,
}

impl FacilityCatalog {
    /// Loads the dataset bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the bundled document is malformed,
    /// which would be a packaging defect rather than a runtime condition.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_FACILITIES)
    }

    /// Parses a catalogue from a JSON document of the bundled shape.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let facilities = file
            .facilities
            .into_iter()
            .enumerate()
            .map(|(index, record)| Facility {
                id: FacilityId(index as u32),
                name: record.name,
                coordinate: Coordinate::new(record.longitude, record.latitude),
                address: record.address,
                website: record.website,
            })
            .collect();
        Ok(Self { facilities })
    }

    /// The complete catalogue, in load order.
    #[must_use]
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

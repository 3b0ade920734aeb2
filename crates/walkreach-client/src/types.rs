//! Wire types for the Mapbox Geocoding and Isochrone responses.
//!
//! Only the fields the pipeline consumes are modeled; everything else in the
//! response bodies is ignored by serde.

use serde::Deserialize;
use walkreach_core::{Coordinate, Suggestion};

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub features: Vec<GeocodeFeature>,
}

/// One geocoder match. `center` is a GeoJSON `[longitude, latitude]` pair.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeFeature {
    /// Full canonical label, e.g. "1000 4th Ave, Seattle, Washington 98104".
    pub place_name: String,
    /// Headline of the match, e.g. the street address or place name alone.
    pub text: String,
    pub center: [f64; 2],
}

impl GeocodeFeature {
    pub(crate) fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.center[0], self.center[1])
    }

    /// Splits the canonical label into a dropdown headline and its
    /// supporting context (everything after the first comma).
    pub(crate) fn into_suggestion(self) -> Suggestion {
        let secondary = self
            .place_name
            .split_once(", ")
            .map(|(_, rest)| rest.to_owned())
            .unwrap_or_default();
        Suggestion {
            primary_text: self.text,
            secondary_text: secondary,
            label: self.place_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneResponse {
    pub features: Vec<IsochroneFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneFeature {
    pub geometry: IsochroneGeometry,
}

/// GeoJSON `Polygon` geometry: rings of `[longitude, latitude]` positions.
/// The first ring is the outer boundary; holes, if any, follow and are
/// ignored by the pipeline.
#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneGeometry {
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

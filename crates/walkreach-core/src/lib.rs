//! Domain types and pure computation for the walkreach search pipeline.
//!
//! Everything in this crate is synchronous and side-effect-free: the
//! coordinate/polygon/facility value types, the geometric predicates the
//! pipeline filters with, and the static facility catalogue. Network
//! clients live in `walkreach-client`; the state machines that drive a
//! search live in `walkreach-search`.

pub mod catalog;
pub mod error;
pub mod geo;
pub mod types;

pub use catalog::{CatalogError, FacilityCatalog};
pub use error::SearchError;
pub use geo::{format_distance, great_circle_distance_meters, point_in_polygon};
pub use types::{
    Coordinate, Facility, FacilityId, Polygon, RankedFacility, ResolvedAddress, SearchResult,
    Suggestion, TravelMode,
};

//! HTTP clients for the two external services the search pipeline consumes:
//! the Mapbox Geocoding v5 API (address resolution and autocomplete) and the
//! Mapbox Isochrone v1 API (walking-time reachability polygons).
//!
//! Both clients take an overridable base URL so tests can point them at a
//! local mock server. The [`provider`] module defines the traits the search
//! state machines are generic over.

pub mod error;
pub mod geocode;
pub mod isochrone;
pub mod provider;
pub(crate) mod types;

pub use error::ClientError;
pub use geocode::GeocodingClient;
pub use isochrone::IsochroneClient;
pub use provider::{Geocoder, IsochroneProvider};

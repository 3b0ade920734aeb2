//! Provider traits the search state machines are generic over.
//!
//! The concrete HTTP clients implement these; tests substitute in-memory
//! fakes. The whole system runs on one logical thread with cooperative
//! suspension at I/O points, so the futures carry no `Send` bound.

use walkreach_core::{Coordinate, Polygon, ResolvedAddress, Suggestion, TravelMode};

use crate::error::ClientError;
use crate::geocode::GeocodingClient;
use crate::isochrone::IsochroneClient;

#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// Resolves a free-text query to its single best match.
    async fn resolve_address(&self, query: &str) -> Result<ResolvedAddress, ClientError>;

    /// Fetches ranked autocomplete candidates; failures degrade to empty.
    async fn suggest(&self, query: &str) -> Vec<Suggestion>;
}

#[allow(async_fn_in_trait)]
pub trait IsochroneProvider {
    /// Fetches the polygon reachable from `origin` within `minutes`.
    async fn fetch_reachable_region(
        &self,
        origin: Coordinate,
        mode: TravelMode,
        minutes: u32,
    ) -> Result<Polygon, ClientError>;
}

impl Geocoder for GeocodingClient {
    async fn resolve_address(&self, query: &str) -> Result<ResolvedAddress, ClientError> {
        Self::resolve_address(self, query).await
    }

    async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        Self::suggest(self, query).await
    }
}

impl IsochroneProvider for IsochroneClient {
    async fn fetch_reachable_region(
        &self,
        origin: Coordinate,
        mode: TravelMode,
        minutes: u32,
    ) -> Result<Polygon, ClientError> {
        Self::fetch_reachable_region(self, origin, mode, minutes).await
    }
}

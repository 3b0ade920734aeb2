//! Client for the Mapbox Isochrone v1 API.

use std::time::Duration;

use reqwest::Client;
use walkreach_core::{Coordinate, Polygon, TravelMode};

use crate::error::ClientError;
use crate::types::IsochroneResponse;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// HTTP client for reachability (isochrone) contours.
pub struct IsochroneClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl IsochroneClient {
    /// Creates a client pointed at the production Mapbox API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Self::with_base_url(access_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` has no scheme.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("walkreach/0.1")
            .build()?;

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_owned(),
            });
        }

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the area reachable from `origin` within `minutes` under the
    /// given travel mode, as a single polygon.
    ///
    /// Requests exactly one contour in polygon form with denoising enabled,
    /// so degenerate multi-part slivers are suppressed upstream. Only the
    /// outer ring of the first returned feature is used; holes and further
    /// features are ignored.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NoRegion`] — zero polygon features, or an outer ring
    ///   with fewer than 3 distinct vertices.
    /// - [`ClientError::Status`] — non-2xx HTTP status.
    /// - [`ClientError::Http`] — transport failure.
    /// - [`ClientError::Deserialize`] — response body has an unexpected shape.
    pub async fn fetch_reachable_region(
        &self,
        origin: Coordinate,
        mode: TravelMode,
        minutes: u32,
    ) -> Result<Polygon, ClientError> {
        let url = format!(
            "{}/isochrone/v1/mapbox/{}/{},{}",
            self.base_url,
            mode.profile(),
            origin.longitude,
            origin.latitude
        );

        let minutes = minutes.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("contours_minutes", minutes.as_str()),
                ("polygons", "true"),
                ("denoise", "1"),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed: IsochroneResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: format!("isochrone response for {},{}", origin.longitude, origin.latitude),
                source: e,
            })?;

        let Some(feature) = parsed.features.into_iter().next() else {
            tracing::debug!(minutes, "isochrone service returned zero features");
            return Err(ClientError::NoRegion);
        };

        let Some(outer_ring) = feature.geometry.coordinates.into_iter().next() else {
            return Err(ClientError::NoRegion);
        };

        let ring = outer_ring
            .into_iter()
            .map(|[longitude, latitude]| Coordinate::new(longitude, latitude))
            .collect();

        Polygon::new(ring).ok_or(ClientError::NoRegion)
    }
}

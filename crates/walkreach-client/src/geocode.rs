//! Client for the Mapbox Geocoding v5 API.
//!
//! Two call paths share one endpoint: [`GeocodingClient::resolve_address`]
//! asks for the single best match of a submitted query, and
//! [`GeocodingClient::suggest`] asks for up to five autocomplete candidates
//! while the user is still typing. Suggestion failures never propagate; the
//! dropdown degrades to empty instead of interrupting typing.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use walkreach_core::{ResolvedAddress, Suggestion};

use crate::error::ClientError;
use crate::types::GeocodeResponse;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Maximum autocomplete candidates requested per keystroke.
const SUGGESTION_LIMIT: u32 = 5;

/// Restrict matches to things a person can walk from: street addresses,
/// places, and postal codes.
const RESULT_TYPES: &str = "address,place,postcode";

/// Characters kept verbatim when the query is embedded as a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// HTTP client for forward geocoding and address autocomplete.
pub struct GeocodingClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl GeocodingClient {
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

    /// Resolves a free-text query to its single best coordinate + label.
    ///
    /// Requests exactly one result constrained to [`RESULT_TYPES`], so no
    /// local ranking or tie-breaking is needed.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NoMatch`] — the geocoder returned zero features.
    /// - [`ClientError::Status`] — non-2xx HTTP status.
    /// - [`ClientError::Http`] — transport failure.
    /// - [`ClientError::Deserialize`] — response body has an unexpected shape.
    pub async fn resolve_address(&self, query: &str) -> Result<ResolvedAddress, ClientError> {
        let response = self.fetch_features(query, false, 1).await?;

        let Some(feature) = response.features.into_iter().next() else {
            tracing::debug!(query, "geocoder returned zero matches");
            return Err(ClientError::NoMatch {
                query: query.to_owned(),
            });
        };

        Ok(ResolvedAddress {
            coordinate: feature.coordinate(),
            label: feature.place_name,
        })
    }

    /// Fetches up to five autocomplete candidates for a partial query,
    /// preserving the upstream service's own ranking.
    ///
    /// Any failure degrades to an empty list. Autocomplete runs on every
    /// keystroke; surfacing its errors would only add noise.
    pub async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        match self.fetch_features(query, true, SUGGESTION_LIMIT).await {
            Ok(response) => response
                .features
                .into_iter()
                .map(crate::types::GeocodeFeature::into_suggestion)
                .collect(),
            Err(error) => {
                tracing::debug!(query, %error, "suggestion fetch failed; returning no suggestions");
                Vec::new()
            }
        }
    }

    async fn fetch_features(
        &self,
        query: &str,
        autocomplete: bool,
        limit: u32,
    ) -> Result<GeocodeResponse, ClientError> {
        let encoded = utf8_percent_encode(query, PATH_SEGMENT);
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{encoded}.json",
            self.base_url
        );

        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("autocomplete", if autocomplete { "true" } else { "false" }),
                ("limit", limit.as_str()),
                ("types", RESULT_TYPES),
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
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: format!("geocoding response for \"{query}\""),
            source: e,
        })
    }
}

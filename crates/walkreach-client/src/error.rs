use thiserror::Error;

/// Errors from the geocoding and isochrone HTTP clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure from the underlying HTTP client
    /// (no connectivity, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream service answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The geocoder returned zero features for the query.
    #[error("no geocoder match for \"{query}\"")]
    NoMatch { query: String },

    /// The isochrone service returned zero polygon features, or a ring too
    /// degenerate to filter against.
    #[error("no usable reachability polygon in isochrone response")]
    NoRegion,

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not usable.
    #[error("invalid base URL \"{url}\"")]
    InvalidBaseUrl { url: String },
}

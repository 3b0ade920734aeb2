use thiserror::Error;

/// Terminal failure of one search pipeline run.
///
/// The orchestrator surfaces the first error it hits and aborts the
/// remaining steps; there are no partial results and no automatic retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Empty or whitespace-only query, rejected before any network call.
    #[error("empty search query")]
    InvalidInput,

    /// The geocoder returned zero matches for the query.
    #[error("no address match for \"{query}\"")]
    NotFound { query: String },

    /// The isochrone service returned no usable reachability polygon.
    #[error("no reachable region returned for the resolved address")]
    NoRegion,

    /// An upstream service answered with a non-success HTTP status.
    #[error("upstream service returned HTTP {status}")]
    Service { status: u16 },

    /// The transport itself failed (no connectivity, DNS, timeout).
    #[error("network failure: {message}")]
    Network { message: String },

    /// Anything outside the named kinds, e.g. a malformed response body.
    #[error("unexpected search failure")]
    Unexpected,
}

impl SearchError {
    /// The sentence shown to the user for this failure.
    ///
    /// Each named kind gets a distinct message; anything else falls back to
    /// a generic one rather than leaking internal detail.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Please enter an address to search for.",
            Self::NotFound { .. } => "No address matched your search. Try a more specific query.",
            Self::NoRegion => "Couldn't determine the walkable area around that address.",
            Self::Service { .. } => "The search service is having trouble. Please try again later.",
            Self::Network { .. } => "Couldn't reach the search service. Check your connection.",
            Self::Unexpected => "Something went wrong. Please try again.",
        }
    }
}

//! The search pipeline state machine.
//!
//! One submitted query runs geocode → fetch region → filter → rank as a
//! strictly sequential pipeline; the first failure aborts the rest. A newer
//! `submit` supersedes any in-flight run: the stale run keeps executing
//! until its next generation check, but none of its output is ever
//! published (drop-on-arrival rather than transport abort).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use walkreach_client::{ClientError, Geocoder, IsochroneProvider};
use walkreach_core::{
    geo, Coordinate, Facility, FacilityCatalog, Polygon, RankedFacility, SearchError,
    SearchResult, TravelMode,
};

/// Fixed parameters of the reachability query.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub mode: TravelMode,
    /// Travel-time budget in minutes.
    pub minutes: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: TravelMode::Walking,
            minutes: 10,
        }
    }
}

/// Observable state of the pipeline, published over a watch channel.
///
/// `Done` with an empty ranked list is a successful search that enclosed no
/// facilities; it is deliberately distinct from every `Failed` state.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Geocoding,
    FetchingRegion,
    Filtering,
    Done(SearchResult),
    Failed(SearchError),
}

/// Drives one session's searches. Construct one per session, not globally.
pub struct SearchOrchestrator<G, I> {
    geocoder: G,
    isochrones: I,
    catalog: Arc<FacilityCatalog>,
    config: SearchConfig,
    /// Generation of the most recent submission; output from older
    /// generations is discarded.
    generation: AtomicU64,
    state: watch::Sender<SearchState>,
}

impl<G: Geocoder, I: IsochroneProvider> SearchOrchestrator<G, I> {
    pub fn new(geocoder: G, isochrones: I, catalog: Arc<FacilityCatalog>) -> Self {
        Self::with_config(geocoder, isochrones, catalog, SearchConfig::default())
    }

    pub fn with_config(
        geocoder: G,
        isochrones: I,
        catalog: Arc<FacilityCatalog>,
        config: SearchConfig,
    ) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            geocoder,
            isochrones,
            catalog,
            config,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// A receiver for the rendering collaborator to observe state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Runs the full pipeline for one query.
    ///
    /// Supersedes any in-flight search immediately: from the moment this is
    /// called, the older run can no longer publish anything. The published
    /// terminal state is `Done` or `Failed`; intermediate states appear on
    /// the watch channel as the run progresses.
    pub async fn submit(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.trim();

        if query.is_empty() {
            self.publish(generation, SearchState::Failed(SearchError::InvalidInput));
            return;
        }

        if !self.publish(generation, SearchState::Geocoding) {
            return;
        }
        let resolved = match self.geocoder.resolve_address(query).await {
            Ok(resolved) => resolved,
            Err(error) => {
                self.publish(generation, SearchState::Failed(map_client_error(error)));
                return;
            }
        };

        if !self.publish(generation, SearchState::FetchingRegion) {
            return;
        }
        let region = match self
            .isochrones
            .fetch_reachable_region(resolved.coordinate, self.config.mode, self.config.minutes)
            .await
        {
            Ok(region) => region,
            Err(error) => {
                self.publish(generation, SearchState::Failed(map_client_error(error)));
                return;
            }
        };

        if !self.publish(generation, SearchState::Filtering) {
            return;
        }
        let ranked = rank_enclosed(resolved.coordinate, &region, self.catalog.facilities());

        self.publish(
            generation,
            SearchState::Done(SearchResult {
                resolved,
                region,
                ranked,
            }),
        );
    }

    /// Publishes `state` unless this run has been superseded. Returns
    /// whether the run is still current.
    fn publish(&self, generation: u64, state: SearchState) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "dropping output of superseded search");
            return false;
        }
        self.state.send_replace(state);
        true
    }
}

/// Facilities enclosed by `region`, ranked ascending by great-circle
/// distance from `origin`.
///
/// The sort is stable, so equidistant facilities keep their catalogue
/// order.
#[must_use]
pub fn rank_enclosed(
    origin: Coordinate,
    region: &Polygon,
    facilities: &[Facility],
) -> Vec<RankedFacility> {
    let mut ranked: Vec<RankedFacility> = facilities
        .iter()
        .filter(|facility| geo::point_in_polygon(facility.coordinate, region))
        .map(|facility| RankedFacility {
            facility: facility.clone(),
            distance_meters: geo::great_circle_distance_meters(origin, facility.coordinate),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    ranked
}

fn map_client_error(error: ClientError) -> SearchError {
    match error {
        ClientError::NoMatch { query } => SearchError::NotFound { query },
        ClientError::NoRegion => SearchError::NoRegion,
        ClientError::Status { status, .. } => SearchError::Service { status },
        ClientError::Http(source) => SearchError::Network {
            message: source.to_string(),
        },
        ClientError::Deserialize { .. } | ClientError::InvalidBaseUrl { .. } => {
            SearchError::Unexpected
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

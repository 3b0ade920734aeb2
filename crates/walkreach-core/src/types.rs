use serde::{Deserialize, Serialize};

/// A WGS84 position. Longitude in [-180, 180], latitude in [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// The single best geocoder match for a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub coordinate: Coordinate,
    /// Canonical human-readable form of the matched address.
    pub label: String,
}

/// One autocomplete candidate, already split for dropdown rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Full canonical label of the match.
    pub label: String,
    /// Headline shown as the dropdown row's first line.
    pub primary_text: String,
    /// Supporting context (city, region, country); may be empty.
    pub secondary_text: String,
}

/// A closed ring of coordinates, e.g. the outer boundary of an isochrone.
///
/// The ring may or may not repeat its first vertex at the end; the
/// point-in-polygon test wraps last→first either way. Construction rejects
/// rings with fewer than 3 distinct vertices, which is how degenerate
/// isochrone responses are filtered out before they reach the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<Coordinate>,
}

impl Polygon {
    /// Builds a polygon from an ordered ring, or `None` if the ring has
    /// fewer than 3 distinct vertices.
    #[must_use]
    pub fn new(ring: Vec<Coordinate>) -> Option<Self> {
        let mut distinct: Vec<Coordinate> = Vec::with_capacity(ring.len());
        for &vertex in &ring {
            if !distinct.contains(&vertex) {
                distinct.push(vertex);
            }
        }
        if distinct.len() < 3 {
            return None;
        }
        Some(Self { ring })
    }

    #[must_use]
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }
}

/// Stable identifier for a facility, assigned by the catalogue at load.
///
/// Rendering collaborators report selections by id rather than by position
/// in the ranked list, so marker and list ordering can never desynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacilityId(pub u32);

impl std::fmt::Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the static candidate set. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub coordinate: Coordinate,
    pub address: Option<String>,
    pub website: Option<String>,
}

/// A facility that survived the reachability filter, with its straight-line
/// distance from the resolved origin. Computed fresh per search.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFacility {
    pub facility: Facility,
    pub distance_meters: f64,
}

/// The complete outcome of one successful pipeline run.
///
/// Constructed atomically at the end of a run and superseded wholesale by
/// the next; never partially updated. An empty `ranked` list is a valid
/// success (nothing reachable), not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub resolved: ResolvedAddress,
    pub region: Polygon,
    /// Ascending by distance; ties keep catalogue order.
    pub ranked: Vec<RankedFacility>,
}

/// Travel mode for the reachability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Walking,
    Cycling,
    Driving,
}

impl TravelMode {
    /// The Mapbox routing profile segment for this mode.
    #[must_use]
    pub const fn profile(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Driving => "driving",
        }
    }
}

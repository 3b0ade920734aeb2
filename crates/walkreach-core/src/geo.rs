//! Pure geometric and formatting helpers for the search pipeline.

use crate::types::{Coordinate, Polygon};

/// Mean Earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Even-odd (ray casting) point-in-polygon test.
///
/// Casts a ray eastward from the point and toggles inclusion on each edge
/// crossing. Horizontal edges never satisfy the strict latitude-band
/// inequality, so they are skipped and cannot divide by zero. The result is
/// independent of ring orientation.
///
/// Points exactly on an edge have unspecified inclusion; which side they
/// land on depends on floating-point rounding. This is the inherent
/// ambiguity of ray casting and is left as-is.
#[must_use]
pub fn point_in_polygon(point: Coordinate, polygon: &Polygon) -> bool {
    let ring = polygon.ring();
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        let straddles = (a.latitude > point.latitude) != (b.latitude > point.latitude);
        if straddles {
            let crossing_longitude = (b.longitude - a.longitude)
                * (point.latitude - a.latitude)
                / (b.latitude - a.latitude)
                + a.longitude;
            if point.longitude < crossing_longitude {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Great-circle distance between two coordinates in meters (haversine).
///
/// Symmetric in its arguments, and zero (within floating tolerance) when
/// they coincide.
#[must_use]
pub fn great_circle_distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Formats a distance for display: whole meters below 1 km, one decimal of
/// kilometers at or above.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;

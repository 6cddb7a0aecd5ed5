//! Polygon rings approximating circles on the earth's surface.
//!
//! The map overlay draws a disc around each competitor pin. Mapping layers
//! consume polygons rather than circles, so the disc is approximated by a
//! closed ring of vertices computed with the equirectangular approximation.

use geo::{Coord, LineString};

use crate::distance::{degrees_of_latitude, degrees_of_longitude};
use crate::grid::DEFAULT_EXCLUSION_RADIUS_MILES;

/// Number of ring vertices used when callers do not specify one.
pub const DEFAULT_RING_POINTS: usize = 32;

/// Build a closed ring of `points + 1` coordinates approximating a circle.
///
/// The ring is closed: the final coordinate repeats the first exactly. A
/// radius of zero collapses every vertex onto the center. `points` is
/// clamped to at least one. Behaviour at latitude ±90° is undefined (the
/// longitude correction divides by `cos(latitude)`), which is out of domain
/// for business pins.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use oppmap_core::{DEFAULT_RING_POINTS, circle_ring};
///
/// let ring = circle_ring(Coord { x: -0.12, y: 51.5 }, 0.5, DEFAULT_RING_POINTS);
/// assert_eq!(ring.0.len(), DEFAULT_RING_POINTS + 1);
/// assert_eq!(ring.0.first(), ring.0.last());
/// ```
#[must_use]
pub fn circle_ring(center: Coord, radius_miles: f64, points: usize) -> LineString {
    let points = points.max(1);
    let radius_lat = degrees_of_latitude(radius_miles);
    let radius_lng = degrees_of_longitude(radius_miles, center.y);

    let mut coords: Vec<Coord> = (0..points)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (points as f64);
            Coord {
                x: center.x + radius_lng * theta.cos(),
                y: center.y + radius_lat * theta.sin(),
            }
        })
        .collect();
    if let Some(&first) = coords.first() {
        coords.push(first);
    }
    LineString::new(coords)
}

/// Ring the fixed competitor-exclusion radius around a pin location.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use oppmap_core::{DEFAULT_RING_POINTS, exclusion_zone};
///
/// let ring = exclusion_zone(Coord { x: 0.0, y: 0.0 });
/// assert_eq!(ring.0.len(), DEFAULT_RING_POINTS + 1);
/// ```
#[must_use]
pub fn exclusion_zone(location: Coord) -> LineString {
    circle_ring(location, DEFAULT_EXCLUSION_RADIUS_MILES, DEFAULT_RING_POINTS)
}

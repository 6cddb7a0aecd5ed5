//! Distance helpers shared by the grid scorer and circle generator.
//!
//! Scoring distances use the haversine great-circle formula. Conversions
//! from miles to degrees use the equirectangular approximation (1 degree of
//! latitude spans roughly 111 km), which is accurate to within a few percent
//! at the sub-five-mile radii the overlay works with.

use geo::Coord;

/// Mean earth radius in miles used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Kilometres per degree of latitude under the equirectangular approximation.
const KM_PER_DEGREE_LATITUDE: f64 = 111.0;

/// Kilometres per statute mile.
const KM_PER_MILE: f64 = 1.609_344;

/// Great-circle distance between two WGS84 coordinates, in miles.
///
/// Coordinates follow the crate convention of `x = longitude` and
/// `y = latitude`. The function is total over finite input: it is pure,
/// symmetric, and returns zero for identical points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use oppmap_core::haversine_miles;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 0.0, y: 1.0 };
/// let d = haversine_miles(a, b);
/// assert!((d - 69.1).abs() < 0.1);
/// ```
#[must_use]
pub fn haversine_miles(a: Coord, b: Coord) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1.0 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Degrees of latitude spanned by `miles` under the equirectangular
/// approximation.
pub(crate) fn degrees_of_latitude(miles: f64) -> f64 {
    miles * KM_PER_MILE / KM_PER_DEGREE_LATITUDE
}

/// Degrees of longitude spanned by `miles` at the given latitude.
///
/// The cosine term corrects for meridian convergence. Undefined at the
/// poles, which are outside the overlay's domain.
pub(crate) fn degrees_of_longitude(miles: f64, at_latitude: f64) -> f64 {
    degrees_of_latitude(miles) / at_latitude.to_radians().cos()
}

//! Core geospatial types and scoring for the opportunity map overlay.
//!
//! The marketplace's map visualisation shades a grid of cells around the
//! viewed location by how far each one sits from existing competitor pins,
//! and rings each pin with its competitor-exclusion zone. This crate holds
//! that kernel: the [`Pin`] domain type, the haversine distance helper, the
//! [`score_grid`] tessellation and scorer, and the [`circle_ring`] polygon
//! generator.
//!
//! Both routines are pure, synchronous, and total over finite coordinates;
//! they own no I/O and no state. Coordinates follow the `geo` convention of
//! `x = longitude` and `y = latitude` in WGS84 degrees.

#![forbid(unsafe_code)]

pub mod circle;
pub mod distance;
pub mod grid;
pub mod pin;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use circle::{DEFAULT_RING_POINTS, circle_ring, exclusion_zone};
pub use distance::{EARTH_RADIUS_MILES, haversine_miles};
pub use grid::{
    DEFAULT_EXCLUSION_RADIUS_MILES, DEFAULT_HALF_WIDTH_MILES, DEFAULT_RESOLUTION,
    DEFAULT_SATURATION_MILES, GridCell, GridConfig, GridConfigError, cell_ring, score_grid,
};
pub use pin::{Pin, PinError, validate_location};
